//! Website analysis use case.

mod analyze_website;

pub use analyze_website::{AnalyzeWebsiteCommand, AnalyzeWebsiteError, AnalyzeWebsiteHandler};
