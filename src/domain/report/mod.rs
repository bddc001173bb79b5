//! The business intelligence report and its synthesis instructions.

mod model;
mod prompt;

pub use model::{ContactInfo, ProductService, Report, SeoMetadata, SwotAnalysis};
pub use prompt::{analysis_prompt, parse_report, ReportParseError, SYSTEM_PROMPT};
