//! Domain types for website analysis.

pub mod crawl;
pub mod report;
