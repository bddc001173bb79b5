//! Adapters - concrete implementations of the ports plus the HTTP surface.

pub mod ai;
pub mod crawl;
pub mod http;
