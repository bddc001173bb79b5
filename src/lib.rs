//! SiteScope - Website Business Intelligence
//!
//! This crate crawls a target website, synthesizes a structured business
//! intelligence report with an LLM, and serves it over HTTP. It also ships
//! the terminal client that submits URLs and renders reports.

pub mod adapters;
pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod ports;
