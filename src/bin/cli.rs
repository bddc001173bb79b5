//! SiteScope terminal client.
//!
//! Submits a URL to the analysis API, shows the four-step progress display
//! while the request is in flight, and renders the returned report.

use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use sitescope::client::{
    self, render_report, step_line, AnalysisSession, ApiClient, SubmitOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "sitescope")]
#[command(about = "Analyze a website into a structured business intelligence report")]
#[command(version)]
struct Cli {
    /// Website URL to analyze (e.g. https://example.com)
    url: Option<String>,

    /// Base URL of the SiteScope API
    #[arg(long, default_value = "http://localhost:8000", env = "SITESCOPE_API")]
    api: String,

    /// Seconds between simulated progress steps
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    step_interval: u64,
}


#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let url = cli.url.unwrap_or_default();

    let api = ApiClient::new(&cli.api);
    let mut session = AnalysisSession::new();

    let outcome = client::submit(
        &mut session,
        &api,
        &url,
        Duration::from_secs(cli.step_interval),
        |step| eprintln!("{}", step_line(step)),
    )
    .await;

    if outcome == SubmitOutcome::Skipped {
        eprintln!("{}", "No URL provided. Usage: sitescope <url>".yellow());
        std::process::exit(2);
    }

    if let Some(report) = session.report() {
        eprintln!("{}", step_line(client::LAST_STEP));
        println!("{}", render_report(report));
        return;
    }

    if let Some(message) = session.error() {
        eprintln!("{} {}", "Error:".red().bold(), message);
        std::process::exit(1);
    }
}
