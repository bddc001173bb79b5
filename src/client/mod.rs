//! Terminal client: submit a URL, simulate progress, render the report.

mod api;
mod progress;
mod render;
mod session;

pub use api::{ApiClient, ApiError, FALLBACK_ERROR};
pub use progress::{ProgressTicker, StepTracker, DEFAULT_STEP_INTERVAL, LAST_STEP, STEPS};
pub use render::{
    render_report, step_line, NO_ADDRESS, NO_EMAIL, NO_PHONE, NO_SOCIAL_LINKS, NO_TECH_STACK,
};
pub use session::AnalysisSession;

use std::time::Duration;

/// Outcome of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The URL was empty; nothing was sent and the session is untouched.
    Skipped,
    /// A request was made; the session holds the report or error message.
    Submitted,
}

/// Submits `url` for analysis.
///
/// An empty URL is a no-op: no network call, no state change. Otherwise the
/// session is cleared, a progress ticker advances `on_step` on the given
/// interval while the request is in flight, and the session ends up holding
/// either the report (progress jumped to the last step) or the failure
/// message. The ticker is stopped on both paths.
pub async fn submit<F>(
    session: &mut AnalysisSession,
    api: &ApiClient,
    url: &str,
    step_interval: Duration,
    mut on_step: F,
) -> SubmitOutcome
where
    F: FnMut(usize) + Send + 'static,
{
    if url.trim().is_empty() {
        return SubmitOutcome::Skipped;
    }

    session.begin();
    let tracker = StepTracker::new();
    on_step(tracker.current());
    let ticker = ProgressTicker::spawn(tracker.clone(), step_interval, on_step);

    match api.analyze(url).await {
        Ok(report) => {
            tracker.complete();
            session.complete(report);
        }
        Err(err) => {
            session.fail(err.display_message());
        }
    }

    ticker.stop();
    SubmitOutcome::Submitted
}
