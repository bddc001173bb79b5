//! Analysis session state.
//!
//! Holds at most one report or one error message at a time. Starting a new
//! analysis always clears both before the request resolves.

use crate::domain::report::Report;

/// Client-side state for one analysis at a time.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    report: Option<Report>,
    error: Option<String>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any prior report and error ahead of a new request.
    pub fn begin(&mut self) {
        self.report = None;
        self.error = None;
    }

    /// Stores a successful analysis result.
    pub fn complete(&mut self, report: Report) {
        self.report = Some(report);
        self.error = None;
    }

    /// Stores a failure message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.report = None;
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_prior_report_and_error() {
        let mut session = AnalysisSession::new();
        session.complete(Report::default());
        assert!(session.report().is_some());

        session.begin();
        assert!(session.report().is_none());
        assert!(session.error().is_none());

        session.fail("boom");
        session.begin();
        assert!(session.error().is_none());
    }

    #[test]
    fn complete_replaces_error() {
        let mut session = AnalysisSession::new();
        session.fail("boom");
        session.complete(Report::default());
        assert!(session.report().is_some());
        assert!(session.error().is_none());
    }

    #[test]
    fn fail_replaces_report() {
        let mut session = AnalysisSession::new();
        session.complete(Report::default());
        session.fail("boom");
        assert_eq!(session.error(), Some("boom"));
        assert!(session.report().is_none());
    }
}
