//! Progress step simulation.
//!
//! While an analysis request is in flight a four-step display advances on a
//! fixed interval. The ticker is cosmetic: it never synchronizes with real
//! backend progress, caps at the last step, and is stopped on every exit
//! path. Completion jumps the counter to the last step.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// The fixed progress step labels, in display order.
pub const STEPS: [&str; 4] = [
    "Deep Crawling (Limit 10)...",
    "Extracting contact sectors...",
    "Business Analysis...",
    "Assembling Intelligence...",
];

/// Index of the final step.
pub const LAST_STEP: usize = STEPS.len() - 1;

/// Default interval between simulated step advances.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_secs(15);

/// Shared step counter, capped at [`LAST_STEP`].
#[derive(Debug, Clone, Default)]
pub struct StepTracker(Arc<AtomicUsize>);

impl StepTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step index.
    pub fn current(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Advances one step; returns the new index, or None once capped.
    pub fn advance(&self) -> Option<usize> {
        self.0
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |step| {
                (step < LAST_STEP).then_some(step + 1)
            })
            .ok()
            .map(|prev| prev + 1)
    }

    /// Jumps straight to the final step.
    pub fn complete(&self) {
        self.0.store(LAST_STEP, Ordering::SeqCst);
    }
}

/// Background task advancing a [`StepTracker`] on a fixed interval.
pub struct ProgressTicker {
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    /// Spawns the ticker. `on_step` is invoked with each newly reached step
    /// index; once the tracker caps, no further calls are made.
    pub fn spawn<F>(tracker: StepTracker, interval: Duration, mut on_step: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        // tokio::time::interval panics on a zero period
        let interval = interval.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first interval tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Some(step) = tracker.advance() {
                    on_step(step);
                }
            }
        });
        Self { handle }
    }

    /// Stops the ticker. Called on every exit path of an analysis.
    pub fn stop(self) {
        self.handle.abort();
    }
}
