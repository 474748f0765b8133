//! Search control: a cooperative stop flag.
//!
//! There is no clock. A caller on another thread raises the flag and the
//! search notices it between iterative-deepening iterations and between root
//! moves, then returns the last fully completed iteration.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag for a running search.
#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
}

impl SearchControl {
    /// Create a control with a fresh, lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a control around an existing flag.
    pub fn with_flag(stopped: Arc<AtomicBool>) -> Self {
        Self { stopped }
    }

    /// Ask the search to stop at its next checkpoint.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Lower the flag so the control can be reused.
    pub fn reset(&self) {
        self.stopped.store(false, Ordering::Release);
    }

    /// Whether a stop has been requested.
    pub fn should_stop(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Reference to the shared stop flag.
    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_lowered() {
        assert!(!SearchControl::new().should_stop());
    }

    #[test]
    fn clones_share_the_flag() {
        let control = SearchControl::new();
        let remote = control.clone();
        remote.stop();
        assert!(control.should_stop());
        control.reset();
        assert!(!remote.should_stop());
    }

    #[test]
    fn wraps_external_flag() {
        let flag = Arc::new(AtomicBool::new(true));
        let control = SearchControl::with_flag(Arc::clone(&flag));
        assert!(control.should_stop());
        flag.store(false, Ordering::Release);
        assert!(!control.should_stop());
    }
}
