//! Submission State
//!
//! Explicit state machine for the predict cycle, plus the request ticketing
//! that keeps rapid resubmissions from racing each other.

use agripredict_core::PredictionResult;

/// Lifecycle of one predict request/response cycle
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PredictState {
    /// No request in flight and nothing to show yet
    #[default]
    Idle,

    /// A submission is awaiting the service
    Loading,

    /// The latest submission succeeded
    Ready(PredictionResult),

    /// The latest submission failed; the notice stays until the next attempt
    Errored(String),
}

impl PredictState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The result to render, if any
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Ready(result) => Some(result),
            _ => None,
        }
    }
}

/// Hands out monotonically increasing tickets for submissions. Only the
/// holder of the newest ticket may commit its outcome; earlier responses
/// that resolve late are discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionTracker {
    latest: u64,
}

impl SubmissionTracker {
    /// Start a new submission, invalidating any still in flight
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `ticket` belongs to the newest submission
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction() -> PredictionResult {
        PredictionResult {
            predicted_yield: 4.2,
            recommendation: "Maintain".into(),
            low_yield_alert: false,
        }
    }

    #[test]
    fn test_loading_is_exclusive() {
        assert!(PredictState::Loading.is_loading());
        assert!(!PredictState::Idle.is_loading());
        assert!(!PredictState::Ready(prediction()).is_loading());
        assert!(!PredictState::Errored("down".into()).is_loading());
    }

    #[test]
    fn test_only_ready_exposes_a_result() {
        assert!(PredictState::Idle.result().is_none());
        assert!(PredictState::Loading.result().is_none());
        assert!(PredictState::Errored("down".into()).result().is_none());

        let state = PredictState::Ready(prediction());
        assert_eq!(state.result().map(|r| r.predicted_yield), Some(4.2));
    }

    #[test]
    fn test_newer_ticket_invalidates_older() {
        let mut tracker = SubmissionTracker::default();

        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_unissued_ticket_is_never_current() {
        let tracker = SubmissionTracker::default();
        assert!(!tracker.is_current(1));
    }
}
