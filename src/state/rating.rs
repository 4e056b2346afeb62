/// The per-submission rating state machine
///
/// Each successfully loaded image starts a new rating request tagged with a
/// monotonically increasing generation. A completing request is applied only
/// if its generation is still the pending one; anything else is stale and
/// discarded. That keeps overlapping submissions from racing each other for
/// the rating display: the rating shown always belongs to the image shown.

use crate::rater::Verdict;

/// Monotonically increasing tag distinguishing successive rating requests
pub type Generation = u64;

/// The lifecycle of the rating display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingState {
    /// No rating requested yet (or the last load failed)
    Idle,
    /// A rater is in flight for this generation
    Pending(Generation),
    /// The rater for this generation came back
    Done(Generation, Verdict),
}

impl RatingState {
    /// Enter the pending state for a fresh generation
    pub fn begin(&mut self, generation: Generation) {
        *self = RatingState::Pending(generation);
    }

    /// Try to apply a completed verdict.
    ///
    /// Returns true if the verdict was applied, false if it was stale
    /// (a newer submission superseded it, or nothing was pending).
    pub fn complete(&mut self, generation: Generation, verdict: Verdict) -> bool {
        match self {
            RatingState::Pending(pending) if *pending == generation => {
                *self = RatingState::Done(generation, verdict);
                true
            }
            _ => false,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_generation_completes() {
        let mut state = RatingState::Idle;
        state.begin(1);
        assert_eq!(state, RatingState::Pending(1));

        assert!(state.complete(1, Verdict::Safe));
        assert_eq!(state, RatingState::Done(1, Verdict::Safe));
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut state = RatingState::Idle;
        state.begin(1);
        // A second submission arrives before the first rater returns
        state.begin(2);

        // The first rater comes back late: discarded
        assert!(!state.complete(1, Verdict::Suspicious));
        assert_eq!(state, RatingState::Pending(2));

        // The current one applies
        assert!(state.complete(2, Verdict::Safe));
        assert_eq!(state, RatingState::Done(2, Verdict::Safe));
    }

    #[test]
    fn completion_without_a_pending_request_is_ignored() {
        let mut state = RatingState::Idle;
        assert!(!state.complete(1, Verdict::Safe));
        assert_eq!(state, RatingState::Idle);

        state.begin(3);
        assert!(state.complete(3, Verdict::Safe));
        // A duplicate completion for the same generation no longer applies
        assert!(!state.complete(3, Verdict::Suspicious));
        assert_eq!(state, RatingState::Done(3, Verdict::Safe));
    }
}
