//! Per-step outcomes handed back to the reinforcement-learning loop.

use crate::id::Action;

/// The judged outcome of one executed action.
///
/// `action_succeeded` is the simulator's own report for the issued action
/// (e.g. "the pickup reached an object"). It is independent of task
/// success, which is tracked by the goal ledger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verdict {
    /// Scalar reward for this step.
    pub reward: f64,
    /// Whether the judgment policy considers the episode finished.
    pub terminal: bool,
    /// Simulator-reported success of the action itself.
    pub action_succeeded: bool,
}

impl Verdict {
    /// Bit-exact equality, treating two NaN rewards with equal bits as equal.
    ///
    /// Replay verification uses this instead of `==` so that a reward of
    /// `-0.0` never silently matches `0.0`.
    pub fn bit_eq(&self, other: &Verdict) -> bool {
        self.reward.to_bits() == other.reward.to_bits()
            && self.terminal == other.terminal
            && self.action_succeeded == other.action_succeeded
    }
}

/// One entry of an episode trajectory: the action and how it was judged.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Zero-based position in the episode's action log.
    pub step: usize,
    /// The action issued.
    pub action: Action,
    /// The judged outcome.
    pub verdict: Verdict,
}
