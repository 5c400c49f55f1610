//! Trajectory comparison for replay verification.
//!
//! Hash-first comparison (fast path) with a step-by-step bit-exact scan
//! on mismatch to name the first divergence.

use hearth_core::Transition;

use crate::hash::trajectory_hash;

/// What differed at the first diverging step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// A different action was issued.
    Action,
    /// The reward differed (bit-exact).
    Reward,
    /// The terminal flag differed.
    Terminal,
    /// The simulator's action-success flag differed.
    ActionSuccess,
    /// One trajectory ended before the other.
    Length,
}

/// The first point at which two trajectories disagree.
#[derive(Clone, Debug, PartialEq)]
pub struct DivergenceReport {
    /// Index into the trajectories.
    pub step: usize,
    /// What differed.
    pub kind: DivergenceKind,
    /// The transition from the original run, if it reached this step.
    pub recorded: Option<Transition>,
    /// The transition from the replay, if it reached this step.
    pub replayed: Option<Transition>,
}

fn first_difference(recorded: &Transition, replayed: &Transition) -> Option<DivergenceKind> {
    if recorded.action != replayed.action {
        Some(DivergenceKind::Action)
    } else if recorded.verdict.reward.to_bits() != replayed.verdict.reward.to_bits() {
        Some(DivergenceKind::Reward)
    } else if recorded.verdict.terminal != replayed.verdict.terminal {
        Some(DivergenceKind::Terminal)
    } else if recorded.verdict.action_succeeded != replayed.verdict.action_succeeded {
        Some(DivergenceKind::ActionSuccess)
    } else {
        None
    }
}

/// Compare a replayed trajectory against the recorded one.
///
/// Returns `None` if they are bit-identical, or a report for the first
/// diverging step. Step indices inside the transitions are not compared;
/// position in the slice is authoritative.
pub fn compare_trajectories(
    recorded: &[Transition],
    replayed: &[Transition],
) -> Option<DivergenceReport> {
    if recorded.len() == replayed.len() && trajectory_hash(recorded) == trajectory_hash(replayed)
    {
        return None;
    }

    for (step, (rec, rep)) in recorded.iter().zip(replayed).enumerate() {
        if let Some(kind) = first_difference(rec, rep) {
            return Some(DivergenceReport {
                step,
                kind,
                recorded: Some(rec.clone()),
                replayed: Some(rep.clone()),
            });
        }
    }

    if recorded.len() != replayed.len() {
        let step = recorded.len().min(replayed.len());
        return Some(DivergenceReport {
            step,
            kind: DivergenceKind::Length,
            recorded: recorded.get(step).cloned(),
            replayed: replayed.get(step).cloned(),
        });
    }

    // Hashes differed only through the stored step indices.
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{Action, Verdict};

    fn t(step: usize, action: &str, reward: f64, terminal: bool, ok: bool) -> Transition {
        Transition {
            step,
            action: Action::from(action),
            verdict: Verdict {
                reward,
                terminal,
                action_succeeded: ok,
            },
        }
    }

    fn run() -> Vec<Transition> {
        vec![
            t(0, "MoveAhead", -0.01, false, true),
            t(1, "DoneTomato", 0.99, false, true),
            t(2, "DoneBowl", -0.01, true, true),
        ]
    }

    #[test]
    fn matching_trajectories_return_none() {
        assert!(compare_trajectories(&run(), &run()).is_none());
    }

    #[test]
    fn reward_divergence_is_located() {
        let mut replayed = run();
        replayed[1].verdict.reward = -0.01;
        let report = compare_trajectories(&run(), &replayed).unwrap();
        assert_eq!(report.step, 1);
        assert_eq!(report.kind, DivergenceKind::Reward);
        assert_eq!(report.recorded.unwrap().verdict.reward, 0.99);
    }

    #[test]
    fn terminal_and_success_flags_are_checked() {
        let mut replayed = run();
        replayed[2].verdict.terminal = false;
        assert_eq!(
            compare_trajectories(&run(), &replayed).unwrap().kind,
            DivergenceKind::Terminal
        );

        let mut replayed = run();
        replayed[0].verdict.action_succeeded = false;
        assert_eq!(
            compare_trajectories(&run(), &replayed).unwrap().kind,
            DivergenceKind::ActionSuccess
        );
    }

    #[test]
    fn truncated_replay_reports_length() {
        let replayed = run()[..2].to_vec();
        let report = compare_trajectories(&run(), &replayed).unwrap();
        assert_eq!(report.step, 2);
        assert_eq!(report.kind, DivergenceKind::Length);
        assert!(report.recorded.is_some());
        assert!(report.replayed.is_none());
    }

    #[test]
    fn action_divergence_takes_priority() {
        let mut replayed = run();
        replayed[0] = t(0, "RotateLeft", 5.0, true, false);
        assert_eq!(
            compare_trajectories(&run(), &replayed).unwrap().kind,
            DivergenceKind::Action
        );
    }
}
