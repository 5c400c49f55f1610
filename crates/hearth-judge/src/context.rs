//! Execution context passed to judgment policies after each simulator step.
//!
//! [`JudgeContext`] lends a policy the issued action, the simulator's
//! post-step report, and mutable access to the episode's goal ledger and
//! target tracker. Reward is accumulated through the context so that each
//! reward component can be applied at most once per step.

use hearth_core::{Action, SceneMetadata, Verdict};

use crate::goals::{GoalLedger, TargetTracker};
use crate::reward::RewardConfig;

/// Reward for one step, split by component.
///
/// Each component is assigned, never accumulated, so a step can carry at
/// most one success bonus and at most one shaping bonus.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RewardBreakdown {
    /// Base penalty, present on every step.
    pub step_penalty: f64,
    /// Sub-goal success bonus, or 0.
    pub success_bonus: f64,
    /// Distance-shaping bonus, or 0.
    pub shaping_bonus: f64,
    /// Penalty for an action the simulator rejected, or 0.
    pub failure_penalty: f64,
}

impl RewardBreakdown {
    /// Sum of all components, in a fixed order.
    pub fn total(&self) -> f64 {
        self.step_penalty + self.success_bonus + self.shaping_bonus + self.failure_penalty
    }
}

/// Context passed to [`JudgmentPolicy::judge()`](crate::JudgmentPolicy::judge).
pub struct JudgeContext<'a> {
    action: &'a Action,
    action_succeeded: bool,
    metadata: &'a SceneMetadata,
    ledger: &'a mut GoalLedger,
    target: &'a mut TargetTracker,
    rewards: &'a RewardConfig,
    breakdown: RewardBreakdown,
}

impl<'a> JudgeContext<'a> {
    /// Construct a judge context with the step penalty already applied.
    ///
    /// Typically called by the episode, not by policies directly.
    pub fn new(
        action: &'a Action,
        action_succeeded: bool,
        metadata: &'a SceneMetadata,
        ledger: &'a mut GoalLedger,
        target: &'a mut TargetTracker,
        rewards: &'a RewardConfig,
    ) -> Self {
        Self {
            action,
            action_succeeded,
            metadata,
            ledger,
            target,
            rewards,
            breakdown: RewardBreakdown {
                step_penalty: rewards.step_penalty,
                ..RewardBreakdown::default()
            },
        }
    }

    /// The action that was just executed.
    pub fn action(&self) -> &'a Action {
        self.action
    }

    /// Simulator-reported success of the executed action.
    pub fn action_succeeded(&self) -> bool {
        self.action_succeeded
    }

    /// Scene snapshot after the action.
    pub fn metadata(&self) -> &'a SceneMetadata {
        self.metadata
    }

    /// Reward configuration.
    pub fn rewards(&self) -> &'a RewardConfig {
        self.rewards
    }

    /// Sub-goal flags.
    pub fn ledger(&self) -> &GoalLedger {
        self.ledger
    }

    /// Mutable sub-goal flags.
    pub fn ledger_mut(&mut self) -> &mut GoalLedger {
        self.ledger
    }

    /// Current target.
    pub fn target(&self) -> &TargetTracker {
        self.target
    }

    /// Mutable current target.
    pub fn target_mut(&mut self) -> &mut TargetTracker {
        self.target
    }

    /// Apply the sub-goal success bonus for this step.
    pub fn award_success(&mut self) {
        self.breakdown.success_bonus = self.rewards.success_reward;
    }

    /// Apply the distance-shaping bonus for this step.
    pub fn award_shaping(&mut self) {
        self.breakdown.shaping_bonus = self.rewards.shaping_bonus();
    }

    /// Apply the failed-action penalty for this step.
    pub fn apply_failure_penalty(&mut self) {
        self.breakdown.failure_penalty = self.rewards.failure_penalty();
    }

    /// Reward components applied so far.
    pub fn breakdown(&self) -> RewardBreakdown {
        self.breakdown
    }

    /// Build the step's verdict from the accumulated reward.
    pub fn verdict(&self, terminal: bool) -> Verdict {
        Verdict {
            reward: self.breakdown.total(),
            terminal,
            action_succeeded: self.action_succeeded,
        }
    }
}
