//! Dual-signal judgment: two "declare done" actions, one per target.
//!
//! The agent ends the task by declaring each sub-goal once. A declaration
//! succeeds if its target type is visible at that moment. The episode is
//! over as soon as both declarations have been made, whether or not
//! either succeeded.

use hearth_core::{Action, JudgeError, ObjectType, Verdict};
use smallvec::smallvec;

use crate::context::JudgeContext;
use crate::goals::{Target, SUB_GOALS};
use crate::policy::JudgmentPolicy;

/// A declare action bound to the object type it asserts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// The action the agent issues to declare.
    pub action: Action,
    /// The object type that must be visible for the declaration to count.
    pub object_type: ObjectType,
}

impl Declaration {
    /// Bind `action` to `object_type`.
    pub fn new(action: impl Into<Action>, object_type: impl Into<ObjectType>) -> Self {
        Self {
            action: action.into(),
            object_type: object_type.into(),
        }
    }
}

/// Judgment policy with two independent visibility-checked declarations.
///
/// Per step:
/// - reward starts at the step penalty;
/// - the first declaration of sub-goal *i* marks it attempted and, if its
///   target is visible, awards the success bonus and marks it satisfied;
/// - later declarations of the same sub-goal change nothing but still
///   pay the step penalty;
/// - `terminal` is "both sub-goals attempted".
///
/// Distance shaping does not apply to this task.
#[derive(Clone, Debug)]
pub struct DualSignalPolicy {
    declarations: [Declaration; SUB_GOALS],
}

impl DualSignalPolicy {
    /// Create a policy from the two declarations, in sub-goal order.
    pub fn new(first: Declaration, second: Declaration) -> Self {
        Self {
            declarations: [first, second],
        }
    }

    /// The declarations, in sub-goal order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn sub_goal_for(&self, action: &Action) -> Option<usize> {
        self.declarations.iter().position(|d| &d.action == action)
    }
}

impl Default for DualSignalPolicy {
    /// `DoneTomato` declares the tomato, `DoneBowl` declares the bowl.
    fn default() -> Self {
        Self::new(
            Declaration::new("DoneTomato", "Tomato"),
            Declaration::new("DoneBowl", "Bowl"),
        )
    }
}

impl JudgmentPolicy for DualSignalPolicy {
    fn name(&self) -> &str {
        "dual_signal"
    }

    fn initial_target(&self) -> Target {
        smallvec![
            self.declarations[0].object_type.clone(),
            self.declarations[1].object_type.clone(),
        ]
    }

    fn judge(&self, ctx: &mut JudgeContext<'_>) -> Result<Verdict, JudgeError> {
        if let Some(index) = self.sub_goal_for(ctx.action()) {
            if ctx.ledger_mut().mark_attempted(index) {
                let target = ctx.target().get(index).cloned().ok_or_else(|| {
                    JudgeError::InvalidMetadata {
                        reason: format!("no target installed for sub-goal {index}"),
                    }
                })?;
                let visible = ctx.metadata().visible_types().contains(&&target);
                tracing::debug!(
                    sub_goal = index,
                    target = %target,
                    visible,
                    "declaration judged"
                );
                if visible {
                    ctx.award_success();
                    ctx.ledger_mut().mark_satisfied(index);
                }
            }
        }

        let terminal = ctx.ledger().all_attempted();
        Ok(ctx.verdict(terminal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::{GoalLedger, TargetTracker};
    use crate::reward::RewardConfig;
    use hearth_core::SceneMetadata;
    use hearth_test_utils::SceneBuilder;

    struct Harness {
        policy: DualSignalPolicy,
        ledger: GoalLedger,
        target: TargetTracker,
        rewards: RewardConfig,
    }

    impl Harness {
        fn new() -> Self {
            let policy = DualSignalPolicy::default();
            let target = TargetTracker::new(policy.initial_target());
            Self {
                policy,
                ledger: GoalLedger::new(),
                target,
                rewards: RewardConfig::default(),
            }
        }

        fn judge(&mut self, action: &str, success: bool, scene: &SceneMetadata) -> Verdict {
            let action = Action::from(action);
            let mut ctx = JudgeContext::new(
                &action,
                success,
                scene,
                &mut self.ledger,
                &mut self.target,
                &self.rewards,
            );
            self.policy.judge(&mut ctx).unwrap()
        }
    }

    fn tomato_visible() -> SceneMetadata {
        SceneBuilder::new()
            .object("Tomato", true, 1.0, 0.0, 0.0)
            .object("Bowl", false, 3.0, 0.0, 0.0)
            .build()
    }

    #[test]
    fn declare_visible_then_hidden_target() {
        let mut h = Harness::new();
        let scene = tomato_visible();

        let v = h.judge("DoneTomato", true, &scene);
        assert!((v.reward - 0.99).abs() < 1e-12);
        assert!(!v.terminal);
        assert!(h.ledger.is_satisfied(0));

        let v = h.judge("DoneBowl", true, &scene);
        assert!((v.reward - (-0.01)).abs() < 1e-12);
        assert!(v.terminal);
        assert!(!h.ledger.overall_success());
    }

    #[test]
    fn both_declared_and_visible_is_overall_success() {
        let mut h = Harness::new();
        let scene = SceneBuilder::new()
            .object("Tomato", true, 1.0, 0.0, 0.0)
            .object("Bowl", true, 3.0, 0.0, 0.0)
            .build();
        h.judge("DoneBowl", true, &scene);
        let v = h.judge("DoneTomato", true, &scene);
        assert!(v.terminal);
        assert!(h.ledger.overall_success());
    }

    #[test]
    fn redeclaring_does_not_reaward() {
        let mut h = Harness::new();
        let scene = tomato_visible();
        h.judge("DoneTomato", true, &scene);
        let v = h.judge("DoneTomato", true, &scene);
        assert_eq!(v.reward, -0.01);
        assert!(!v.terminal);
        assert_eq!(h.ledger.satisfied_count(), 1);
    }

    #[test]
    fn redeclaring_after_a_miss_cannot_recover() {
        let mut h = Harness::new();
        let hidden = SceneBuilder::new().object("Tomato", false, 1.0, 0.0, 0.0).build();
        h.judge("DoneTomato", true, &hidden);
        let v = h.judge("DoneTomato", true, &tomato_visible());
        assert_eq!(v.reward, -0.01);
        assert!(!h.ledger.is_satisfied(0));
    }

    #[test]
    fn non_declare_actions_only_pay_the_step_penalty() {
        let mut h = Harness::new();
        let v = h.judge("RotateLeft", false, &tomato_visible());
        assert_eq!(v.reward, -0.01);
        assert!(!v.action_succeeded);
        assert_eq!(h.ledger.attempted_count(), 0);
    }

    #[test]
    fn simulator_success_flag_is_passed_through() {
        let mut h = Harness::new();
        let v = h.judge("DoneTomato", false, &tomato_visible());
        assert!(!v.action_succeeded);
        // Task success is judged on visibility, not on the action flag.
        assert!(h.ledger.is_satisfied(0));
    }
}
