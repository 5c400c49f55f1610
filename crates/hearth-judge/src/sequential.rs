//! Sequential-shaping judgment: pick an object up, then use a tool on it.
//!
//! Stage 0 is triggered by the pickup action and stage 1 by the tool
//! action. Once stage 0 succeeds the target switches from the picked
//! object to the tool object ("now go find the microwave"). With shaping
//! enabled the agent earns a bonus each time it gets strictly closer to
//! the visible target than it has been since the last target switch.
//! The episode ends only when both stages have actually succeeded.

use hearth_core::{Action, JudgeError, ObjectType, Verdict};
use smallvec::smallvec;

use crate::context::JudgeContext;
use crate::goals::{Target, SUB_GOALS};
use crate::policy::JudgmentPolicy;

/// One stage of a sequential task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    /// The action that attempts this stage.
    pub trigger: Action,
    /// The object this stage is about; the target while the stage is open.
    pub object_type: ObjectType,
}

impl Stage {
    /// Bind `trigger` to `object_type`.
    pub fn new(trigger: impl Into<Action>, object_type: impl Into<ObjectType>) -> Self {
        Self {
            trigger: trigger.into(),
            object_type: object_type.into(),
        }
    }
}

/// Two-stage judgment policy with potential-based distance shaping.
///
/// Per step, in order:
/// 1. reward starts at the step penalty;
/// 2. a stage trigger marks that stage attempted; if the simulator
///    reports success the stage is satisfied and the success bonus paid;
/// 3. once stage 0 is satisfied the target becomes the stage 1 object
///    and the running minimum distance resets to infinity;
/// 4. with shaping on and the target visible, a distance strictly below
///    the running minimum pays `-step_penalty` and becomes the new minimum;
/// 5. a refused action costs an extra `2 * step_penalty`;
/// 6. `terminal` is "both stages satisfied".
#[derive(Clone, Debug)]
pub struct SequentialShapingPolicy {
    stages: [Stage; SUB_GOALS],
}

impl SequentialShapingPolicy {
    /// Create a policy from the two stages, in order.
    pub fn new(pick: Stage, apply: Stage) -> Self {
        Self {
            stages: [pick, apply],
        }
    }

    /// The stages, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    fn stage_for(&self, action: &Action) -> Option<usize> {
        self.stages.iter().position(|s| &s.trigger == action)
    }
}

impl Default for SequentialShapingPolicy {
    /// Pick up the tomato, then cook it in the microwave.
    fn default() -> Self {
        Self::new(
            Stage::new("PickupObject", "Tomato"),
            Stage::new("Cook", "Microwave"),
        )
    }
}

impl JudgmentPolicy for SequentialShapingPolicy {
    fn name(&self) -> &str {
        "sequential_shaping"
    }

    fn initial_target(&self) -> Target {
        smallvec![self.stages[0].object_type.clone()]
    }

    fn judge(&self, ctx: &mut JudgeContext<'_>) -> Result<Verdict, JudgeError> {
        if let Some(index) = self.stage_for(ctx.action()) {
            ctx.ledger_mut().mark_attempted(index);
            if ctx.action_succeeded() {
                ctx.ledger_mut().mark_satisfied(index);
                ctx.award_success();
            }
        }

        let tool = &self.stages[1].object_type;
        if ctx.ledger().is_satisfied(0) && ctx.target().primary() != Some(tool) {
            tracing::debug!(target_object = %tool, "stage 0 satisfied, switching target");
            ctx.target_mut().retarget(tool.clone());
        }

        if ctx.rewards().shaping {
            let metadata = ctx.metadata();
            let current = ctx.target().primary().cloned().ok_or_else(|| {
                JudgeError::InvalidMetadata {
                    reason: "no target installed".to_string(),
                }
            })?;
            if metadata.is_visible(&current) {
                let distance = metadata.agent_distance_to(&current)?;
                if ctx.target_mut().record_distance(distance) {
                    tracing::debug!(target_object = %current, distance, "closer to target");
                    ctx.award_shaping();
                }
            }
        }

        if !ctx.action_succeeded() {
            ctx.apply_failure_penalty();
        }

        let terminal = ctx.ledger().overall_success();
        Ok(ctx.verdict(terminal))
    }
}
