//! The [`JudgmentPolicy`] trait.

use hearth_core::{JudgeError, Verdict};

use crate::context::JudgeContext;
use crate::goals::Target;

/// Maps an executed action and the simulator's resulting state to a
/// [`Verdict`].
///
/// # Contract
///
/// - `judge()` MUST be deterministic: the same action, simulator report,
///   ledger, and target produce the same verdict and the same state
///   updates. Replay verification depends on this.
/// - `&self`: policies are stateless. Per-episode state lives in the
///   ledger and target tracker reached through [`JudgeContext`].
/// - The step penalty is already applied when `judge()` is entered.
///
/// # Object safety
///
/// This trait is object-safe; episodes store the policy as
/// `Box<dyn JudgmentPolicy>`.
///
/// # Examples
///
/// A policy that never terminates and only charges the step penalty:
///
/// ```
/// use hearth_core::{JudgeError, ObjectType, Verdict};
/// use hearth_judge::{JudgeContext, JudgmentPolicy, Target};
/// use smallvec::smallvec;
///
/// struct Wander;
///
/// impl JudgmentPolicy for Wander {
///     fn name(&self) -> &str { "wander" }
///
///     fn initial_target(&self) -> Target {
///         smallvec![ObjectType::from("Tomato")]
///     }
///
///     fn judge(&self, ctx: &mut JudgeContext<'_>) -> Result<Verdict, JudgeError> {
///         Ok(ctx.verdict(false))
///     }
/// }
/// ```
pub trait JudgmentPolicy: Send {
    /// Human-readable policy name, used in errors and logs.
    fn name(&self) -> &str;

    /// The target installed by every `new_episode()`.
    fn initial_target(&self) -> Target;

    /// Judge the step that just ran.
    ///
    /// # Errors
    ///
    /// Returns [`JudgeError`] when simulator metadata violates the
    /// policy's assumptions. The episode treats this as fatal.
    fn judge(&self, ctx: &mut JudgeContext<'_>) -> Result<Verdict, JudgeError>;
}
