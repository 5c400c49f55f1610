//! Judgment policies for Hearth episodes.
//!
//! A judgment policy runs once after every simulator step and turns the
//! simulator's raw outcome into a [`Verdict`](hearth_core::Verdict):
//! reward, terminal flag, and action-success passthrough. Policies are
//! stateless; the per-episode goal ledger and target tracker are lent to
//! them through a [`JudgeContext`].
//!
//! Two task formulations ship here:
//!
//! - [`DualSignalPolicy`]: two independent "declare done" actions, each
//!   verified against visibility of its target. Terminates once both
//!   have been declared.
//! - [`SequentialShapingPolicy`]: pick an object up, then use a tool on
//!   it, with optional potential-based distance shaping towards the
//!   current target. Terminates once both stages have succeeded.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod dual_signal;
pub mod goals;
pub mod policy;
pub mod reward;
pub mod sequential;

pub use context::{JudgeContext, RewardBreakdown};
pub use dual_signal::{Declaration, DualSignalPolicy};
pub use goals::{GoalLedger, Target, TargetTracker, SUB_GOALS};
pub use policy::JudgmentPolicy;
pub use reward::{RewardConfig, RewardError, STEP_PENALTY, SUCCESS_REWARD};
pub use sequential::{SequentialShapingPolicy, Stage};
