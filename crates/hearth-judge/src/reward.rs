//! Reward constants and the reward configuration shared by all policies.

use std::error::Error;
use std::fmt;

/// Default per-step penalty, applied on every step.
pub const STEP_PENALTY: f64 = -0.01;

/// Default bonus for satisfying a sub-goal.
pub const SUCCESS_REWARD: f64 = 1.0;

/// A [`RewardConfig`] field outside its allowed range.
#[derive(Clone, Debug, PartialEq)]
pub enum RewardError {
    /// `step_penalty` is NaN, infinite, or positive.
    InvalidStepPenalty {
        /// The invalid value.
        value: f64,
    },
    /// `success_reward` is NaN, infinite, or negative.
    InvalidSuccessReward {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for RewardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepPenalty { value } => {
                write!(f, "step_penalty must be finite and <= 0, got {value}")
            }
            Self::InvalidSuccessReward { value } => {
                write!(f, "success_reward must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for RewardError {}

/// Reward magnitudes and shaping toggle.
///
/// Derived quantities are fixed multiples of the step penalty:
/// the distance-shaping bonus is `-step_penalty` (it cancels one step's
/// penalty) and the failed-action penalty is `2 * step_penalty`.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardConfig {
    /// Reward added every step. Must be finite and `<= 0`. Default: -0.01.
    pub step_penalty: f64,
    /// Reward added when a sub-goal is satisfied. Must be finite and `>= 0`.
    /// Default: 1.0.
    pub success_reward: f64,
    /// Enables distance shaping in policies that support it. Default: false.
    pub shaping: bool,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            step_penalty: STEP_PENALTY,
            success_reward: SUCCESS_REWARD,
            shaping: false,
        }
    }
}

impl RewardConfig {
    /// Bonus for moving strictly closer to a visible target.
    pub fn shaping_bonus(&self) -> f64 {
        -self.step_penalty
    }

    /// Extra penalty when the simulator rejects the issued action.
    pub fn failure_penalty(&self) -> f64 {
        self.step_penalty * 2.0
    }

    /// Check the sign and finiteness constraints.
    ///
    /// # Errors
    ///
    /// Returns [`RewardError`] for the first violated constraint.
    pub fn validate(&self) -> Result<(), RewardError> {
        if !self.step_penalty.is_finite() || self.step_penalty > 0.0 {
            return Err(RewardError::InvalidStepPenalty {
                value: self.step_penalty,
            });
        }
        if !self.success_reward.is_finite() || self.success_reward < 0.0 {
            return Err(RewardError::InvalidSuccessReward {
                value: self.success_reward,
            });
        }
        Ok(())
    }
}
