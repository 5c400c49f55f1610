//! Error types for Hearth episodes.
//!
//! Organised by subsystem: the simulator connection, the judgment
//! policy, and the episode state machine that wraps both. Every variant
//! here is fatal to the episode. Actions the simulator refuses are not
//! errors; they surface as `Verdict::action_succeeded == false`.

use std::error::Error;
use std::fmt;

use crate::id::ObjectType;

/// Failures of the simulator connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulatorError {
    /// The simulator process could not be started.
    LaunchFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The connection dropped or the process exited mid-episode.
    ConnectionLost {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The simulator answered with metadata that could not be interpreted.
    MalformedMetadata {
        /// Description of the missing or invalid field.
        reason: String,
    },
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LaunchFailed { reason } => write!(f, "simulator launch failed: {reason}"),
            Self::ConnectionLost { reason } => write!(f, "simulator connection lost: {reason}"),
            Self::MalformedMetadata { reason } => write!(f, "malformed metadata: {reason}"),
        }
    }
}

impl Error for SimulatorError {}

/// Failures inside a judgment policy.
///
/// Returned by `JudgmentPolicy::judge()` and wrapped in
/// [`EpisodeError::Judge`] by the episode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JudgeError {
    /// Distance shaping needs exactly one object of the target type.
    TargetNotUnique {
        /// The target type looked up.
        object_type: ObjectType,
        /// How many objects of that type the scene reported.
        matches: usize,
    },
    /// The snapshot is missing state the policy depends on.
    InvalidMetadata {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for JudgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetNotUnique {
                object_type,
                matches,
            } => write!(
                f,
                "expected exactly one '{object_type}' in scene, found {matches}"
            ),
            Self::InvalidMetadata { reason } => write!(f, "invalid metadata: {reason}"),
        }
    }
}

impl Error for JudgeError {}

/// Errors from the episode state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EpisodeError {
    /// An operation needed a running simulator and scene, but
    /// `new_episode()` has not been called yet.
    NotStarted,
    /// The simulator connection failed.
    Simulator(SimulatorError),
    /// The judgment policy failed.
    Judge {
        /// Name of the failing policy.
        policy: String,
        /// The underlying policy error.
        reason: JudgeError,
    },
    /// `step()` was called with an index outside the action catalogue.
    ActionOutOfRange {
        /// The requested index.
        index: usize,
        /// Catalogue length.
        len: usize,
    },
    /// The episode already reported `terminal`; start a new one first.
    EpisodeTerminated,
    /// An earlier simulator or judgment failure aborted the episode;
    /// start a new one first.
    EpisodeAborted,
}

impl fmt::Display for EpisodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "episode not started"),
            Self::Simulator(e) => write!(f, "simulator: {e}"),
            Self::Judge { policy, reason } => {
                write!(f, "judgment policy '{policy}' failed: {reason}")
            }
            Self::ActionOutOfRange { index, len } => {
                write!(f, "action index {index} out of range for catalogue of {len}")
            }
            Self::EpisodeTerminated => write!(f, "episode already terminated"),
            Self::EpisodeAborted => write!(f, "episode aborted by an earlier failure"),
        }
    }
}

impl Error for EpisodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Simulator(e) => Some(e),
            Self::Judge { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<SimulatorError> for EpisodeError {
    fn from(e: SimulatorError) -> Self {
        Self::Simulator(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_error_chains_to_source() {
        let err = EpisodeError::Judge {
            policy: "sequential_shaping".into(),
            reason: JudgeError::TargetNotUnique {
                object_type: ObjectType::from("Microwave"),
                matches: 2,
            },
        };
        let source = err.source().unwrap();
        assert_eq!(
            source.to_string(),
            "expected exactly one 'Microwave' in scene, found 2"
        );
        assert!(err.to_string().contains("sequential_shaping"));
    }

    #[test]
    fn simulator_error_converts() {
        let err: EpisodeError = SimulatorError::ConnectionLost {
            reason: "pipe closed".into(),
        }
        .into();
        assert_eq!(err.to_string(), "simulator: simulator connection lost: pipe closed");
    }
}
