//! Episode configuration, validation, and error types.
//!
//! [`EpisodeConfig`] carries everything an episode needs from the outer
//! training harness: simulator launch parameters, the per-worker seed
//! inputs, and reward magnitudes. [`validate()`](EpisodeConfig::validate)
//! checks structural invariants before an episode is constructed.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use hearth_core::{Action, LaunchSettings};
use hearth_judge::{RewardConfig, RewardError};

/// Default directory holding simulator builds.
pub const DEFAULT_BUILDS_DIR: &str = "./datasets/builds";

// ── Platform ───────────────────────────────────────────────────────

/// Host platform, selecting which simulator build to launch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    /// Linux x86-64 build.
    #[default]
    Linux64,
    /// macOS Intel app bundle.
    OsxIntel64,
}

impl Platform {
    /// Path of the simulator executable under `builds_dir`.
    pub fn executable_path(self, builds_dir: &Path) -> PathBuf {
        match self {
            Platform::Linux64 => builds_dir.join("thor-local-Linux64"),
            Platform::OsxIntel64 => builds_dir
                .join("thor-local-OSXIntel64.app")
                .join("Contents")
                .join("MacOS")
                .join("thor-local-OSXIntel64"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating an [`EpisodeConfig`] or building an
/// [`ActionCatalogue`](crate::ActionCatalogue).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `grid_size` is NaN, infinite, zero, or negative.
    InvalidGridSize {
        /// The invalid value.
        value: f64,
    },
    /// `fov` is not a finite angle in `(0, 180)` degrees.
    InvalidFov {
        /// The invalid value.
        value: f64,
    },
    /// The reward configuration violated a constraint.
    InvalidReward {
        /// The violated constraint.
        reason: RewardError,
    },
    /// The action catalogue has no actions.
    EmptyCatalogue,
    /// The action catalogue lists the same action twice.
    DuplicateAction {
        /// The repeated action.
        action: Action,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize { value } => {
                write!(f, "grid_size must be finite and positive, got {value}")
            }
            Self::InvalidFov { value } => {
                write!(f, "fov must be finite and in (0, 180) degrees, got {value}")
            }
            Self::InvalidReward { reason } => write!(f, "invalid reward config: {reason}"),
            Self::EmptyCatalogue => write!(f, "action catalogue is empty"),
            Self::DuplicateAction { action } => {
                write!(f, "action '{action}' appears twice in the catalogue")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidReward { reason } => Some(reason),
            _ => None,
        }
    }
}

// ── EpisodeConfig ──────────────────────────────────────────────────

/// Complete configuration for constructing an [`Episode`](crate::Episode).
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeConfig {
    /// Navigation grid resolution in metres. Default: 0.25.
    pub grid_size: f64,
    /// Horizontal field of view in degrees. Default: 90.
    pub fov: f64,
    /// Randomise object placement on seeded resets. Default: false.
    pub randomize_objects: bool,
    /// Seed shared by all workers of a run. Default: 1.
    pub base_seed: u64,
    /// This worker's rank; added to `base_seed`. Default: 0.
    pub worker_rank: u64,
    /// Rendering device passed to the simulator on start. Default: 0.
    pub device_id: u32,
    /// Which simulator build to launch.
    pub platform: Platform,
    /// Directory holding simulator builds. Default: [`DEFAULT_BUILDS_DIR`].
    pub builds_dir: PathBuf,
    /// Reward magnitudes and shaping toggle.
    pub rewards: RewardConfig,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            grid_size: 0.25,
            fov: 90.0,
            randomize_objects: false,
            base_seed: 1,
            worker_rank: 0,
            device_id: 0,
            platform: Platform::default(),
            builds_dir: PathBuf::from(DEFAULT_BUILDS_DIR),
            rewards: RewardConfig::default(),
        }
    }
}

impl EpisodeConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(ConfigError::InvalidGridSize {
                value: self.grid_size,
            });
        }
        if !self.fov.is_finite() || self.fov <= 0.0 || self.fov >= 180.0 {
            return Err(ConfigError::InvalidFov { value: self.fov });
        }
        self.rewards
            .validate()
            .map_err(|reason| ConfigError::InvalidReward { reason })?;
        Ok(())
    }

    /// This worker's episode seed: `base_seed + worker_rank`, wrapping.
    pub fn worker_seed(&self) -> u64 {
        self.base_seed.wrapping_add(self.worker_rank)
    }

    /// Launch parameters for a simulator seeded with `seed`.
    pub fn launch_settings(&self, seed: u64) -> LaunchSettings {
        LaunchSettings {
            grid_size: self.grid_size,
            fov: self.fov,
            executable_path: self.platform.executable_path(&self.builds_dir),
            randomize_objects: self.randomize_objects,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EpisodeConfig::default().validate().is_ok());
    }

    #[test]
    fn worker_seed_adds_rank() {
        let cfg = EpisodeConfig {
            base_seed: 100,
            worker_rank: 7,
            ..EpisodeConfig::default()
        };
        assert_eq!(cfg.worker_seed(), 107);

        let wrap = EpisodeConfig {
            base_seed: u64::MAX,
            worker_rank: 2,
            ..EpisodeConfig::default()
        };
        assert_eq!(wrap.worker_seed(), 1);
    }

    #[test]
    fn zero_grid_size_rejected() {
        let cfg = EpisodeConfig {
            grid_size: 0.0,
            ..EpisodeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidGridSize { value: 0.0 })
        );
    }

    #[test]
    fn fov_out_of_range_rejected() {
        for fov in [0.0, 180.0, f64::NAN, -30.0] {
            let cfg = EpisodeConfig {
                fov,
                ..EpisodeConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidFov { .. })),
                "fov {fov} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_reward_surfaces_reason() {
        let cfg = EpisodeConfig {
            rewards: RewardConfig {
                step_penalty: 0.1,
                ..RewardConfig::default()
            },
            ..EpisodeConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidReward {
                reason: RewardError::InvalidStepPenalty { value: 0.1 },
            }
        );
        assert!(err.to_string().contains("step_penalty"));
        assert!(err.source().is_some());
    }

    #[test]
    fn executable_path_per_platform() {
        let dir = Path::new("./datasets/builds");
        assert_eq!(
            Platform::Linux64.executable_path(dir),
            PathBuf::from("./datasets/builds/thor-local-Linux64")
        );
        assert_eq!(
            Platform::OsxIntel64.executable_path(dir),
            PathBuf::from(
                "./datasets/builds/thor-local-OSXIntel64.app/Contents/MacOS/thor-local-OSXIntel64"
            )
        );
    }

    #[test]
    fn launch_settings_carry_config() {
        let cfg = EpisodeConfig {
            grid_size: 0.5,
            fov: 60.0,
            randomize_objects: true,
            ..EpisodeConfig::default()
        };
        let s = cfg.launch_settings(42);
        assert_eq!(s.grid_size, 0.5);
        assert_eq!(s.fov, 60.0);
        assert!(s.randomize_objects);
        assert_eq!(s.seed, 42);
    }
}
