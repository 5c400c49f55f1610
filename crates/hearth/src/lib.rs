//! Hearth: episode bookkeeping and reward judgment for embodied agents in
//! a household simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Hearth sub-crates. For most users, adding `hearth` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hearth::prelude::*;
//! use hearth::types::{AgentMetadata, LaunchSettings};
//!
//! // A simulator with one visible tomato that accepts every action.
//! struct StillLife { scene: SceneMetadata }
//!
//! impl Simulator for StillLife {
//!     type Frame = ();
//!     fn start(&mut self, _: &SceneId, _: u32) -> Result<(), SimulatorError> { Ok(()) }
//!     fn reset(&mut self, _: &SceneId, _: Option<u64>) -> Result<(), SimulatorError> { Ok(()) }
//!     fn step(&mut self, _: &Action) -> Result<(), SimulatorError> { Ok(()) }
//!     fn last_action_success(&self) -> bool { true }
//!     fn metadata(&self) -> &SceneMetadata { &self.scene }
//!     fn current_frame(&self) -> &() { &() }
//! }
//!
//! struct Launch;
//! impl SimulatorLauncher for Launch {
//!     type Simulator = StillLife;
//!     fn launch(&mut self, _: &LaunchSettings) -> Result<StillLife, SimulatorError> {
//!         let tomato = ObjectMetadata::new("Tomato", true, Position::new(1.0, 0.0, 0.0));
//!         Ok(StillLife {
//!             scene: SceneMetadata { objects: vec![tomato], agent: AgentMetadata::default() },
//!         })
//!     }
//! }
//!
//! let mut episode = Episode::new(
//!     EpisodeConfig::default(),
//!     ActionCatalogue::declare_task(),
//!     Launch,
//!     Box::new(DualSignalPolicy::default()),
//! ).unwrap();
//! episode.new_episode(SceneId::from("FloorPlan28"), true).unwrap();
//!
//! let declare = episode.catalogue().index_of(&Action::from("DoneTomato")).unwrap();
//! let verdict = episode.step(declare).unwrap();
//! assert!((verdict.reward - 0.99).abs() < 1e-12);
//! assert!(!verdict.terminal);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hearth-core` | IDs, scene metadata, verdicts, errors, the simulator traits |
//! | [`judge`] | `hearth-judge` | Judgment policy trait, goal ledger, the two reference policies |
//! | [`engine`] | `hearth-engine` | Episode state machine, configuration, action catalogue |
//! | [`replay`] | `hearth-replay` | Trajectory hashing and divergence reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`hearth-core`).
///
/// Contains scene metadata, [`types::Verdict`], and the
/// [`types::Simulator`] / [`types::SimulatorLauncher`] boundary.
pub use hearth_core as types;

/// Judgment policies (`hearth-judge`).
///
/// The [`judge::JudgmentPolicy`] trait is the main extension point for
/// new tasks; [`judge::DualSignalPolicy`] and
/// [`judge::SequentialShapingPolicy`] are the built-in tasks.
pub use hearth_judge as judge;

/// The episode engine (`hearth-engine`).
pub use hearth_engine as engine;

/// Replay verification (`hearth-replay`).
pub use hearth_replay as replay;

/// Common imports for typical Hearth usage.
///
/// ```rust
/// use hearth::prelude::*;
/// ```
pub mod prelude {
    // Core types and the simulator boundary
    pub use hearth_core::{
        Action, ObjectMetadata, ObjectType, Position, SceneId, SceneMetadata, Simulator,
        SimulatorLauncher, Transition, Verdict,
    };

    // Errors
    pub use hearth_core::{EpisodeError, JudgeError, SimulatorError};

    // Judgment
    pub use hearth_judge::{
        DualSignalPolicy, JudgeContext, JudgmentPolicy, RewardConfig, RewardError,
        SequentialShapingPolicy,
    };

    // Engine
    pub use hearth_engine::{
        ActionCatalogue, ConfigError, Episode, EpisodeConfig, EpisodePhase, Platform,
    };

    // Replay
    pub use hearth_replay::{compare_trajectories, DivergenceReport};
}
