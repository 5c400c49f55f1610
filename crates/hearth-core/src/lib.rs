//! Core types and traits for Hearth household-simulator episodes.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other Hearth crate: object and action
//! identifiers, scene metadata snapshots, per-step verdicts, the
//! simulator boundary traits, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;
pub mod metadata;
pub mod simulator;
pub mod verdict;

pub use error::{EpisodeError, JudgeError, SimulatorError};
pub use geometry::Position;
pub use id::{Action, ObjectType, SceneId};
pub use metadata::{AgentMetadata, ObjectMetadata, SceneMetadata, VisibleTypes};
pub use simulator::{LaunchSettings, Simulator, SimulatorLauncher};
pub use verdict::{Transition, Verdict};
