//! Trajectory hashing and replay verification for Hearth episodes.
//!
//! An episode keeps its action log in memory and can replay it against
//! a scene reset to the same state. This crate checks that the replay
//! reproduced the original run:
//!
//! - [`trajectory_hash`] folds a trajectory into a single FNV-1a hash
//! - [`compare_trajectories`] finds the first diverging step, bit-exact
//!
//! Nothing here touches disk; Hearth owns no file format.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod hash;

pub use compare::{compare_trajectories, DivergenceKind, DivergenceReport};
pub use hash::{transition_hash, trajectory_hash};
