//! Episode engine for Hearth.
//!
//! Provides [`Episode`], the per-worker state machine that launches and
//! drives a household simulator, logs the agent's actions, hands each
//! outcome to a [`JudgmentPolicy`](hearth_judge::JudgmentPolicy), and can
//! replay the action log deterministically.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalogue;
pub mod config;
pub mod episode;
pub mod metrics;

pub use catalogue::{ActionCatalogue, NAVIGATION_ACTIONS};
pub use config::{ConfigError, EpisodeConfig, Platform, DEFAULT_BUILDS_DIR};
pub use episode::{Episode, EpisodePhase, FrameOf};
pub use metrics::EpisodeMetrics;
