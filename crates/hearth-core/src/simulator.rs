//! The boundary between an episode and the external household simulator.
//!
//! The simulator process itself (scene loading, physics, rendering) lives
//! outside Hearth. An episode drives it through [`Simulator`] and creates
//! it lazily through a [`SimulatorLauncher`], so tests can substitute a
//! scripted mock for the real process connection.

use std::path::PathBuf;

use crate::error::SimulatorError;
use crate::id::{Action, SceneId};
use crate::metadata::SceneMetadata;

/// Parameters for starting a new simulator process.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchSettings {
    /// Navigation grid resolution in metres.
    pub grid_size: f64,
    /// Horizontal field of view in degrees.
    pub fov: f64,
    /// Path to the simulator build for the current platform.
    pub executable_path: PathBuf,
    /// Whether object placement is randomised on each reset.
    pub randomize_objects: bool,
    /// Initial simulator seed.
    pub seed: u64,
}

/// A live connection to one simulator process.
///
/// Every method blocks until the simulator answers. Connection-level
/// failures are returned as [`SimulatorError`] and are fatal to the
/// episode; an action the simulator merely refuses (out of reach,
/// nothing to pick up) is *not* an error and is reported through
/// [`last_action_success`](Simulator::last_action_success).
pub trait Simulator {
    /// The visual observation type, opaque to Hearth.
    type Frame;

    /// Load `scene` on the given device and prepare the first frame.
    fn start(&mut self, scene: &SceneId, device_id: u32) -> Result<(), SimulatorError>;

    /// Reload `scene` on the existing connection.
    ///
    /// `reseed` is `Some(seed)` to reseed the simulator's object
    /// randomisation, `None` to restore the scene exactly as the last
    /// seeded reset left it.
    fn reset(&mut self, scene: &SceneId, reseed: Option<u64>) -> Result<(), SimulatorError>;

    /// Execute one action.
    fn step(&mut self, action: &Action) -> Result<(), SimulatorError>;

    /// Whether the most recent action succeeded at the simulator level.
    fn last_action_success(&self) -> bool;

    /// Scene snapshot after the most recent action or reset.
    fn metadata(&self) -> &SceneMetadata;

    /// Current visual observation.
    fn current_frame(&self) -> &Self::Frame;
}

/// Factory for simulator connections.
///
/// Called at most once per episode owner: the first
/// `new_episode` launches, later episodes reuse the connection.
pub trait SimulatorLauncher {
    /// The connection type produced.
    type Simulator: Simulator;

    /// Start a simulator process with `settings`.
    fn launch(&mut self, settings: &LaunchSettings) -> Result<Self::Simulator, SimulatorError>;
}
