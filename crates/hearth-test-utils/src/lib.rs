//! Test utilities and mock simulators for Hearth development.
//!
//! Provides a scripted [`MockSimulator`] implementing
//! [`Simulator`](hearth_core::Simulator), a [`MockLauncher`] that hands
//! out clones of a template simulator, and [`SceneBuilder`] for terse
//! scene metadata in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{object_at, SceneBuilder};

use hearth_core::{
    Action, LaunchSettings, SceneId, SceneMetadata, Simulator, SimulatorError, SimulatorLauncher,
};

/// The simulator's reaction to one action.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedStep {
    /// Snapshot after the action.
    pub metadata: SceneMetadata,
    /// Whether the action succeeded at the simulator level.
    pub success: bool,
}

impl ScriptedStep {
    pub fn new(metadata: SceneMetadata, success: bool) -> Self {
        Self { metadata, success }
    }

    /// A successful action that leaves the scene as `metadata`.
    pub fn ok(metadata: SceneMetadata) -> Self {
        Self::new(metadata, true)
    }

    /// A refused action that leaves the scene as `metadata`.
    pub fn refused(metadata: SceneMetadata) -> Self {
        Self::new(metadata, false)
    }
}

/// Deterministic, script-driven simulator.
///
/// The n-th action after a `start()` or `reset()` produces `script[n]`,
/// regardless of which action it is. Past the end of the script, actions
/// succeed and leave the scene unchanged. Because the cursor rewinds on
/// every reset, replaying an action log reproduces the same outcomes.
///
/// Every call is recorded for assertions. The frame is the number of
/// actions executed since the last reset.
#[derive(Clone, Debug)]
pub struct MockSimulator {
    initial: SceneMetadata,
    script: Vec<ScriptedStep>,
    cursor: usize,
    current: SceneMetadata,
    last_success: bool,
    frame: u64,
    fail_at_step: Option<usize>,
    pub starts: Vec<(SceneId, u32)>,
    pub resets: Vec<(SceneId, Option<u64>)>,
    pub executed: Vec<Action>,
}

impl MockSimulator {
    /// A simulator whose scene starts as `initial` and follows `script`.
    pub fn new(initial: SceneMetadata, script: Vec<ScriptedStep>) -> Self {
        Self {
            current: initial.clone(),
            initial,
            script,
            cursor: 0,
            last_success: true,
            frame: 0,
            fail_at_step: None,
            starts: Vec::new(),
            resets: Vec::new(),
            executed: Vec::new(),
        }
    }

    /// Make the `step`-th action after a reset fail with a lost connection.
    pub fn with_connection_loss_at(mut self, step: usize) -> Self {
        self.fail_at_step = Some(step);
        self
    }

    /// Replace the remaining script.
    pub fn set_script(&mut self, script: Vec<ScriptedStep>) {
        self.script = script;
    }

    /// Number of actions executed since the last start or reset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn rewind(&mut self) {
        self.cursor = 0;
        self.current = self.initial.clone();
        self.last_success = true;
        self.frame = 0;
    }
}

impl Simulator for MockSimulator {
    type Frame = u64;

    fn start(&mut self, scene: &SceneId, device_id: u32) -> Result<(), SimulatorError> {
        self.starts.push((scene.clone(), device_id));
        self.rewind();
        Ok(())
    }

    fn reset(&mut self, scene: &SceneId, reseed: Option<u64>) -> Result<(), SimulatorError> {
        self.resets.push((scene.clone(), reseed));
        self.rewind();
        Ok(())
    }

    fn step(&mut self, action: &Action) -> Result<(), SimulatorError> {
        if self.fail_at_step == Some(self.cursor) {
            return Err(SimulatorError::ConnectionLost {
                reason: format!("scripted failure at step {}", self.cursor),
            });
        }
        self.executed.push(action.clone());
        match self.script.get(self.cursor) {
            Some(step) => {
                self.current = step.metadata.clone();
                self.last_success = step.success;
            }
            None => self.last_success = true,
        }
        self.cursor += 1;
        self.frame += 1;
        Ok(())
    }

    fn last_action_success(&self) -> bool {
        self.last_success
    }

    fn metadata(&self) -> &SceneMetadata {
        &self.current
    }

    fn current_frame(&self) -> &u64 {
        &self.frame
    }
}

/// Launcher handing out clones of a template [`MockSimulator`].
#[derive(Clone, Debug)]
pub struct MockLauncher {
    template: MockSimulator,
    fail: Option<SimulatorError>,
    pub launches: Vec<LaunchSettings>,
}

impl MockLauncher {
    pub fn new(template: MockSimulator) -> Self {
        Self {
            template,
            fail: None,
            launches: Vec::new(),
        }
    }

    /// A launcher whose every launch fails with `error`.
    pub fn failing(error: SimulatorError) -> Self {
        Self {
            template: MockSimulator::new(SceneMetadata::default(), Vec::new()),
            fail: Some(error),
            launches: Vec::new(),
        }
    }
}

impl SimulatorLauncher for MockLauncher {
    type Simulator = MockSimulator;

    fn launch(&mut self, settings: &LaunchSettings) -> Result<MockSimulator, SimulatorError> {
        self.launches.push(settings.clone());
        match &self.fail {
            Some(e) => Err(e.clone()),
            None => Ok(self.template.clone()),
        }
    }
}
