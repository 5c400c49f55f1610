//! The episode state machine.
//!
//! [`Episode`] is the object a reinforcement-learning worker holds. It
//! owns the simulator connection, the action catalogue and log, and the
//! per-episode goal state, and it delegates scoring to a
//! [`JudgmentPolicy`].
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──new_episode()──▶ Ready ──step() (terminal)──▶ Terminal
//!                                  ▲  │                            │
//!                                  │  └──step() error──▶ Failed    │
//!                                  │                       │       │
//!                                  └─────new_episode()─────┴───────┘
//! ```
//!
//! A simulator or judgment error is fatal to the episode: goal state may
//! be half-updated, so every further step is refused until the next
//! `new_episode()`.
//!
//! The simulator is launched lazily by the first
//! [`new_episode()`](Episode::new_episode) and reused afterwards. Every
//! later call resets the existing connection.
//!
//! # Ownership model
//!
//! `Episode` is [`Send`] when its launcher and simulator are, so a worker
//! can be moved onto its own thread. It is never shared: every mutating
//! operation takes `&mut self` and blocks on the simulator.

use std::fmt;
use std::thread;
use std::time::Duration;

use hearth_core::{
    Action, EpisodeError, SceneId, Simulator, SimulatorLauncher, Transition, Verdict,
};
use hearth_judge::{GoalLedger, JudgeContext, JudgmentPolicy, TargetTracker};
use hearth_replay::{compare_trajectories, DivergenceReport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::catalogue::ActionCatalogue;
use crate::config::{ConfigError, EpisodeConfig};
use crate::metrics::EpisodeMetrics;

/// The frame type produced by a launcher's simulator.
pub type FrameOf<L> = <<L as SimulatorLauncher>::Simulator as Simulator>::Frame;

// ── EpisodePhase ───────────────────────────────────────────────────

/// Where an [`Episode`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodePhase {
    /// No scene loaded yet.
    Uninitialized,
    /// Accepting actions.
    Ready,
    /// The judgment policy reported the episode finished.
    Terminal,
    /// A simulator or judgment error aborted the episode.
    Failed,
}

// ── Episode ────────────────────────────────────────────────────────

/// One worker's episode against one simulator connection.
///
/// # Example
///
/// ```ignore
/// let mut episode = Episode::new(config, ActionCatalogue::declare_task(),
///                                launcher, Box::new(DualSignalPolicy::default()))?;
/// episode.new_episode(SceneId::from("FloorPlan28"), true)?;
/// loop {
///     let frame = episode.state_for_agent()?;
///     let verdict = episode.step(agent.choose(frame))?;
///     if verdict.terminal { break; }
/// }
/// ```
pub struct Episode<L: SimulatorLauncher> {
    config: EpisodeConfig,
    catalogue: ActionCatalogue,
    launcher: L,
    simulator: Option<L::Simulator>,
    policy: Box<dyn JudgmentPolicy>,
    seed: u64,
    rng: ChaCha8Rng,
    current_scene: Option<SceneId>,
    actions_taken: Vec<Action>,
    transitions: Vec<Transition>,
    ledger: GoalLedger,
    target: TargetTracker,
    terminal: bool,
    failed: bool,
    metrics: EpisodeMetrics,
}

impl<L: SimulatorLauncher> Episode<L> {
    /// Create an episode. No simulator is launched until the first
    /// [`new_episode()`](Self::new_episode).
    ///
    /// The episode seed is `base_seed + worker_rank`; it seeds the
    /// simulator at launch and the generator drawing every later reseed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(
        config: EpisodeConfig,
        catalogue: ActionCatalogue,
        launcher: L,
        policy: Box<dyn JudgmentPolicy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.worker_seed();
        let target = TargetTracker::new(policy.initial_target());
        Ok(Self {
            config,
            catalogue,
            launcher,
            simulator: None,
            policy,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            current_scene: None,
            actions_taken: Vec::new(),
            transitions: Vec::new(),
            ledger: GoalLedger::new(),
            target,
            terminal: false,
            failed: false,
            metrics: EpisodeMetrics::default(),
        })
    }

    /// Start a new episode in `scene`.
    ///
    /// The first call launches the simulator and starts `scene` on the
    /// configured device. Later calls reset the running simulator; with
    /// `change_seed` the simulator is reseeded from the episode's
    /// generator and the action log is cleared, without it the scene is
    /// restored exactly and the log is kept for a following
    /// [`slow_replay()`](Self::slow_replay).
    ///
    /// Goal flags, target, terminal and failed state, and metrics are
    /// always reset.
    /// Returns `Ok(true)` once the scene is loaded.
    ///
    /// # Errors
    ///
    /// Returns [`EpisodeError::Simulator`] if launching, starting, or
    /// resetting fails. A failed launch leaves the episode uninitialized.
    pub fn new_episode(&mut self, scene: SceneId, change_seed: bool) -> Result<bool, EpisodeError> {
        match self.simulator.as_mut() {
            None => {
                let settings = self.config.launch_settings(self.seed);
                info!(
                    executable = %settings.executable_path.display(),
                    seed = settings.seed,
                    grid_size = settings.grid_size,
                    fov = settings.fov,
                    "launching simulator"
                );
                let mut simulator = self.launcher.launch(&settings)?;
                simulator.start(&scene, self.config.device_id)?;
                self.simulator = Some(simulator);
            }
            Some(simulator) => {
                let reseed = change_seed.then(|| self.rng.random::<u64>());
                simulator.reset(&scene, reseed)?;
            }
        }

        if change_seed {
            self.actions_taken.clear();
            self.transitions.clear();
        }
        self.reset_judgment_state();
        info!(
            scene = %scene,
            change_seed,
            logged_actions = self.actions_taken.len(),
            "episode started"
        );
        self.current_scene = Some(scene);
        Ok(true)
    }

    /// Execute the catalogue action at `action_index` and judge it.
    ///
    /// Once judged, the action and its transition are logged together. A
    /// failed step logs nothing and aborts the episode.
    ///
    /// # Errors
    ///
    /// - [`EpisodeError::NotStarted`] before the first `new_episode()`.
    /// - [`EpisodeError::EpisodeTerminated`] once a step reported terminal.
    /// - [`EpisodeError::EpisodeAborted`] after an earlier failed step.
    /// - [`EpisodeError::ActionOutOfRange`] for an index past the catalogue.
    /// - [`EpisodeError::Simulator`] or [`EpisodeError::Judge`] from the step.
    pub fn step(&mut self, action_index: usize) -> Result<Verdict, EpisodeError> {
        self.ensure_accepting()?;
        let action = self
            .catalogue
            .get(action_index)
            .cloned()
            .ok_or(EpisodeError::ActionOutOfRange {
                index: action_index,
                len: self.catalogue.len(),
            })?;

        let verdict = self.execute(&action)?;
        let step = self.actions_taken.len();
        self.actions_taken.push(action.clone());
        self.transitions.push(Transition {
            step,
            action,
            verdict,
        });
        Ok(verdict)
    }

    /// Execute and judge `action` directly, without logging it.
    ///
    /// The action need not be in the catalogue. Goal state, terminal
    /// phase, and metrics update exactly as for [`step()`](Self::step).
    ///
    /// # Errors
    ///
    /// As for [`step()`](Self::step), minus the range check.
    pub fn action_step(&mut self, action: &Action) -> Result<Verdict, EpisodeError> {
        self.ensure_accepting()?;
        self.execute(action)
    }

    /// Reset to the current scene without reseeding and re-execute every
    /// logged action in order, sleeping `delay` after each one.
    ///
    /// Judgment state is reset first, so the returned transitions are
    /// what the logged actions earn from a fresh start. The log and the
    /// recorded transitions are left untouched. A failure part-way
    /// aborts the episode as for [`step()`](Self::step).
    ///
    /// # Errors
    ///
    /// Returns [`EpisodeError::NotStarted`] before the first
    /// `new_episode()`, otherwise any simulator or judgment failure.
    pub fn slow_replay(&mut self, delay: Duration) -> Result<Vec<Transition>, EpisodeError> {
        let scene = self.current_scene.clone().ok_or(EpisodeError::NotStarted)?;
        let simulator = self.simulator.as_mut().ok_or(EpisodeError::NotStarted)?;
        if let Err(error) = simulator.reset(&scene, None) {
            self.failed = true;
            return Err(error.into());
        }
        self.reset_judgment_state();

        info!(scene = %scene, actions = self.actions_taken.len(), "replaying action log");
        let actions = self.actions_taken.clone();
        let mut replayed = Vec::with_capacity(actions.len());
        for (step, action) in actions.into_iter().enumerate() {
            let verdict = self.execute(&action)?;
            replayed.push(Transition {
                step,
                action,
                verdict,
            });
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(replayed)
    }

    /// Replay the log and compare the outcome with the recorded
    /// transitions.
    ///
    /// Returns `None` when every reward and flag matches bit-for-bit,
    /// or the first divergence.
    ///
    /// # Errors
    ///
    /// As for [`slow_replay()`](Self::slow_replay).
    pub fn verify_replay(
        &mut self,
        delay: Duration,
    ) -> Result<Option<DivergenceReport>, EpisodeError> {
        let replayed = self.slow_replay(delay)?;
        let report = compare_trajectories(&self.transitions, &replayed);
        if let Some(r) = &report {
            warn!(step = r.step, kind = ?r.kind, "replay diverged from recorded trajectory");
        }
        Ok(report)
    }

    /// The simulator's current visual observation.
    ///
    /// # Errors
    ///
    /// Returns [`EpisodeError::NotStarted`] before the first `new_episode()`.
    pub fn state_for_agent(&self) -> Result<&FrameOf<L>, EpisodeError> {
        self.simulator
            .as_ref()
            .map(|simulator| simulator.current_frame())
            .ok_or(EpisodeError::NotStarted)
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Current lifecycle phase.
    pub fn phase(&self) -> EpisodePhase {
        if self.simulator.is_none() || self.current_scene.is_none() {
            EpisodePhase::Uninitialized
        } else if self.failed {
            EpisodePhase::Failed
        } else if self.terminal {
            EpisodePhase::Terminal
        } else {
            EpisodePhase::Ready
        }
    }

    /// `base_seed + worker_rank`.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Actions logged by [`step()`](Self::step) since the last clearing reset.
    pub fn actions_taken(&self) -> &[Action] {
        &self.actions_taken
    }

    /// Judged transitions matching [`actions_taken()`](Self::actions_taken).
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Sub-goal flags for the current episode.
    pub fn ledger(&self) -> &GoalLedger {
        &self.ledger
    }

    /// Current interaction target and running minimum distance.
    pub fn target(&self) -> &TargetTracker {
        &self.target
    }

    /// Counters for the current episode.
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }

    /// Scene loaded by the last `new_episode()`.
    pub fn current_scene(&self) -> Option<&SceneId> {
        self.current_scene.as_ref()
    }

    /// The action catalogue.
    pub fn catalogue(&self) -> &ActionCatalogue {
        &self.catalogue
    }

    /// The configuration this episode was built from.
    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    /// Name of the judgment policy.
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// The launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// The simulator connection, once launched.
    pub fn simulator(&self) -> Option<&L::Simulator> {
        self.simulator.as_ref()
    }

    // ── Internals ──────────────────────────────────────────────────

    fn ensure_accepting(&self) -> Result<(), EpisodeError> {
        match self.phase() {
            EpisodePhase::Uninitialized => Err(EpisodeError::NotStarted),
            EpisodePhase::Terminal => Err(EpisodeError::EpisodeTerminated),
            EpisodePhase::Failed => Err(EpisodeError::EpisodeAborted),
            EpisodePhase::Ready => Ok(()),
        }
    }

    fn reset_judgment_state(&mut self) {
        self.ledger = GoalLedger::new();
        self.target = TargetTracker::new(self.policy.initial_target());
        self.terminal = false;
        self.failed = false;
        self.metrics = EpisodeMetrics::default();
    }

    fn execute(&mut self, action: &Action) -> Result<Verdict, EpisodeError> {
        let result = self.execute_and_judge(action);
        if let Err(error) = &result {
            self.failed = true;
            warn!(action = %action, error = %error, "episode aborted");
        }
        result
    }

    fn execute_and_judge(&mut self, action: &Action) -> Result<Verdict, EpisodeError> {
        let simulator = self.simulator.as_mut().ok_or(EpisodeError::NotStarted)?;
        simulator.step(action)?;
        let succeeded = simulator.last_action_success();

        let mut ctx = JudgeContext::new(
            action,
            succeeded,
            simulator.metadata(),
            &mut self.ledger,
            &mut self.target,
            &self.config.rewards,
        );
        let verdict = self
            .policy
            .judge(&mut ctx)
            .map_err(|reason| EpisodeError::Judge {
                policy: self.policy.name().to_string(),
                reason,
            })?;
        let breakdown = ctx.breakdown();

        self.terminal = verdict.terminal;
        self.metrics.record(&verdict, &breakdown);
        debug!(
            step = self.metrics.steps,
            action = %action,
            reward = verdict.reward,
            terminal = verdict.terminal,
            succeeded = verdict.action_succeeded,
            "step judged"
        );
        if verdict.terminal {
            info!(
                steps = self.metrics.steps,
                total_reward = self.metrics.total_reward,
                overall_success = self.ledger.overall_success(),
                "episode terminal"
            );
        }
        Ok(verdict)
    }
}

impl<L: SimulatorLauncher> fmt::Debug for Episode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Episode")
            .field("phase", &self.phase())
            .field("seed", &self.seed)
            .field("policy", &self.policy.name())
            .field("current_scene", &self.current_scene)
            .field("actions_taken", &self.actions_taken.len())
            .field("ledger", &self.ledger)
            .field("terminal", &self.terminal)
            .field("failed", &self.failed)
            .finish()
    }
}
