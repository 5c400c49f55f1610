//! Hearth scripted rollout: one sequential-shaping episode, then a replay.
//!
//! Demonstrates:
//!   1. Configuring an episode with distance shaping enabled
//!   2. Stepping a fixed action plan against a scripted simulator
//!   3. Resetting without reseeding and verifying the replay
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example scripted_rollout

use std::time::Duration;

use hearth_core::{SceneId, SceneMetadata};
use hearth_engine::{ActionCatalogue, Episode, EpisodeConfig};
use hearth_judge::{RewardConfig, SequentialShapingPolicy};
use hearth_test_utils::{MockLauncher, MockSimulator, SceneBuilder, ScriptedStep};
use tracing_subscriber::EnvFilter;

// ---- Scripted kitchen -------------------------------------------------

fn kitchen() -> Vec<ScriptedStep> {
    let start = SceneBuilder::new()
        .object("Tomato", true, 2.0, 0.0, 0.0)
        .object("Microwave", false, 0.0, 0.0, 4.0)
        .build();
    let closer = SceneBuilder::new()
        .agent_at(1.0, 0.0, 0.0)
        .object("Tomato", true, 2.0, 0.0, 0.0)
        .object("Microwave", false, 0.0, 0.0, 4.0)
        .build();
    let holding = SceneBuilder::new()
        .agent_at(1.0, 0.0, 0.0)
        .object("Tomato", false, 1.0, 0.5, 0.0)
        .object("Microwave", true, 0.0, 0.0, 4.0)
        .build();
    let at_microwave = SceneBuilder::new()
        .agent_at(0.0, 0.0, 3.0)
        .object("Tomato", false, 0.0, 0.5, 3.0)
        .object("Microwave", true, 0.0, 0.0, 4.0)
        .build();
    vec![
        ScriptedStep::ok(closer.clone()),
        ScriptedStep::ok(holding.clone()),
        ScriptedStep::ok(at_microwave.clone()),
        ScriptedStep::refused(at_microwave.clone()),
        ScriptedStep::ok(at_microwave),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = EpisodeConfig {
        base_seed: 42,
        worker_rank: 0,
        rewards: RewardConfig {
            shaping: true,
            ..RewardConfig::default()
        },
        ..EpisodeConfig::default()
    };
    let launcher = MockLauncher::new(MockSimulator::new(SceneMetadata::default(), kitchen()));
    let mut episode = Episode::new(
        config,
        ActionCatalogue::manipulation_task(),
        launcher,
        Box::new(SequentialShapingPolicy::default()),
    )?;

    let scene = SceneId::from("FloorPlan10");
    episode.new_episode(scene.clone(), true)?;

    // MoveAhead, PickupObject, MoveAhead, Cook (refused), Cook
    let plan = [0usize, 5, 0, 6, 6];
    println!("{:<14} {:>8} {:>9} {:>9}", "action", "reward", "terminal", "success");
    for index in plan {
        let verdict = episode.step(index)?;
        let action = &episode.actions_taken()[episode.actions_taken().len() - 1];
        println!(
            "{:<14} {:>8.3} {:>9} {:>9}",
            action.name(),
            verdict.reward,
            verdict.terminal,
            verdict.action_succeeded
        );
        if verdict.terminal {
            break;
        }
    }

    let metrics = episode.metrics();
    println!(
        "\n{} steps, total reward {:.3}, {} refused, {} shaping bonuses",
        metrics.steps, metrics.total_reward, metrics.refused_actions, metrics.shaping_bonuses
    );

    episode.new_episode(scene, false)?;
    match episode.verify_replay(Duration::from_millis(20))? {
        None => println!("replay matched the recorded trajectory"),
        Some(report) => println!("replay diverged at step {}: {:?}", report.step, report.kind),
    }
    Ok(())
}
