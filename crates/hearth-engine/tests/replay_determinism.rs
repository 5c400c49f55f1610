//! Integration test: replaying an action log reproduces the recorded run.
//!
//! Records trajectories against a scripted simulator, resets without
//! reseeding, replays the log, and checks that every reward and flag
//! matches bit-for-bit.

use std::time::Duration;

use hearth_core::{SceneId, SceneMetadata, Transition};
use hearth_engine::{ActionCatalogue, Episode, EpisodeConfig, EpisodePhase};
use hearth_judge::{DualSignalPolicy, JudgmentPolicy, RewardConfig, SequentialShapingPolicy};
use hearth_test_utils::{MockLauncher, MockSimulator, SceneBuilder, ScriptedStep};
use proptest::prelude::*;

fn scene() -> SceneId {
    SceneId::from("FloorPlan10")
}

fn kitchen_script() -> Vec<ScriptedStep> {
    let far = SceneBuilder::new()
        .object("Tomato", true, 3.0, 0.0, 0.0)
        .object("Bowl", false, 0.0, 0.0, 3.0)
        .object("Microwave", false, -2.0, 0.0, 0.0)
        .build();
    let near = SceneBuilder::new()
        .agent_at(1.0, 0.0, 0.0)
        .object("Tomato", true, 3.0, 0.0, 0.0)
        .object("Bowl", true, 0.0, 0.0, 3.0)
        .object("Microwave", true, -2.0, 0.0, 0.0)
        .build();
    vec![
        ScriptedStep::ok(far.clone()),
        ScriptedStep::refused(far),
        ScriptedStep::ok(near.clone()),
        ScriptedStep::ok(near.clone()),
        ScriptedStep::refused(near.clone()),
        ScriptedStep::ok(near),
    ]
}

fn episode(policy: Box<dyn JudgmentPolicy>, catalogue: ActionCatalogue) -> Episode<MockLauncher> {
    let config = EpisodeConfig {
        rewards: RewardConfig {
            shaping: true,
            ..RewardConfig::default()
        },
        ..EpisodeConfig::default()
    };
    let sim = MockSimulator::new(SceneMetadata::default(), kitchen_script());
    Episode::new(config, catalogue, MockLauncher::new(sim), policy).unwrap()
}

fn record(ep: &mut Episode<MockLauncher>, indices: &[usize]) -> Vec<Transition> {
    ep.new_episode(scene(), true).unwrap();
    for &i in indices {
        if ep.phase() == EpisodePhase::Terminal {
            break;
        }
        ep.step(i).unwrap();
    }
    ep.transitions().to_vec()
}

fn assert_bit_identical(recorded: &[Transition], replayed: &[Transition]) {
    assert_eq!(recorded.len(), replayed.len());
    for (rec, rep) in recorded.iter().zip(replayed) {
        assert_eq!(rec.action, rep.action);
        assert!(
            rec.verdict.bit_eq(&rep.verdict),
            "step {}: recorded {:?}, replayed {:?}",
            rec.step,
            rec.verdict,
            rep.verdict
        );
    }
}

#[test]
fn slow_replay_reproduces_sequential_run() {
    let mut ep = episode(
        Box::new(SequentialShapingPolicy::default()),
        ActionCatalogue::manipulation_task(),
    );
    // MoveAhead, PickupObject (refused), PickupObject, MoveAhead, Cook (refused), Cook
    let recorded = record(&mut ep, &[0, 5, 5, 0, 6, 6]);
    assert!(recorded.last().unwrap().verdict.terminal);

    let replayed = ep.slow_replay(Duration::ZERO).unwrap();
    assert_bit_identical(&recorded, &replayed);
    assert_eq!(ep.phase(), EpisodePhase::Terminal);
    assert!(ep.ledger().overall_success());
}

#[test]
fn replay_after_preserving_reset_matches() {
    let mut ep = episode(
        Box::new(DualSignalPolicy::default()),
        ActionCatalogue::declare_task(),
    );
    let recorded = record(&mut ep, &[1, 5, 0, 6]);

    ep.new_episode(scene(), false).unwrap();
    assert_eq!(ep.phase(), EpisodePhase::Ready);
    assert_eq!(ep.verify_replay(Duration::ZERO).unwrap(), None);
    assert_eq!(ep.transitions(), recorded.as_slice());
}

#[test]
fn replay_resets_simulator_without_reseeding() {
    let mut ep = episode(
        Box::new(DualSignalPolicy::default()),
        ActionCatalogue::declare_task(),
    );
    record(&mut ep, &[0, 1, 2]);
    let resets_before = ep.simulator().unwrap().resets.len();

    ep.slow_replay(Duration::ZERO).unwrap();
    let sim = ep.simulator().unwrap();
    assert_eq!(sim.resets.len(), resets_before + 1);
    assert_eq!(sim.resets.last(), Some(&(scene(), None)));
    assert_eq!(sim.cursor(), 3);
}

#[test]
fn replay_honours_delay() {
    let mut ep = episode(
        Box::new(DualSignalPolicy::default()),
        ActionCatalogue::declare_task(),
    );
    record(&mut ep, &[0, 0]);
    let start = std::time::Instant::now();
    ep.slow_replay(Duration::from_millis(5)).unwrap();
    assert!(start.elapsed() >= Duration::from_millis(10));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_dual_signal_log_replays_identically(
        indices in prop::collection::vec(0usize..7, 0..12),
    ) {
        let mut ep = episode(
            Box::new(DualSignalPolicy::default()),
            ActionCatalogue::declare_task(),
        );
        let recorded = record(&mut ep, &indices);
        prop_assert_eq!(ep.verify_replay(Duration::ZERO).unwrap(), None);
        prop_assert_eq!(ep.slow_replay(Duration::ZERO).unwrap().len(), recorded.len());
    }

    #[test]
    fn any_sequential_log_replays_identically(
        indices in prop::collection::vec(0usize..7, 0..12),
    ) {
        let mut ep = episode(
            Box::new(SequentialShapingPolicy::default()),
            ActionCatalogue::manipulation_task(),
        );
        let recorded = record(&mut ep, &indices);
        let replayed = ep.slow_replay(Duration::ZERO).unwrap();
        prop_assert_eq!(replayed.len(), recorded.len());
        for (rec, rep) in recorded.iter().zip(&replayed) {
            prop_assert!(rec.verdict.bit_eq(&rep.verdict));
        }
    }
}
