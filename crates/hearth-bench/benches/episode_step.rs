//! Criterion benchmarks for stepping and replaying episodes.

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use hearth_bench::{action_plan, kitchen_profile};
use hearth_core::SceneId;
use hearth_engine::{ActionCatalogue, Episode, EpisodeConfig, EpisodePhase};
use hearth_judge::{DualSignalPolicy, JudgmentPolicy, RewardConfig, SequentialShapingPolicy};
use hearth_test_utils::{MockLauncher, MockSimulator, ScriptedStep};

const PLAN_LEN: usize = 200;

fn episode(
    policy: Box<dyn JudgmentPolicy>,
    catalogue: ActionCatalogue,
    shaping: bool,
) -> Episode<MockLauncher> {
    let scene = kitchen_profile(40, 42);
    let script = vec![ScriptedStep::ok(scene.clone()); PLAN_LEN];
    let config = EpisodeConfig {
        rewards: RewardConfig {
            shaping,
            ..RewardConfig::default()
        },
        ..EpisodeConfig::default()
    };
    let mut ep = Episode::new(
        config,
        catalogue,
        MockLauncher::new(MockSimulator::new(scene, script)),
        policy,
    )
    .unwrap();
    ep.new_episode(SceneId::from("FloorPlan10"), true).unwrap();
    ep
}

fn run_plan(ep: &mut Episode<MockLauncher>, plan: &[usize]) {
    ep.new_episode(SceneId::from("FloorPlan10"), true).unwrap();
    for &i in plan {
        if ep.phase() == EpisodePhase::Terminal {
            break;
        }
        black_box(ep.step(i).unwrap());
    }
}

fn bench_dual_signal_episode(c: &mut Criterion) {
    let catalogue = ActionCatalogue::declare_task();
    // Navigation only, so the episode never terminates early.
    let plan: Vec<usize> = action_plan(&catalogue, PLAN_LEN, 7)
        .into_iter()
        .map(|i| i % 5)
        .collect();
    let mut ep = episode(Box::new(DualSignalPolicy::default()), catalogue, false);

    c.bench_function("dual_signal_200_steps", |b| {
        b.iter(|| run_plan(&mut ep, &plan));
    });
}

fn bench_sequential_shaping_episode(c: &mut Criterion) {
    let catalogue = ActionCatalogue::manipulation_task();
    let plan: Vec<usize> = action_plan(&catalogue, PLAN_LEN, 7)
        .into_iter()
        .map(|i| i % 5)
        .collect();
    let mut ep = episode(
        Box::new(SequentialShapingPolicy::default()),
        catalogue,
        true,
    );

    c.bench_function("sequential_shaping_200_steps", |b| {
        b.iter(|| run_plan(&mut ep, &plan));
    });
}

fn bench_verify_replay(c: &mut Criterion) {
    let catalogue = ActionCatalogue::manipulation_task();
    let plan: Vec<usize> = action_plan(&catalogue, PLAN_LEN, 11)
        .into_iter()
        .map(|i| i % 5)
        .collect();
    let mut ep = episode(
        Box::new(SequentialShapingPolicy::default()),
        catalogue,
        true,
    );
    run_plan(&mut ep, &plan);

    c.bench_function("verify_replay_200_steps", |b| {
        b.iter(|| {
            let report = ep.verify_replay(Duration::ZERO).unwrap();
            black_box(report);
        });
    });
}

criterion_group!(
    benches,
    bench_dual_signal_episode,
    bench_sequential_shaping_episode,
    bench_verify_replay
);
criterion_main!(benches);
