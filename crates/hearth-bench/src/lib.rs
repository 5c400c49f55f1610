//! Benchmark profiles for the Hearth episode engine.
//!
//! - [`kitchen_profile`]: a scene with the task objects plus `clutter`
//!   distractors, placed deterministically from a seed
//! - [`action_plan`]: a deterministic sequence of catalogue indices

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hearth_core::{AgentMetadata, ObjectMetadata, Position, SceneMetadata};
use hearth_engine::ActionCatalogue;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Distractor object types scattered around the kitchen.
pub const CLUTTER_TYPES: [&str; 6] = ["Apple", "Mug", "Knife", "Plate", "Pan", "Egg"];

/// Build a kitchen scene with one each of Tomato, Bowl, and Microwave
/// plus `clutter` distractors. Every object is visible.
///
/// Positions fall in a 10 m square around the agent at the origin.
pub fn kitchen_profile(clutter: usize, seed: u64) -> SceneMetadata {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let place = |rng: &mut ChaCha8Rng| {
        Position::new(
            rng.random_range(-5.0..5.0),
            rng.random_range(0.0..1.5),
            rng.random_range(-5.0..5.0),
        )
    };

    let mut objects = Vec::with_capacity(clutter + 3);
    for task in ["Tomato", "Bowl", "Microwave"] {
        objects.push(ObjectMetadata::new(task, true, place(&mut rng)));
    }
    for i in 0..clutter {
        let ty = CLUTTER_TYPES[i % CLUTTER_TYPES.len()];
        objects.push(ObjectMetadata::new(ty, true, place(&mut rng)));
    }

    SceneMetadata {
        objects,
        agent: AgentMetadata::default(),
    }
}

/// Generate `len` catalogue indices, uniformly distributed.
pub fn action_plan(catalogue: &ActionCatalogue, len: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.random_range(0..catalogue.len()))
        .collect()
}
