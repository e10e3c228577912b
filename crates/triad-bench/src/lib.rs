//! Benchmark profiles for the Triad simulation.
//!
//! Provides pre-built [`WorldConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 800x600 world, 10 agents per kind (30 total)
//! - [`crowded_profile`]: 800x600 world, 100 agents per kind (300 total)
//! - [`stress_profile`]: 1920x1080 world, 400 agents per kind (1200 total)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use triad_core::Bounds;
use triad_engine::{PassSchedule, World, WorldConfig};

/// The reference setup: 800x600, ten of each kind, size 40, speed 2.
pub fn reference_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        seed,
        ..WorldConfig::default()
    }
}

/// Same world as [`reference_profile`] with ten times the population.
pub fn crowded_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        agents_per_kind: 100,
        seed,
        ..WorldConfig::default()
    }
}

/// A full-HD world with 1200 agents. The O(n²) passes dominate here.
pub fn stress_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        bounds: Bounds::new(1920.0, 1080.0),
        agents_per_kind: 400,
        agent_size: 20.0,
        agent_speed: 2.0,
        seed,
        schedule: PassSchedule::Phased,
    }
}

/// Step `world` until one kind remains or `max_frames` elapse.
///
/// Returns the number of frames run.
pub fn run_to_dominance(world: &mut World, max_frames: u64) -> u64 {
    let mut frames = 0;
    while frames < max_frames && world.dominant().is_none() {
        world.step();
        frames += 1;
    }
    frames
}
