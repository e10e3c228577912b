//! Headless run of the reference profile.
//!
//! Demonstrates: build config → World → step → read census → reset → repeat.

use triad_bench::{reference_profile, run_to_dominance};
use triad_core::Kind;
use triad_engine::World;

fn main() {
    println!("=== Triad Headless Example ===\n");

    let mut world = World::new(reference_profile(42)).unwrap();

    println!("Run 1: seed 42, up to 5000 frames");
    for frame in 0..5000 {
        let metrics = world.step();
        if frame % 250 == 0 {
            println!(
                "  frame {:>4}: {}, conversions={:>2}, time={:>5}μs",
                frame + 1,
                metrics.census,
                metrics.conversions,
                metrics.total_us,
            );
        }
        if let Some(kind) = world.dominant() {
            println!("  {kind} took over at frame {}", world.current_frame());
            break;
        }
    }

    println!("\nResetting world with seed 7...");
    world.reset(7).unwrap();
    let frames = run_to_dominance(&mut world, 5000);
    match world.dominant() {
        Some(kind) => println!("Run 2: {kind} took over after {frames} frames"),
        None => println!("Run 2: no winner after {frames} frames ({})", world.census()),
    }

    for kind in Kind::ALL {
        println!("  {:>8}: {}", kind, world.census().count(kind));
    }
    println!("\nDone.");
}
