//! Triad: a rock, paper, scissors agent simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Triad sub-crates. For most users, adding `triad` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use triad::prelude::*;
//!
//! // Three agents in a 400×300 world.
//! let mut world = World::empty(Bounds::new(400.0, 300.0)).unwrap();
//! world.add_agent(Kind::Rock, Position::new(10.0, 10.0)).unwrap();
//! world.add_agent(Kind::Scissors, Position::new(30.0, 10.0)).unwrap();
//! world.add_agent(Kind::Paper, Position::new(300.0, 200.0)).unwrap();
//!
//! let metrics = world.step();
//! assert_eq!(metrics.census.total(), 3);
//! assert_eq!(world.current_frame(), FrameId(1));
//!
//! // The rock touched the scissors and converted it.
//! assert_eq!(world.census().count(Kind::Rock), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `triad-core` | `Kind`, ids, geometry, census |
//! | [`engine`] | `triad-engine` | `Agent`, `World`, configuration, metrics, render seam |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`triad-core`).
///
/// Contains the [`types::Kind`] enumeration and its dominance relation,
/// identifiers, positions, bounds, and [`types::Census`].
pub use triad_core as types;

/// Simulation engine (`triad-engine`).
///
/// [`engine::World`] owns and steps the population; [`engine::Canvas`]
/// and [`engine::SpriteSheet`] form the render seam.
pub use triad_engine as engine;

/// Common imports for typical Triad usage.
///
/// ```rust
/// use triad::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use triad_core::{AgentId, Bounds, Census, FrameId, Kind, Position};

    // Engine
    pub use triad_engine::{
        Agent, Canvas, ConfigError, PassSchedule, SpriteSheet, StepMetrics, World, WorldConfig,
    };
}
