//! Simulation engine for Triad worlds.
//!
//! Provides the [`World`] that owns an ordered population of [`Agent`]s and
//! advances it one frame at a time: a movement pass (chase prey, flee
//! predators) followed by an ordered-pair interaction pass (convert on
//! contact). Rendering is left to the host through the [`Canvas`] seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod metrics;
pub mod render;
pub mod world;

pub use agent::{Agent, Steering};
pub use config::{ConfigError, PassSchedule, WorldConfig};
pub use metrics::StepMetrics;
pub use render::{Canvas, SpriteSheet};
pub use world::World;
