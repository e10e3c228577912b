//! Core types for the Triad cyclic-dominance simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: the closed
//! [`Kind`] enumeration and its dominance relation, strongly-typed
//! identifiers, and planar geometry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod census;
pub mod geometry;
pub mod id;
pub mod kind;

pub use census::Census;
pub use geometry::{distance, Bounds, Position};
pub use id::{AgentId, FrameId};
pub use kind::Kind;
