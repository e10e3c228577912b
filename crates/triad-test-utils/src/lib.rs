//! Test utilities and fixtures for Triad development.
//!
//! Provides a [`WorldBuilder`] for placing agents at exact positions and a
//! [`RecordingCanvas`] that captures draw calls for assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{snapshot, AgentState, RecordingCanvas, WorldBuilder};
