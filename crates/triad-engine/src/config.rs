//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder-input for constructing a [`World`](crate::World).
//! [`validate()`](WorldConfig::validate) checks every structural invariant
//! before any agent is created, so an invalid world is never observable.

use std::error::Error;
use std::fmt;

use triad_core::{Bounds, Position};

use crate::agent::{DEFAULT_SIZE, DEFAULT_SPEED};

// ── PassSchedule ───────────────────────────────────────────────────

/// Order in which movement and interaction run within one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassSchedule {
    /// Move every agent, then run the full ordered-pair interaction pass.
    #[default]
    Phased,
    /// Per agent: move it, then let it interact with every other agent
    /// before the next agent moves. Compatibility mode for the legacy
    /// single-loop update; produces different trajectories than `Phased`.
    Interleaved,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration or placing an agent.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// World width or height is NaN, infinite, zero, or negative.
    InvalidDimensions {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// Agent size is NaN, infinite, zero, or negative.
    InvalidAgentSize {
        /// The invalid value.
        size: f64,
    },
    /// Agent speed is NaN, infinite, or negative.
    InvalidSpeed {
        /// The invalid value.
        speed: f64,
    },
    /// The world is not larger than an agent on some axis, so no valid
    /// position exists.
    AgentTooLarge {
        /// Agent size.
        size: f64,
        /// World width.
        width: f64,
        /// World height.
        height: f64,
    },
    /// A manually placed agent lies outside `[0, max_x] × [0, max_y]`.
    PositionOutOfBounds {
        /// Requested x.
        x: f64,
        /// Requested y.
        y: f64,
        /// Largest valid x for this agent's size.
        max_x: f64,
        /// Largest valid y for this agent's size.
        max_y: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "world dimensions must be finite and positive, got {width}x{height}"
                )
            }
            Self::InvalidAgentSize { size } => {
                write!(f, "agent size must be finite and positive, got {size}")
            }
            Self::InvalidSpeed { speed } => {
                write!(f, "agent speed must be finite and >= 0, got {speed}")
            }
            Self::AgentTooLarge {
                size,
                width,
                height,
            } => {
                write!(
                    f,
                    "agent size {size} leaves no room in a {width}x{height} world"
                )
            }
            Self::PositionOutOfBounds { x, y, max_x, max_y } => {
                write!(
                    f,
                    "position ({x}, {y}) outside [0, {max_x}] x [0, {max_y}]"
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Check that `bounds` is usable at all.
pub(crate) fn validate_bounds(bounds: Bounds) -> Result<(), ConfigError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if !ok(bounds.width) || !ok(bounds.height) {
        return Err(ConfigError::InvalidDimensions {
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok(())
}

/// Check that an agent with `size` and `speed` fits inside `bounds`.
pub(crate) fn validate_agent(bounds: Bounds, size: f64, speed: f64) -> Result<(), ConfigError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(ConfigError::InvalidAgentSize { size });
    }
    if !speed.is_finite() || speed < 0.0 {
        return Err(ConfigError::InvalidSpeed { speed });
    }
    if bounds.width <= size || bounds.height <= size {
        return Err(ConfigError::AgentTooLarge {
            size,
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok(())
}

/// Check that `position` keeps an agent of `size` inside `bounds`.
pub(crate) fn validate_position(
    bounds: Bounds,
    position: Position,
    size: f64,
) -> Result<(), ConfigError> {
    if !bounds.contains(position, size) {
        return Err(ConfigError::PositionOutOfBounds {
            x: position.x,
            y: position.y,
            max_x: bounds.max_x(size),
            max_y: bounds.max_y(size),
        });
    }
    Ok(())
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a seeded world.
///
/// Defaults reproduce the reference setup: an 800×600 world with ten
/// agents of each kind, size 40, speed 2.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// World extent.
    pub bounds: Bounds,
    /// Number of agents created for each kind. Zero is allowed.
    pub agents_per_kind: usize,
    /// Size of every seeded agent (clamp margin and collision radius).
    pub agent_size: f64,
    /// Per-axis step distance of every seeded agent.
    pub agent_speed: f64,
    /// Seed for initial placement. `step()` itself draws no randomness.
    pub seed: u64,
    /// Pass ordering within a frame.
    pub schedule: PassSchedule,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            agents_per_kind: 10,
            agent_size: DEFAULT_SIZE,
            agent_speed: DEFAULT_SPEED,
            seed: 42,
            schedule: PassSchedule::Phased,
        }
    }
}

impl WorldConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bounds(self.bounds)?;
        validate_agent(self.bounds, self.agent_size, self.agent_speed)?;
        Ok(())
    }
}
