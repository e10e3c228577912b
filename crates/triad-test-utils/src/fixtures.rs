//! Reusable world and canvas fixtures.
//!
//! - [`WorldBuilder`] — places agents at exact positions, in order.
//! - [`RecordingCanvas`] — a [`Canvas`] that records every blit.
//! - [`snapshot`] — flattens a world into comparable per-agent state.

use triad_core::{AgentId, Bounds, Kind, Position};
use triad_engine::{Canvas, PassSchedule, World};

/// Builds a [`World`] from an explicit agent list.
///
/// Panics on invalid placement; fixtures are expected to be valid.
pub struct WorldBuilder {
    bounds: Bounds,
    schedule: PassSchedule,
    speed: Option<f64>,
    agents: Vec<(Kind, Position, Option<f64>, Option<f64>)>,
}

impl WorldBuilder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            schedule: PassSchedule::Phased,
            speed: None,
            agents: Vec::new(),
        }
    }

    /// Speed for agents added after this call. `0.0` pins them in place.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Add an agent with the default size.
    pub fn agent(mut self, kind: Kind, x: f64, y: f64) -> Self {
        self.agents.push((kind, Position::new(x, y), None, self.speed));
        self
    }

    /// Add an agent with an explicit size.
    pub fn sized(mut self, kind: Kind, x: f64, y: f64, size: f64) -> Self {
        self.agents.push((kind, Position::new(x, y), Some(size), self.speed));
        self
    }

    pub fn schedule(mut self, schedule: PassSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn build(self) -> World {
        let mut world = World::empty(self.bounds).expect("fixture bounds must be valid");
        world.set_schedule(self.schedule);
        let default_size = world.config().agent_size;
        let default_speed = world.config().agent_speed;
        for (kind, position, size, speed) in self.agents {
            world
                .add_agent_with(
                    kind,
                    position,
                    size.unwrap_or(default_size),
                    speed.unwrap_or(default_speed),
                )
                .expect("fixture agent must fit");
        }
        world
    }
}

/// Comparable per-agent state.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    pub id: AgentId,
    pub kind: Kind,
    pub x: f64,
    pub y: f64,
}

/// Flatten the population into [`AgentState`]s in iteration order.
pub fn snapshot(world: &World) -> Vec<AgentState> {
    world
        .agents()
        .iter()
        .map(|a| AgentState {
            id: a.id(),
            kind: a.kind(),
            x: a.x(),
            y: a.y(),
        })
        .collect()
}

/// A [`Canvas`] whose sprites are kinds, recording every call.
#[derive(Default)]
pub struct RecordingCanvas {
    pub clears: usize,
    pub blits: Vec<(Kind, Position, f64)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    type Sprite = Kind;

    fn clear(&mut self) {
        self.clears += 1;
        self.blits.clear();
    }

    fn blit(&mut self, sprite: &Kind, position: Position, size: f64) {
        self.blits.push((*sprite, position, size));
    }
}
