//! A single mobile agent: prey/predator selection, bounded movement,
//! contact detection, and conversion.
//!
//! Movement is per-axis and not normalised: an agent whose target differs
//! on both axes moves `speed` along each, so diagonal closing is faster
//! than axis-aligned closing. A move that would leave the world is skipped
//! for that axis only (soft clamp); the agent halts at the wall rather than
//! bouncing or wrapping.

use triad_core::{distance, AgentId, Bounds, Kind, Position};

/// Default agent size, used as both clamp margin and contact radius.
pub const DEFAULT_SIZE: f64 = 40.0;

/// Default per-axis step distance per frame.
pub const DEFAULT_SPEED: f64 = 2.0;

/// Where an agent intends to go this frame.
///
/// Captured from the population before the agent moves, so the target and
/// threat are chosen relative to the agent's position at the start of its
/// own update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Steering {
    /// Position of the nearest prey, if any remains.
    pub target: Option<Position>,
    /// Position of the nearest predator, if any remains.
    pub threat: Option<Position>,
}

/// A mobile agent of one [`Kind`].
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    id: AgentId,
    kind: Kind,
    position: Position,
    size: f64,
    speed: f64,
}

impl Agent {
    /// Create an agent. Callers are responsible for placing it inside the
    /// world; [`World::add_agent`](crate::World::add_agent) validates this.
    pub fn new(id: AgentId, kind: Kind, position: Position, size: f64, speed: f64) -> Self {
        Self {
            id,
            kind,
            position,
            size,
            speed,
        }
    }

    /// Stable identity, unchanged by conversion.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Current position (top-left corner of the agent's footprint).
    pub fn position(&self) -> Position {
        self.position
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Clamp margin and contact radius.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Per-axis step distance.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Nearest agent of `kind` in `population`.
    ///
    /// Ties resolve to the first agent in iteration order. Returns `None`
    /// when no agent of `kind` exists, which is normal once a kind dies out.
    pub fn nearest_of_kind<'p>(&self, population: &'p [Agent], kind: Kind) -> Option<&'p Agent> {
        let mut best: Option<(&Agent, f64)> = None;
        for other in population.iter().filter(|a| a.kind == kind) {
            let d = distance(self.position, other.position);
            if best.is_none_or(|(_, min)| d < min) {
                best = Some((other, d));
            }
        }
        best.map(|(agent, _)| agent)
    }

    /// Nearest agent this agent can convert.
    pub fn select_target<'p>(&self, population: &'p [Agent]) -> Option<&'p Agent> {
        self.nearest_of_kind(population, self.kind.beats())
    }

    /// Nearest agent that can convert this agent.
    pub fn select_avoider<'p>(&self, population: &'p [Agent]) -> Option<&'p Agent> {
        self.nearest_of_kind(population, self.kind.fears())
    }

    /// Pick target and threat from the current population.
    pub fn steering(&self, population: &[Agent]) -> Steering {
        Steering {
            target: self.select_target(population).map(Agent::position),
            threat: self.select_avoider(population).map(Agent::position),
        }
    }

    /// Apply a steering decision: chase first, then flee.
    ///
    /// Both moves may happen in the same frame. The flee direction is
    /// evaluated against the position already updated by the chase.
    pub fn follow(&mut self, steering: Steering, bounds: Bounds) {
        if let Some(target) = steering.target {
            self.move_towards(target, bounds);
        }
        if let Some(threat) = steering.threat {
            self.move_away_from(threat, bounds);
        }
    }

    /// One frame of agent behaviour against `population`.
    ///
    /// `population` may contain this agent itself; it is never selected
    /// because no kind chases or flees its own kind.
    pub fn step(&mut self, population: &[Agent], bounds: Bounds) {
        let steering = self.steering(population);
        self.follow(steering, bounds);
    }

    /// Step one `speed` towards `target` on each axis where it differs.
    pub fn move_towards(&mut self, target: Position, bounds: Bounds) {
        let dx = axis_sign(target.x, self.position.x);
        let dy = axis_sign(target.y, self.position.y);
        self.shift(dx, dy, bounds);
    }

    /// Step one `speed` away from `threat` on each axis where it differs.
    pub fn move_away_from(&mut self, threat: Position, bounds: Bounds) {
        let dx = -axis_sign(threat.x, self.position.x);
        let dy = -axis_sign(threat.y, self.position.y);
        self.shift(dx, dy, bounds);
    }

    fn shift(&mut self, dx: f64, dy: f64, bounds: Bounds) {
        if let Some(x) = clamped_step(self.position.x, dx * self.speed, self.size, bounds.width) {
            self.position.x = x;
        }
        if let Some(y) = clamped_step(self.position.y, dy * self.speed, self.size, bounds.height) {
            self.position.y = y;
        }
    }

    /// Whether `other` lies strictly within this agent's size.
    ///
    /// Only `self.size` is used, so two agents of different sizes can
    /// disagree about whether they touch.
    pub fn is_colliding(&self, other: &Agent) -> bool {
        distance(self.position, other.position) < self.size
    }

    /// Convert `other` to this agent's kind if this kind beats it.
    ///
    /// Returns `true` when a conversion happened. The reverse direction is
    /// a separate call.
    pub fn interact(&self, other: &mut Agent) -> bool {
        if self.kind.dominates(other.kind) {
            other.kind = self.kind;
            true
        } else {
            false
        }
    }
}

/// `+1`, `-1`, or `0` depending on where `to` lies relative to `from`.
fn axis_sign(to: f64, from: f64) -> f64 {
    if to > from {
        1.0
    } else if to < from {
        -1.0
    } else {
        0.0
    }
}

/// New coordinate after moving `delta`, or `None` if the move would leave
/// the open interval `(0, extent - size)`.
fn clamped_step(current: f64, delta: f64, size: f64, extent: f64) -> Option<f64> {
    let next = current + delta;
    if delta > 0.0 {
        (next + size < extent).then_some(next)
    } else if delta < 0.0 {
        (next > 0.0).then_some(next)
    } else {
        None
    }
}
