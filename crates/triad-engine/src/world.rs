//! The simulation world: owns the population and advances it frame by frame.
//!
//! # Frame structure
//!
//! With the default [`PassSchedule::Phased`], each [`step()`](World::step)
//! runs two full passes in sequence:
//!
//! 1. **Movement**: every agent, in insertion order, picks its nearest prey
//!    and predator from the live population and moves. Later agents see the
//!    positions earlier agents already took this frame.
//! 2. **Interaction**: every ordered pair `(a, b)` with `a != b` is checked
//!    in row-major order; if `a` touches `b`, `a` may convert `b`. A
//!    conversion is visible to every later pair, so one frame can chain
//!    several conversions.
//!
//! No randomness is drawn inside `step()`; given the same initial
//! population the trajectory is fully reproducible.
//!
//! # Ownership model
//!
//! `World` is [`Send`]. All mutating methods take `&mut self`; there is no
//! interior mutability and no background work.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};
use triad_core::{AgentId, Bounds, Census, FrameId, Kind, Position};

use crate::agent::Agent;
use crate::config::{
    validate_agent, validate_bounds, validate_position, ConfigError, PassSchedule, WorldConfig,
};
use crate::metrics::StepMetrics;
use crate::render::{Canvas, SpriteSheet};

// Compile-time assertion: World can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<World>();
    }
};

#[derive(Default)]
struct Tally {
    collisions: u32,
    conversions: u32,
}

/// A bounded 2D world holding an ordered population of agents.
///
/// # Example
///
/// ```
/// use triad_engine::{World, WorldConfig};
///
/// let mut world = World::new(WorldConfig::default()).unwrap();
/// assert_eq!(world.agents().len(), 30);
/// for _ in 0..100 {
///     world.step();
/// }
/// assert_eq!(world.agents().len(), 30);
/// ```
#[derive(Clone, Debug)]
pub struct World {
    config: WorldConfig,
    agents: Vec<Agent>,
    frame: FrameId,
    last_metrics: StepMetrics,
}

impl World {
    /// Create a world from a [`WorldConfig`] and seed its population.
    ///
    /// Placement uses a ChaCha8 stream seeded from `config.seed`, so the
    /// same configuration always yields the same initial population.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = Self {
            config,
            agents: Vec::new(),
            frame: FrameId(0),
            last_metrics: StepMetrics::default(),
        };
        world.reseed()?;
        Ok(world)
    }

    /// Create an empty world for manual placement with
    /// [`add_agent`](Self::add_agent).
    ///
    /// Agent size and speed default to the values in [`WorldConfig::default`].
    pub fn empty(bounds: Bounds) -> Result<Self, ConfigError> {
        validate_bounds(bounds)?;
        Ok(Self {
            config: WorldConfig {
                bounds,
                agents_per_kind: 0,
                ..WorldConfig::default()
            },
            agents: Vec::new(),
            frame: FrameId(0),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Append `count_per_kind` agents of each kind at uniformly random
    /// positions, in blocks: all rocks, then all papers, then all scissors.
    ///
    /// Positions are drawn from `[0, width - size) × [0, height - size)`
    /// using the configured agent size and speed.
    pub fn seed_population<R: Rng + ?Sized>(
        &mut self,
        count_per_kind: usize,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        let bounds = self.config.bounds;
        let size = self.config.agent_size;
        let speed = self.config.agent_speed;
        validate_agent(bounds, size, speed)?;

        let max_x = bounds.max_x(size);
        let max_y = bounds.max_y(size);
        self.agents.reserve(count_per_kind * Kind::ALL.len());
        for kind in Kind::ALL {
            for _ in 0..count_per_kind {
                let x = rng.random_range(0.0..max_x);
                let y = rng.random_range(0.0..max_y);
                self.push(kind, Position::new(x, y), size, speed);
            }
        }
        debug!(
            count_per_kind,
            population = self.agents.len(),
            "seeded population"
        );
        Ok(())
    }

    /// Place one agent with the configured size and speed.
    pub fn add_agent(&mut self, kind: Kind, position: Position) -> Result<AgentId, ConfigError> {
        self.add_agent_with(kind, position, self.config.agent_size, self.config.agent_speed)
    }

    /// Place one agent with an explicit size and speed.
    ///
    /// Fails if the agent cannot fit in the world or `position` lies
    /// outside `[0, width - size] × [0, height - size]`.
    pub fn add_agent_with(
        &mut self,
        kind: Kind,
        position: Position,
        size: f64,
        speed: f64,
    ) -> Result<AgentId, ConfigError> {
        let bounds = self.config.bounds;
        validate_agent(bounds, size, speed)?;
        validate_position(bounds, position, size)?;
        Ok(self.push(kind, position, size, speed))
    }

    fn push(&mut self, kind: Kind, position: Position, size: f64, speed: f64) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(Agent::new(id, kind, position, size, speed));
        id
    }

    /// Advance one frame and return its metrics.
    pub fn step(&mut self) -> &StepMetrics {
        let start = Instant::now();
        let before = self.census();
        let mut tally = Tally::default();

        let (movement_us, interaction_us) = match self.config.schedule {
            PassSchedule::Phased => {
                let t = Instant::now();
                for index in 0..self.agents.len() {
                    self.step_agent(index);
                }
                let movement_us = elapsed_us(t);

                let t = Instant::now();
                for index in 0..self.agents.len() {
                    self.contact_row(index, &mut tally);
                }
                (movement_us, elapsed_us(t))
            }
            PassSchedule::Interleaved => {
                for index in 0..self.agents.len() {
                    self.step_agent(index);
                    self.contact_row(index, &mut tally);
                }
                (0, 0)
            }
        };

        self.frame = FrameId(self.frame.0 + 1);
        let census = self.census();
        self.log_transitions(before, census);
        debug!(
            frame = self.frame.0,
            collisions = tally.collisions,
            conversions = tally.conversions,
            "frame stepped"
        );

        let total_us = elapsed_us(start);
        self.last_metrics = StepMetrics {
            total_us,
            movement_us,
            interaction_us,
            collisions: tally.collisions,
            conversions: tally.conversions,
            census,
        };
        &self.last_metrics
    }

    /// Move the agent at `index` against the live population.
    fn step_agent(&mut self, index: usize) {
        let bounds = self.config.bounds;
        let steering = self.agents[index].steering(&self.agents);
        self.agents[index].follow(steering, bounds);
    }

    /// Let the agent at `index` act on every other agent it touches.
    fn contact_row(&mut self, index: usize, tally: &mut Tally) {
        for other in 0..self.agents.len() {
            if other == index {
                continue;
            }
            let (actor, subject) = pair_mut(&mut self.agents, index, other);
            if !actor.is_colliding(subject) {
                continue;
            }
            tally.collisions += 1;
            let from = subject.kind();
            if actor.interact(subject) {
                tally.conversions += 1;
                trace!(
                    frame = self.frame.0 + 1,
                    actor = %actor.id(),
                    subject = %subject.id(),
                    from = %from,
                    to = %subject.kind(),
                    "converted"
                );
            }
        }
    }

    fn log_transitions(&self, before: Census, after: Census) {
        for kind in Kind::ALL {
            if !before.is_extinct(kind) && after.is_extinct(kind) {
                info!(frame = self.frame.0, kind = %kind, "kind went extinct");
            }
        }
        if before.dominant().is_none() {
            if let Some(kind) = after.dominant() {
                info!(frame = self.frame.0, kind = %kind, census = %after, "single kind remains");
            }
        }
    }

    /// Clear the population and reseed it from the stored configuration
    /// using `seed`. Resets the frame counter.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.config.seed = seed;
        self.agents.clear();
        self.frame = FrameId(0);
        self.last_metrics = StepMetrics::default();
        self.reseed()
    }

    fn reseed(&mut self) -> Result<(), ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.seed_population(self.config.agents_per_kind, &mut rng)
    }

    /// Paint every agent, in iteration order, with its current kind's sprite.
    pub fn render<C: Canvas>(&self, canvas: &mut C, sprites: &SpriteSheet<C::Sprite>) {
        canvas.clear();
        for agent in &self.agents {
            canvas.blit(sprites.get(agent.kind()), agent.position(), agent.size());
        }
    }

    /// The population, in iteration order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Look up an agent by id.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.0 as usize).filter(|a| a.id() == id)
    }

    /// Population by kind.
    pub fn census(&self) -> Census {
        Census::from_kinds(self.agents.iter().map(Agent::kind))
    }

    /// The only surviving kind, once the other two are extinct.
    pub fn dominant(&self) -> Option<Kind> {
        self.census().dominant()
    }

    /// World extent.
    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    /// Current configuration (including the seed last used).
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Change the pass ordering used by subsequent frames.
    pub fn set_schedule(&mut self, schedule: PassSchedule) {
        self.config.schedule = schedule;
    }

    /// Number of completed frames (0 after construction or reset).
    pub fn current_frame(&self) -> FrameId {
        self.frame
    }

    /// Metrics from the most recent frame.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

/// Borrow `agents[a]` shared and `agents[b]` exclusively. `a != b`.
fn pair_mut(agents: &mut [Agent], a: usize, b: usize) -> (&Agent, &mut Agent) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = agents.split_at_mut(b);
        (&lo[a], &mut hi[0])
    } else {
        let (lo, hi) = agents.split_at_mut(a);
        (&hi[0], &mut lo[b])
    }
}

fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}
