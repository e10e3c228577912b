//! Triad CLI - headless runner for cyclic-dominance simulations.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use triad_core::Bounds;
use triad_engine::{PassSchedule, World, WorldConfig};

#[derive(Parser, Debug)]
#[command(name = "triad")]
#[command(author, version, about = "Triad - rock, paper, scissors agent simulation", long_about = None)]
struct Cli {
    /// World width
    #[arg(long, default_value = "800")]
    width: f64,

    /// World height
    #[arg(long, default_value = "600")]
    height: f64,

    /// Agents seeded for each kind
    #[arg(short = 'n', long, default_value = "10")]
    per_kind: usize,

    /// Agent size (clamp margin and contact radius)
    #[arg(long, default_value = "40")]
    size: f64,

    /// Per-axis step distance per frame
    #[arg(long, default_value = "2")]
    speed: f64,

    /// Seed for initial placement
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Maximum number of frames to run
    #[arg(short, long, default_value = "10000")]
    frames: u64,

    /// Log a census every N frames (0 = only at the end)
    #[arg(short, long, default_value = "500")]
    report_every: u64,

    /// Move and interact one agent at a time (legacy update order)
    #[arg(long)]
    interleaved: bool,
}

impl Cli {
    fn config(&self) -> WorldConfig {
        WorldConfig {
            bounds: Bounds::new(self.width, self.height),
            agents_per_kind: self.per_kind,
            agent_size: self.size,
            agent_speed: self.speed,
            seed: self.seed,
            schedule: if self.interleaved {
                PassSchedule::Interleaved
            } else {
                PassSchedule::Phased
            },
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut world = World::new(cli.config()).context("invalid world configuration")?;

    info!(
        width = cli.width,
        height = cli.height,
        agents = world.agents().len(),
        seed = cli.seed,
        schedule = ?world.config().schedule,
        "starting simulation"
    );

    let mut conversions = 0u64;
    while world.current_frame().0 < cli.frames {
        let metrics = world.step().clone();
        conversions += u64::from(metrics.conversions);
        let frame = world.current_frame().0;
        if cli.report_every > 0 && frame % cli.report_every == 0 {
            info!(frame, census = %metrics.census, step_us = metrics.total_us, "progress");
        }
        if world.dominant().is_some() {
            break;
        }
    }

    match world.dominant() {
        Some(kind) => info!(
            frame = world.current_frame().0,
            winner = %kind,
            conversions,
            "simulation finished"
        ),
        None => warn!(
            frame = world.current_frame().0,
            census = %world.census(),
            conversions,
            "frame budget exhausted without a winner"
        ),
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
