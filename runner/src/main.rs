use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use micromouse::sim::{SimMaze, SimulatedMouse};
use micromouse::{run, NavigatorConfig, RobotState, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Drive a simulated micromouse from its start cell to the goal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Maze drawing to run in; a random maze is carved if omitted
    #[arg(short, long)]
    maze: Option<PathBuf>,

    /// Seed for the carved maze
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// TOML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured strategy: flood-fill or frontier
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Override the configured tick budget
    #[arg(long)]
    max_ticks: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => NavigatorConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => NavigatorConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(max_ticks) = args.max_ticks {
        config.max_ticks = max_ticks;
    }

    let truth = match &args.maze {
        Some(path) => {
            let drawing = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            SimMaze::from_ascii(&drawing).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimMaze::carve(config.dims()?, &mut StdRng::seed_from_u64(args.seed)),
    };
    // the mouse is told the size of the maze it is in, nothing else
    (config.width, config.height) = (truth.dims().0.get(), truth.dims().1.get());
    config.validate().context("config does not fit the maze")?;

    info!(width = config.width, height = config.height, strategy = ?config.strategy, "starting run");
    println!("{truth}");

    let mut mouse = SimulatedMouse::new(truth, RobotState { location: config.start, heading: config.heading });
    let mut navigator = config.navigator(&mut mouse)?;
    let outcome = run(navigator.as_mut(), config.max_ticks);

    println!("{}", navigator.maze());
    let report = outcome.context("navigation failed")?;
    println!(
        "{} after {} ticks, {} cells driven, {} recomputes",
        if report.arrived { "arrived" } else { "gave up" },
        report.ticks,
        report.cells,
        report.recomputes,
    );

    Ok(())
}
