//! Dribble planner CLI
//!
//! Runs one planning tick (or scores one point) against a JSON world
//! snapshot and prints the result as JSON on stdout. Logs go to stderr,
//! filtered by `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dribble_cli::{load_config, load_world, resolve_ball, run_plan, run_score, SamplerOverrides};
use dribble_core::point;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dribble_cli")]
#[command(about = "Pick a dribble target from a world snapshot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample candidates around the ball and pick the best one
    Plan {
        /// World snapshot JSON
        #[arg(long)]
        world: PathBuf,

        /// Planner config JSON (defaults when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Sampler seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Number of candidates
        #[arg(long)]
        samples: Option<usize>,

        /// Sampling radius (m)
        #[arg(long)]
        radius: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        ball_x: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        ball_y: Option<f64>,
    },

    /// Score a single target point
    Score {
        #[arg(long)]
        world: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        #[arg(long, allow_hyphen_values = true)]
        y: f64,

        #[arg(long, allow_hyphen_values = true)]
        ball_x: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        ball_y: Option<f64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { world, config, seed, samples, radius, ball_x, ball_y } => {
            let world = load_world(&world)?;
            let config = load_config(config.as_deref())?;
            let ball = resolve_ball(ball_x, ball_y, &world)?;
            let report = run_plan(&world, config, SamplerOverrides { seed, samples, radius }, ball)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Score { world, config, x, y, ball_x, ball_y } => {
            let world = load_world(&world)?;
            let config = load_config(config.as_deref())?;
            let ball = resolve_ball(ball_x, ball_y, &world)?;
            let breakdown = run_score(&world, &config, point(x, y), ball)?;
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
    }

    Ok(())
}
