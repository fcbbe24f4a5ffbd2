//! Dribble CLI helpers
//!
//! File loading and the two commands, kept out of `main.rs` so they can be
//! tested without spawning the binary.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dribble_core::{point, DribbleConfig, DribblePlanner, PlanReport, Point, PositionScorer, ScoreBreakdown, World};
use tracing::info;

/// Read a world snapshot from a JSON file
pub fn load_world(path: &Path) -> Result<World> {
    let text = fs::read_to_string(path).with_context(|| format!("reading world file {}", path.display()))?;
    World::from_json(&text).with_context(|| format!("parsing world file {}", path.display()))
}

/// Read and validate a config file, or fall back to defaults
pub fn load_config(path: Option<&Path>) -> Result<DribbleConfig> {
    let Some(path) = path else {
        return Ok(DribbleConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading config file {}", path.display()))?;
    DribbleConfig::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// Explicit ball coordinates win over the snapshot's ball
pub fn resolve_ball(ball_x: Option<f64>, ball_y: Option<f64>, world: &World) -> Result<Point> {
    match (ball_x, ball_y) {
        (Some(x), Some(y)) => Ok(point(x, y)),
        (None, None) => match world.ball {
            Some(ball) => Ok(ball),
            None => bail!("no ball position: pass --ball-x/--ball-y or set \"ball\" in the world file"),
        },
        _ => bail!("--ball-x and --ball-y must be given together"),
    }
}

/// Overrides applied on top of the loaded config
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplerOverrides {
    pub seed: Option<u64>,
    pub samples: Option<usize>,
    pub radius: Option<f64>,
}

impl SamplerOverrides {
    pub fn apply(&self, config: &mut DribbleConfig) {
        if let Some(seed) = self.seed {
            config.sampler.seed = Some(seed);
        }
        if let Some(samples) = self.samples {
            config.sampler.sample_count = samples;
        }
        if let Some(radius) = self.radius {
            config.sampler.max_radius = radius;
        }
    }
}

pub fn run_plan(world: &World, mut config: DribbleConfig, overrides: SamplerOverrides, ball: Point) -> Result<PlanReport> {
    overrides.apply(&mut config);
    let mut planner = DribblePlanner::new(&config).context("invalid planner configuration")?;
    let report = planner.plan_with_report(ball, ball, world);
    match &report.target {
        Some(target) => info!(%target, "planned dribble"),
        None => info!("no dribble target found"),
    }
    Ok(report)
}

pub fn run_score(world: &World, config: &DribbleConfig, position: Point, ball: Point) -> Result<ScoreBreakdown> {
    let scorer = PositionScorer::from_config(config).context("invalid scorer configuration")?;
    Ok(scorer.score_breakdown(position, ball, world))
}
