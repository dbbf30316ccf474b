//! Gate Flyer headless runner
//!
//! Drives a session with the autopilot at a fixed frame rate and reports the
//! outcome. Useful for soak-testing configurations without a renderer.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use gate_flyer::sim::{Effect, GamePhase, autopilot};
use gate_flyer::{Session, SimulationConfig, Variant};

#[derive(Debug, Parser)]
#[command(name = "gate-flyer", about = "Run a headless autopilot session")]
struct Args {
    /// Obstacle RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Preset to start from (classic, compact)
    #[arg(long, default_value = "classic")]
    variant: String,
    /// JSON file overriding preset fields
    #[arg(long)]
    config: Option<PathBuf>,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,
    /// Simulated display refresh rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let Some(variant) = Variant::from_str(&args.variant) else {
        bail!("unknown variant `{}`", args.variant);
    };
    let preset = variant.config();
    let Some(path) = &args.config else {
        return Ok(preset);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    log::info!(
        "Applying {} over the {} preset",
        path.display(),
        variant.as_str()
    );
    preset
        .with_json_overrides(&text)
        .with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.fps <= 0.0 {
        bail!("--fps must be positive");
    }

    let config = load_config(&args)?;
    let mut session = Session::new(config.clone(), args.seed)?;
    log::info!("Gate Flyer (headless) starting, seed {}", args.seed);

    let frame_ms = 1000.0 / args.fps;
    let frames = (args.seconds * args.fps).ceil() as u64;
    let mut flaps = 0u32;
    let mut milestones = 0u32;
    let mut snapshot = session.tick(0.0);

    for frame in 1..=frames {
        if let Some(event) = autopilot::decide(&snapshot, &config) {
            session.push_input(event);
        }
        snapshot = session.tick(frame as f64 * frame_ms);
        for effect in session.drain_effects() {
            match effect {
                Effect::Flap => flaps += 1,
                Effect::Milestone { score } => {
                    milestones += 1;
                    log::info!("Milestone: {score}");
                }
                Effect::Hit => log::info!("Hit at frame {frame}"),
                Effect::Score { .. } => {}
            }
        }
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!(
            "phase: {:?}  score: {}  flaps: {}  milestones: {}",
            snapshot.phase, snapshot.score, flaps, milestones
        );
    }
    Ok(())
}
