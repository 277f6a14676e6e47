use orbits::{bench_simulators, Scenario, ScenarioConfig};
use orbits::presentation::clock::format_duration;
use orbits::presentation::palette::body_color;
use orbits::presentation::scaling::{log_scaled_location, log_scaled_radius, scaled_location, scaled_radius};

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Screen half-size the position summaries are scaled to
const SCREEN_EXTENT: f64 = 400.0;
/// Display radius range for catalog bodies, in pixels
const MIN_DISPLAY_RADIUS: f64 = 2.0;
const MAX_DISPLAY_RADIUS: f64 = 20.0;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "sol.yaml")]
    file_name: String,

    /// Time direct vs mesh steps instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// Report screen positions and sizes on a linear instead of a square-root scale
    #[arg(long)]
    linear: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("cannot open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("cannot parse {}", config_path.display()))?;

    log::debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn report(scenario: &Scenario, tick: u64, tick_ms: f64, linear: bool) {
    let bodies = scenario.simulator.bodies();
    let total_mass: f64 = bodies.iter().map(|b| b.mass()).sum();
    let com = bodies.iter().fold(orbits::NVec2::zeros(), |acc, b| acc + b.position() * b.mass()) / total_mass.max(f64::MIN_POSITIVE);

    let elapsed = if scenario.engine.uses_si_units() {
        format_duration(scenario.t as u64)
    } else {
        format!("{:.2} units", scenario.t)
    };

    log::info!(
        "tick {tick}: t = {elapsed}, {:.3} ms/tick, {} bodies, total mass {:.3e}, center of mass ({:.3e}, {:.3e})",
        tick_ms,
        bodies.len(),
        total_mass,
        com.x,
        com.y
    );

    for (body, name) in bodies.iter().zip(scenario.names.iter()) {
        if let Some(name) = name {
            let (screen, radius) = if linear {
                (
                    scaled_location(body.position(), SCREEN_EXTENT),
                    scaled_radius(body.radius(), MIN_DISPLAY_RADIUS, MAX_DISPLAY_RADIUS),
                )
            } else {
                (
                    log_scaled_location(body.position(), SCREEN_EXTENT),
                    log_scaled_radius(body.radius(), MIN_DISPLAY_RADIUS, MAX_DISPLAY_RADIUS),
                )
            };
            let c = body_color(name);
            log::info!(
                "  {name:>8}: screen ({:7.1}, {:7.1}) r {:5.1}px #{:02x}{:02x}{:02x}",
                screen.x,
                screen.y,
                radius,
                c.r,
                c.g,
                c.b
            );
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.bench {
        return bench_simulators();
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("failed to build scenario")?;

    log::info!(
        "running {:?} simulator with {} bodies for {} ticks",
        scenario.engine.simulator,
        scenario.simulator.len(),
        scenario.parameters.ticks
    );

    for tick in 1..=scenario.parameters.ticks {
        let t0 = Instant::now();
        scenario.tick();
        let tick_ms = t0.elapsed().as_secs_f64() * 1000.0;

        if tick % scenario.parameters.report_every == 0 || tick == scenario.parameters.ticks {
            report(&scenario, tick, tick_ms, args.linear);
        }
    }

    Ok(())
}
