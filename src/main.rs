//! Polybounce headless driver
//!
//! Usage: `polybounce [config.json] [steps] [seed]`
//!
//! Loads a simulation config (or uses the built-in square), advances it a
//! fixed number of steps on a 600x600 frame and prints the final snapshot as
//! JSON. Set `RUST_LOG=debug` to see per-step contact counts.

use std::process::ExitCode;

use polybounce::snapshot::Snapshot;
use polybounce::{FrameSize, GlobalSettings, SimulationConfig, SimulationState, step};

const DEFAULT_STEPS: u64 = 600;
const DEFAULT_SEED: u64 = 12345;
const FRAME_SIDE: f32 = 600.0;

fn load_config(path: Option<&String>) -> Result<SimulationConfig, String> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
            SimulationConfig::from_json(&json).map_err(|e| format!("{path}: {e}"))
        }
        None => Ok(SimulationConfig::default()),
    }
}

fn parse_arg(arg: Option<&String>, default: u64, name: &str) -> Result<u64, String> {
    match arg {
        Some(s) => s.parse().map_err(|_| format!("{name} must be an integer, got '{s}'")),
        None => Ok(default),
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = load_config(args.get(1))?;
    let steps = parse_arg(args.get(2), DEFAULT_STEPS, "steps")?;
    let seed = parse_arg(args.get(3), DEFAULT_SEED, "seed")?;

    let frame = FrameSize::square(FRAME_SIDE);
    let settings = GlobalSettings::default();
    let mut state = SimulationState::seeded(&config, seed).map_err(|e| e.to_string())?;

    log::info!("Running '{}' for {} steps (seed {})", config.name, steps, seed);

    let mut clamped = 0;
    for _ in 0..steps {
        let report = step(&mut state, &config, &settings, frame);
        clamped += report.clamped;
    }

    log::info!(
        "Done: rotation={:.3} energy={:.3} runaway resets={}",
        state.rotation(),
        state.kinetic_energy(),
        clamped
    );

    let json = Snapshot::capture(&state, &config, frame)
        .to_json()
        .map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
