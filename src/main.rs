//! Bounce Square entry point
//!
//! Parses flags, loads settings, and runs either the native window or a
//! headless simulation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bounce_square::consts::EXIT_INIT_FAILURE;
use bounce_square::settings::DEFAULT_CONFIG_FILE;
use bounce_square::surface::{DisplaySurface, HeadlessSurface};
use bounce_square::{RandomSource, Settings, Simulation, platform};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON settings file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Fixed RNG seed for a reproducible start
    #[arg(long)]
    seed: Option<u64>,

    /// Initial window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Run this many frames without a window, then print the final state
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(width) = self.width {
            settings.window_width = width;
        }
        if let Some(height) = self.height {
            settings.window_height = height;
        }
    }
}

fn run_headless(settings: &Settings, mut rng: RandomSource, frames: u64) {
    let mut surface = HeadlessSurface::new(
        i32::try_from(settings.window_width).unwrap_or(i32::MAX),
        i32::try_from(settings.window_height).unwrap_or(i32::MAX),
    )
    .with_frame_limit(frames);

    let mut sim = Simulation::spawn(&mut rng, surface.size(), settings);
    sim.run(&mut surface);

    match serde_json::to_string(sim.state()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Couldn't serialize final state: {e}"),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Bounce Square starting...");

    let args = Args::parse();
    let mut settings = Settings::load(&args.config);
    args.apply(&mut settings);
    let settings = settings.sanitized();

    let rng = match settings.seed {
        Some(seed) => RandomSource::with_seed(seed),
        None => RandomSource::from_entropy(),
    };
    log::info!("RNG seed: {}", rng.seed());

    if let Some(frames) = args.headless {
        run_headless(&settings, rng, frames);
        return ExitCode::SUCCESS;
    }

    match platform::run(settings, rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Couldn't create window and renderer: {e}");
            ExitCode::from(EXIT_INIT_FAILURE)
        }
    }
}
