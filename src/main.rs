//! Ramp Ball headless runner
//!
//! Usage: `ramp-ball [config.json] [seed]`
//!
//! Builds a seeded course, drops the ball and streams one JSON frame report
//! per line to stdout until the ball settles.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use glam::Vec2;

use ramp_ball::course::generate_course;
use ramp_ball::{Session, SimulationConfig, format_elapsed};

/// Ramps in the demo course
const COURSE_RAMPS: usize = 4;
/// Where the demo ball is dropped from
const LAUNCH_POSITION: Vec2 = Vec2::new(300.0, 100.0);
/// Give up after this many frames (about a minute of simulated time)
const MAX_FRAMES: u64 = 3600;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => SimulationConfig::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            return ExitCode::FAILURE;
        }
        None => 0,
    };

    match run(config, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: SimulationConfig, seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Ramp Ball (headless) starting with seed {}", seed);

    let mut session = Session::new(config)?;
    for ramp in generate_course(seed, &config.boundary, COURSE_RAMPS) {
        session.add_obstacle(ramp)?;
    }

    let path = session.launch(LAUNCH_POSITION)?;
    log::info!(
        "Forecast: {} points{}",
        path.len(),
        if path.is_truncated() { " (horizon reached)" } else { "" }
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut last = None;
    for _ in 0..MAX_FRAMES {
        let report = session.on_frame();
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
        last = Some(report);
        if report.at_rest {
            break;
        }
    }
    out.flush()?;

    match last {
        Some(report) if report.at_rest => log::info!(
            "Ball settled at ({:.1}, {:.1}) after {} frames, time {}",
            report.position.x,
            report.position.y,
            report.frame,
            format_elapsed(report.elapsed_ms)
        ),
        Some(report) => log::warn!(
            "Ball still moving after {} frames at ({:.1}, {:.1})",
            report.frame,
            report.position.x,
            report.position.y
        ),
        None => {}
    }

    Ok(())
}
