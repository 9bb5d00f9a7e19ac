//! Astro Drift - headless reference driver
//!
//! Runs the autopilot for a fixed number of 60 Hz frames against a
//! recording surface and prints the final world snapshot as JSON.
//!
//! Usage: `astro-drift [FRAMES] [TUNING_JSON]`

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "astro-drift")]
#[command(about = "Run the Astro Drift autopilot headless and print the final snapshot")]
struct Cli {
    /// Number of 60 Hz frames to simulate
    #[arg(default_value_t = 3600)]
    frames: u64,
    /// Tuning overrides as a JSON file
    tuning: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use astro_drift::consts::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, FRAME_DT};
    use astro_drift::renderer::CommandRecorder;
    use astro_drift::sim::FrameInput;
    use astro_drift::{GameEngine, Tuning};

    env_logger::init();
    log::info!("Astro Drift (headless) starting...");

    let cli = Cli::parse();
    let frames = cli.frames;
    let tuning = match cli.tuning {
        Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
            log::warn!("Falling back to default tuning: {}", e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let mut engine = GameEngine::with_tuning(
        CommandRecorder::new(),
        DEFAULT_WIDTH,
        DEFAULT_HEIGHT,
        DEFAULT_SEED,
        tuning,
    );
    engine.start();

    let input = FrameInput {
        demo: true,
        ..Default::default()
    };
    let mut drawn = 0usize;
    for _ in 0..frames {
        engine.step(FRAME_DT, &input);
        // Only the latest frame is kept
        drawn = engine.surface_mut().take().len();
        if engine.is_game_over() {
            break;
        }
    }

    let snapshot = engine.state().snapshot();
    log::info!(
        "Stopped at frame {} with score {} ({} draw calls in last frame)",
        snapshot.frame,
        snapshot.score,
        drawn
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
    engine.dispose();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // A browser host embeds the library and drives GameEngine itself
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["astro-drift"]).unwrap();
        assert_eq!(cli.frames, 3600);
        assert!(cli.tuning.is_none());
    }

    #[test]
    fn test_cli_frames_and_tuning() {
        let cli = Cli::try_parse_from(["astro-drift", "120", "tuning.json"]).unwrap();
        assert_eq!(cli.frames, 120);
        assert_eq!(cli.tuning.as_deref(), Some(std::path::Path::new("tuning.json")));
    }

    #[test]
    fn test_cli_rejects_bad_frame_count() {
        assert!(Cli::try_parse_from(["astro-drift", "many"]).is_err());
        assert!(Cli::try_parse_from(["astro-drift", "-5"]).is_err());
    }
}
