//! coinbot entry point.
//!
//! A small platformer built on:
//! - **bevy_ecs** for the entity-component-system simulation
//! - **raylib** (feature `windowed`) for the window, drawing and audio
//!
//! Without `--windowed` the game runs headless for a fixed number of frames
//! with a scripted input pattern and logs what happened. This is handy for
//! checking a level or a config file without opening a window.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 1200
//! cargo run --release --features windowed -- --windowed
//! ```

// Do not create console on Windows
#![cfg_attr(
    all(target_os = "windows", feature = "windowed"),
    windows_subsystem = "windows"
)]

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use coinbot::events::audio::AudioCmd;
use coinbot::resources::atlas::SpriteAtlas;
use coinbot::resources::gameconfig::GameConfig;
use coinbot::resources::gamestate::GameStates;
use coinbot::resources::input::InputSnapshot;
use coinbot::resources::levelmap::LevelMap;
use coinbot::session::Session;

/// coinbot: collect the coins, dodge what they release.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI file with window and gameplay settings.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level JSON.
    #[arg(long, value_name = "PATH", default_value = "assets/levels/level1.json")]
    level: PathBuf,

    /// Sprite atlas JSON.
    #[arg(long, value_name = "PATH", default_value = "assets/atlas/robot.json")]
    atlas: PathBuf,

    /// Override the random seed from the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file and exit.
    #[arg(long)]
    save_config: bool,

    /// Frames to simulate in headless mode.
    #[arg(long, default_value_t = 1200)]
    frames: u32,

    /// Open a window instead of running headless.
    #[cfg(feature = "windowed")]
    #[arg(long)]
    windowed: bool,
}

/// Scripted input: run right, then left, in a 6 second cycle, jumping once
/// per second, and press restart right after a game over.
fn demo_input(frame: u32, fps: u32, state: GameStates) -> InputSnapshot {
    if state == GameStates::GameOver {
        return InputSnapshot::restart();
    }
    let fps = fps.max(1);
    let t = frame as f32 / fps as f32;
    let mut input = if t % 6.0 < 3.0 {
        InputSnapshot::right()
    } else {
        InputSnapshot::left()
    };
    if frame % fps == 0 {
        input = input.with_jump();
    }
    input
}

fn run_headless(mut session: Session, frames: u32) {
    let fps = session.config().target_fps.max(1);
    let dt = 1.0 / fps as f32;
    let scores = session.subscribe_score();
    let mut game_overs = 0;
    let mut best = 0;
    let mut cues = 0;

    for frame in 0..frames {
        let input = demo_input(frame, fps, session.state());
        let before = session.state();
        for cue in session.tick(input, dt) {
            if let AudioCmd::PlayFx { id } = &cue {
                log::debug!("frame {}: fx '{}'", frame, id);
            }
            cues += 1;
        }
        for score in scores.try_iter() {
            best = best.max(score);
            info!("frame {}: score {}", frame, score);
        }
        if before == GameStates::Running && session.state() == GameStates::GameOver {
            game_overs += 1;
        }
    }

    info!(
        "Simulated {} frames: best score {}, {} game over(s), {} audio cue(s), {} enemies on screen at the end",
        frames,
        best,
        game_overs,
        cues,
        session.enemy_count()
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            error!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let level = match LevelMap::load(&cli.level) {
        Ok(level) => level,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let atlas = match SpriteAtlas::load(&cli.atlas) {
        Ok(atlas) => atlas,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let session = match Session::new(config, &level, atlas) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to start session: {e}");
            std::process::exit(1);
        }
    };

    #[cfg(feature = "windowed")]
    if cli.windowed {
        coinbot::frontend::run(
            session,
            coinbot::frontend::FrontendOptions {
                atlas_texture: Some(cli.atlas.with_extension("png")),
                audio_dir: PathBuf::from("assets/audio"),
            },
        );
        return;
    }

    run_headless(session, cli.frames);
}
