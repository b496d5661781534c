//! Game configuration resource.
//!
//! Manages gameplay and window settings loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 608
//! target_fps = 60
//!
//! [physics]
//! gravity = 290
//!
//! [player]
//! speed = 150
//! jump_velocity = -300
//! bounce = 0
//!
//! [coins]
//! count = 12
//! base_offset = 12
//! span = 770
//! bounce_min = 0.4
//! bounce_max = 0.8
//! jitter_vx = 10
//!
//! [enemies]
//! speed = 200
//! drop_velocity = 20
//!
//! [session]
//! seed = 1234
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 608;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_GRAVITY: f32 = 290.0;
const DEFAULT_PLAYER_SPEED: f32 = 150.0;
const DEFAULT_JUMP_VELOCITY: f32 = -300.0;
const DEFAULT_PLAYER_BOUNCE: f32 = 0.5;
const DEFAULT_COIN_COUNT: u32 = 12;
const DEFAULT_COIN_BASE_OFFSET: f32 = 12.0;
const DEFAULT_COIN_SPAN: f32 = 770.0;
const DEFAULT_COIN_BOUNCE_MIN: f32 = 0.4;
const DEFAULT_COIN_BOUNCE_MAX: f32 = 0.8;
const DEFAULT_COIN_JITTER_VX: f32 = 10.0;
const DEFAULT_ENEMY_SPEED: f32 = 200.0;
const DEFAULT_ENEMY_DROP_VELOCITY: f32 = 20.0;
const DEFAULT_SEED: u64 = 0x5EED;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings and every gameplay tunable. Values missing from
/// the INI file keep their defaults.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Downward acceleration applied to every body, px/s².
    pub gravity: f32,
    /// Horizontal speed while a direction is held, px/s.
    pub player_speed: f32,
    /// Vertical velocity set by a jump (negative is up), px/s.
    pub jump_velocity: f32,
    /// Restitution of the player against platforms and the level edges.
    pub player_bounce: f32,
    pub coin_count: u32,
    /// X of the leftmost coin.
    pub coin_base_offset: f32,
    /// Horizontal distance between the first and the last coin.
    pub coin_span: f32,
    pub coin_bounce_min: f32,
    pub coin_bounce_max: f32,
    /// Initial coin vx is uniform in `[-coin_jitter_vx, coin_jitter_vx]`.
    pub coin_jitter_vx: f32,
    /// Enemy vx is uniform in `[-enemy_speed, enemy_speed]`.
    pub enemy_speed: f32,
    pub enemy_drop_velocity: f32,
    /// Seed of the session random source.
    pub seed: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            gravity: DEFAULT_GRAVITY,
            player_speed: DEFAULT_PLAYER_SPEED,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            player_bounce: DEFAULT_PLAYER_BOUNCE,
            coin_count: DEFAULT_COIN_COUNT,
            coin_base_offset: DEFAULT_COIN_BASE_OFFSET,
            coin_span: DEFAULT_COIN_SPAN,
            coin_bounce_min: DEFAULT_COIN_BOUNCE_MIN,
            coin_bounce_max: DEFAULT_COIN_BOUNCE_MAX,
            coin_jitter_vx: DEFAULT_COIN_JITTER_VX,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            enemy_drop_velocity: DEFAULT_ENEMY_DROP_VELOCITY,
            seed: DEFAULT_SEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, gravity={}, coins={}, seed={}",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.gravity,
            self.coin_count,
            self.seed
        );
        Ok(())
    }

    /// Parse configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [window] section
        if let Some(width) = uint("window", "width") {
            self.window_width = width as u32;
        }
        if let Some(height) = uint("window", "height") {
            self.window_height = height as u32;
        }
        if let Some(fps) = uint("window", "target_fps") {
            self.target_fps = fps as u32;
        }

        // [physics] section
        if let Some(gravity) = float("physics", "gravity") {
            self.gravity = gravity;
        }

        // [player] section
        if let Some(speed) = float("player", "speed") {
            self.player_speed = speed;
        }
        if let Some(jump) = float("player", "jump_velocity") {
            self.jump_velocity = jump;
        }
        if let Some(bounce) = float("player", "bounce") {
            self.player_bounce = bounce;
        }

        // [coins] section
        if let Some(count) = uint("coins", "count") {
            self.coin_count = count as u32;
        }
        if let Some(offset) = float("coins", "base_offset") {
            self.coin_base_offset = offset;
        }
        if let Some(span) = float("coins", "span") {
            self.coin_span = span;
        }
        if let Some(min) = float("coins", "bounce_min") {
            self.coin_bounce_min = min;
        }
        if let Some(max) = float("coins", "bounce_max") {
            self.coin_bounce_max = max;
        }
        if let Some(jitter) = float("coins", "jitter_vx") {
            self.coin_jitter_vx = jitter;
        }

        // [enemies] section
        if let Some(speed) = float("enemies", "speed") {
            self.enemy_speed = speed;
        }
        if let Some(drop) = float("enemies", "drop_velocity") {
            self.enemy_drop_velocity = drop;
        }

        // [session] section
        if let Some(seed) = uint("session", "seed") {
            self.seed = seed;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set(
            "player",
            "jump_velocity",
            Some(self.jump_velocity.to_string()),
        );
        config.set("player", "bounce", Some(self.player_bounce.to_string()));
        config.set("coins", "count", Some(self.coin_count.to_string()));
        config.set(
            "coins",
            "base_offset",
            Some(self.coin_base_offset.to_string()),
        );
        config.set("coins", "span", Some(self.coin_span.to_string()));
        config.set(
            "coins",
            "bounce_min",
            Some(self.coin_bounce_min.to_string()),
        );
        config.set(
            "coins",
            "bounce_max",
            Some(self.coin_bounce_max.to_string()),
        );
        config.set("coins", "jitter_vx", Some(self.coin_jitter_vx.to_string()));
        config.set("enemies", "speed", Some(self.enemy_speed.to_string()));
        config.set(
            "enemies",
            "drop_velocity",
            Some(self.enemy_drop_velocity.to_string()),
        );
        config.set("session", "seed", Some(self.seed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gameplay_constants() {
        let config = GameConfig::new();
        assert_eq!(config.coin_count, 12);
        assert_eq!(config.player_speed, 150.0);
        assert_eq!(config.jump_velocity, -300.0);
        assert_eq!(config.player_bounce, 0.5);
        assert_eq!(config.coin_bounce_min, 0.4);
        assert_eq!(config.coin_bounce_max, 0.8);
        assert_eq!(config.coin_jitter_vx, 10.0);
        assert_eq!(config.enemy_speed, 200.0);
        assert_eq!(config.enemy_drop_velocity, 20.0);
    }

    #[test]
    fn load_from_str_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[coins]\ncount = 5\n\n[physics]\ngravity = 500.5\n\n[session]\nseed = 42\n",
            )
            .unwrap();
        assert_eq!(config.coin_count, 5);
        assert_eq!(config.gravity, 500.5);
        assert_eq!(config.seed, 42);
        assert_eq!(config.player_speed, DEFAULT_PLAYER_SPEED);
        assert_eq!(config.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[coins]\ncount = lots\n")
            .unwrap();
        assert_eq!(config.coin_count, DEFAULT_COIN_COUNT);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.coin_count, DEFAULT_COIN_COUNT);
    }

    #[test]
    fn save_then_load_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("coinbot-config-{}.ini", std::process::id()));
        let mut saved = GameConfig::with_path(&path);
        saved.coin_count = 7;
        saved.seed = 99;
        saved.player_bounce = 0.25;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.coin_count, 7);
        assert_eq!(loaded.seed, 99);
        assert_eq!(loaded.player_bounce, 0.25);
        assert_eq!(loaded.jump_velocity, saved.jump_velocity);
    }
}
