//! Game tuning loaded from JSON
//!
//! Every field has a built-in default, so a config file only needs the values
//! it wants to change:
//!
//! ```json
//! { "round": { "duration_secs": 30 }, "physics": { "debug": true } }
//! ```
//!
//! Lookup order: `<user config dir>/rockfall/game.json`, then
//! `assets/config/game.json`, then the defaults.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub round: RoundConfig,
    pub rocks: RockConfig,
    pub jet: JetConfig,
    pub bullet: BulletConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps_cap: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Rockfall".to_string(),
            width: 500,
            height: 888,
            fps_cap: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in px/s² for bodies with gravity enabled
    pub gravity_y: f32,
    /// Draw hitboxes on startup (toggle in game with B)
    pub debug: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity_y: 300.0,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub duration_secs: i32,
    pub restart_delay_ms: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        RoundConfig {
            duration_secs: 120,
            restart_delay_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RockConfig {
    pub wave_interval_ms: u64,
    pub per_wave: u32,
    /// Each rock of a wave spawns after a random delay in `0..=spawn_jitter_ms`
    pub spawn_jitter_ms: u64,
    pub spawn_x_min: i32,
    pub spawn_x_max: i32,
    pub spawn_y: f32,
    pub initial_speed: f32,
    /// Added to the fall speed of new rocks every countdown second
    pub speed_step: f32,
    /// Horizontal velocity range is `-drift_x..=drift_x`
    pub drift_x: i32,
    /// Angular velocity range in degrees/s is `-spin..=spin`
    pub spin: i32,
    pub hp: i32,
}

impl Default for RockConfig {
    fn default() -> Self {
        RockConfig {
            wave_interval_ms: 1500,
            per_wave: 5,
            spawn_jitter_ms: 500,
            spawn_x_min: 50,
            spawn_x_max: 450,
            spawn_y: -50.0,
            initial_speed: 100.0,
            speed_step: 2.0,
            drift_x: 150,
            spin: 200,
            hp: 3,
        }
    }
}

/// Hitbox override, measured from the top-left corner of the sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitboxConfig {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JetConfig {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub hitbox: HitboxConfig,
}

impl Default for JetConfig {
    fn default() -> Self {
        JetConfig {
            x: 230.0,
            y: 800.0,
            speed: 400.0,
            hitbox: HitboxConfig {
                width: 50.0,
                height: 80.0,
                offset_x: 66.0,
                offset_y: 10.0,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub speed: f32,
    pub scale: f32,
    /// Bullets spawn this far above the jet's centre
    pub muzzle_offset: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        BulletConfig {
            speed: 600.0,
            scale: 0.5,
            muzzle_offset: 40.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub music_volume: f32,
    pub effects_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            music_volume: 0.5,
            effects_volume: 0.5,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but would break the game at runtime, such
    /// as an empty random range for rock spawns.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.window.fps_cap == 0 {
            return invalid("window.fps_cap must be at least 1".to_string());
        }

        let rocks = &self.rocks;
        if rocks.spawn_x_min > rocks.spawn_x_max {
            return invalid(format!(
                "rocks.spawn_x_min ({}) is greater than rocks.spawn_x_max ({})",
                rocks.spawn_x_min, rocks.spawn_x_max
            ));
        }
        if rocks.drift_x < 0 {
            return invalid(format!("rocks.drift_x must not be negative, got {}", rocks.drift_x));
        }
        if rocks.spin < 0 {
            return invalid(format!("rocks.spin must not be negative, got {}", rocks.spin));
        }

        Ok(())
    }

    /// Loads the first config file found, or the defaults if there is none.
    ///
    /// Returns the path that was used so the caller can report it.
    pub fn load() -> Result<(Self, Option<PathBuf>), GameError> {
        for path in Self::candidate_paths() {
            if path.exists() {
                let config = Self::load_from_file(&path)?;
                return Ok((config, Some(path)));
            }
        }
        Ok((GameConfig::default(), None))
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("rockfall").join("game.json"));
        }
        paths.push(PathBuf::from(DEFAULT_CONFIG_PATH));
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rockfall_{}_{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_arcade_round() {
        let config = GameConfig::default();
        assert_eq!(config.window.width, 500);
        assert_eq!(config.window.height, 888);
        assert_eq!(config.physics.gravity_y, 300.0);
        assert_eq!(config.round.duration_secs, 120);
        assert_eq!(config.rocks.per_wave, 5);
        assert_eq!(config.rocks.hp, 3);
        assert_eq!(config.jet.hitbox.offset_x, 66.0);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_file(
            "partial.json",
            r#"{ "round": { "duration_secs": 30 }, "physics": { "debug": true } }"#,
        );
        let config = GameConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.round.duration_secs, 30);
        assert_eq!(config.round.restart_delay_ms, 3000);
        assert!(config.physics.debug);
        assert_eq!(config.physics.gravity_y, 300.0);
        assert_eq!(config.bullet.speed, 600.0);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let path = temp_file("broken.json", "{ round: ");
        let result = GameConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(GameError::Config(_))));
    }

    fn assert_rejected(name: &str, contents: &str, field: &str) {
        let path = temp_file(name, contents);
        let result = GameConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        match result {
            Err(GameError::InvalidConfig(msg)) => assert!(msg.contains(field), "{}", msg),
            other => panic!("expected InvalidConfig for {}, got {:?}", field, other.map(|_| ())),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_spawn_range_rejected() {
        assert_rejected(
            "inverted_x.json",
            r#"{ "rocks": { "spawn_x_min": 400, "spawn_x_max": 100 } }"#,
            "spawn_x_min",
        );
    }

    #[test]
    fn test_negative_drift_rejected() {
        assert_rejected("drift.json", r#"{ "rocks": { "drift_x": -10 } }"#, "drift_x");
    }

    #[test]
    fn test_negative_spin_rejected() {
        assert_rejected("spin.json", r#"{ "rocks": { "spin": -1 } }"#, "spin");
    }

    #[test]
    fn test_zero_fps_cap_rejected() {
        assert_rejected("fps.json", r#"{ "window": { "fps_cap": 0 } }"#, "fps_cap");
    }

    #[test]
    fn test_zero_window_size_rejected() {
        assert_rejected("size.json", r#"{ "window": { "width": 0 } }"#, "window size");
    }

    #[test]
    fn test_equal_spawn_bounds_allowed() {
        let mut config = GameConfig::default();
        config.rocks.spawn_x_min = 250;
        config.rocks.spawn_x_max = 250;
        config.rocks.drift_x = 0;
        config.rocks.spin = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shipped_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
        let config = GameConfig::load_from_file(path).unwrap();
        assert_eq!(config.window.title, "Rockfall");
        assert_eq!(config.rocks.wave_interval_ms, 1500);
        assert_eq!(config.jet.hitbox.height, 80.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameConfig::load_from_file("/nonexistent/rockfall/game.json");
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
