//! Geometry and tuning constants.
//!
//! All values are in field pixels (or pixels per frame). Any subset can be
//! overridden from a RON file; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── Sections ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: i32,
    pub height: i32,
    pub start_x: i32,
    /// Also the row aliens must not reach.
    pub start_y: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 90,
            height: 40,
            start_x: 200,
            start_y: 450,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub width: i32,
    pub height: i32,
    /// Upward travel per frame.
    pub speed: i32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            speed: 23,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub alien_width: i32,
    pub alien_height: i32,
    pub spacing: i32,
    pub origin_x: i32,
    pub origin_y: i32,
    pub initial_columns: u32,
    pub initial_rows: u32,
    /// Horizontal formation speed per frame.
    pub alien_speed: i32,
    /// Vertical step applied on every bounce.
    pub drop_step: i32,
    pub points_per_kill: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            alien_width: 40,
            alien_height: 40,
            spacing: 10,
            origin_x: 39,
            origin_y: 20,
            initial_columns: 5,
            initial_rows: 3,
            alien_speed: 3,
            drop_step: 20,
            points_per_kill: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Arrow-key move distance.
    pub keyboard_step: i32,
    /// Button-pad (a / d) move distance.
    pub button_step: i32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            keyboard_step: 25,
            button_step: 10,
        }
    }
}

// ── Root ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub player: PlayerConfig,
    pub bullet: BulletConfig,
    pub wave: WaveConfig,
    pub controls: ControlsConfig,
    /// Target wall-clock length of one frame.
    pub frame_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            player: PlayerConfig::default(),
            bullet: BulletConfig::default(),
            wave: WaveConfig::default(),
            controls: ControlsConfig::default(),
            frame_millis: 16,
        }
    }
}

impl GameConfig {
    /// Read, parse and validate a RON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate RON text that did not come from a file.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Rejects values that would make clamping or frame pacing meaningless.
    /// Odd-but-consistent geometry (a wave wider than the field, say) passes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field.width", self.field.width),
            ("field.height", self.field.height),
            ("player.width", self.player.width),
            ("player.height", self.player.height),
            ("bullet.width", self.bullet.width),
            ("bullet.height", self.bullet.height),
            ("wave.alien_width", self.wave.alien_width),
            ("wave.alien_height", self.wave.alien_height),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("bullet.speed", self.bullet.speed),
            ("wave.alien_speed", self.wave.alien_speed),
            ("wave.drop_step", self.wave.drop_step),
            ("wave.spacing", self.wave.spacing),
            ("controls.keyboard_step", self.controls.keyboard_step),
            ("controls.button_step", self.controls.button_step),
        ];
        for (name, value) in non_negative {
            if value < 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if self.player.width > self.field.width {
            return Err(ConfigError::Invalid(format!(
                "player.width {} exceeds field.width {}",
                self.player.width, self.field.width
            )));
        }
        if !(0..=self.player_max_x()).contains(&self.player.start_x) {
            return Err(ConfigError::Invalid(format!(
                "player.start_x {} outside [0, {}]",
                self.player.start_x,
                self.player_max_x()
            )));
        }
        if self.frame_millis == 0 {
            return Err(ConfigError::Invalid("frame_millis must be positive".into()));
        }
        Ok(())
    }

    /// Largest x the player may occupy.
    pub fn player_max_x(&self) -> i32 {
        self.field.width - self.player.width
    }
}
