//! Game configuration
//!
//! A single struct of tunable constants. Defaults match the shipped game;
//! a JSON file may override any subset of fields (camelCase keys).

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors raised while loading a configuration file
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(std::io::Error),
    /// The contents are not valid JSON for `GameConfig`
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid config field `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Y coordinate of the ground line (entities stand on it)
    pub ground_y: f32,
    /// Width of the visible playfield; zombies spawn past its right edge
    pub playfield_width: f32,
    /// Fixed tick length in milliseconds
    pub tick_interval_ms: u64,
    /// Ticks between shots
    pub cooldown_ticks: u32,
    /// Zombies in wave 1
    pub initial_wave_size: u32,
    /// Extra zombies added per wave
    pub wave_increment: u32,
    /// Projectile travel per tick (rightward)
    pub projectile_speed: f32,
    /// Player travel per tick while a direction is held
    pub player_move_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ground_y: 800.0,
            playfield_width: 1060.0,
            tick_interval_ms: 16,
            cooldown_ticks: 45,
            initial_wave_size: 5,
            wave_increment: 5,
            projectile_speed: 10.0,
            player_move_speed: 6.0,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would stall or invert the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        if !(self.playfield_width > 0.0) {
            return invalid("playfieldWidth", "must be positive");
        }
        if !self.ground_y.is_finite() {
            return invalid("groundY", "must be finite");
        }
        if self.tick_interval_ms == 0 {
            return invalid("tickIntervalMs", "must be at least 1");
        }
        if self.initial_wave_size == 0 {
            return invalid("initialWaveSize", "must be at least 1");
        }
        if !(self.projectile_speed > 0.0) {
            return invalid("projectileSpeed", "must be positive");
        }
        if !(self.player_move_speed > 0.0) {
            return invalid("playerMoveSpeed", "must be positive");
        }
        Ok(())
    }

    /// Tick length as a `Duration`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.ground_y, 800.0);
        assert_eq!(config.playfield_width, 1060.0);
        assert_eq!(config.tick_interval(), Duration::from_millis(16));
        assert_eq!(config.cooldown_ticks, 45);
        assert_eq!(config.initial_wave_size, 5);
        assert_eq!(config.wave_increment, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "cooldownTicks": 10, "groundY": 600 }"#)
            .expect("valid config");
        assert_eq!(config.cooldown_ticks, 10);
        assert_eq!(config.ground_y, 600.0);
        assert_eq!(config.initial_wave_size, 5);
        assert_eq!(config.projectile_speed, 10.0);
    }

    #[test]
    fn test_all_recognized_fields() {
        let json = r#"{
            "groundY": 500,
            "playfieldWidth": 800,
            "tickIntervalMs": 33,
            "cooldownTicks": 20,
            "initialWaveSize": 3,
            "waveIncrement": 2,
            "projectileSpeed": 12.5,
            "playerMoveSpeed": 4
        }"#;
        let config = GameConfig::from_json_str(json).expect("valid config");
        assert_eq!(
            config,
            GameConfig {
                ground_y: 500.0,
                playfield_width: 800.0,
                tick_interval_ms: 33,
                cooldown_ticks: 20,
                initial_wave_size: 3,
                wave_increment: 2,
                projectile_speed: 12.5,
                player_move_speed: 4.0,
            }
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_json_str(r#"{ "initialWaveSize": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "initialWaveSize",
                ..
            }
        ));

        let err = GameConfig::from_json_str(r#"{ "tickIntervalMs": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("tickIntervalMs"));

        let err = GameConfig::from_json_str(r#"{ "initialWaveSize": 0, "waveIncrement": 0 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("initialWaveSize"));

        let err = GameConfig::from_json_str(r#"{ "projectileSpeed": -1 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "projectileSpeed",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here/zombie.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
