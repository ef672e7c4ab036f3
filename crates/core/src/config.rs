//! Engine configuration.
//!
//! Read once at startup from `TETRIS_*` environment variables. A variable that
//! is not set falls back to its default; a variable that is set but cannot be
//! used is an error, so a typo never silently turns into a default.

use crate::rng::Randomizer;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_DROP_INTERVAL_MS, MIN_BOARD_SIDE};

pub const ENV_DROP_SPEED: &str = "TETRIS_DROP_SPEED";
pub const ENV_BOARD_WIDTH: &str = "TETRIS_BOARD_WIDTH";
pub const ENV_BOARD_HEIGHT: &str = "TETRIS_BOARD_HEIGHT";
pub const ENV_SEED: &str = "TETRIS_SEED";
pub const ENV_RANDOMIZER: &str = "TETRIS_RANDOMIZER";

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("drop interval must be greater than zero")]
    ZeroDropInterval,
    #[error("board {width}x{height} is too small (each side must be at least {min})")]
    BoardTooSmall { width: u8, height: u8, min: u8 },
    #[error("invalid value {value:?} for {var}")]
    InvalidVar { var: &'static str, value: String },
}

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Gravity interval; fixed for the whole session.
    pub drop_interval_ms: u64,
    pub board_width: u8,
    pub board_height: u8,
    pub seed: u32,
    pub randomizer: Randomizer,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            seed: 1,
            randomizer: Randomizer::Uniform,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            drop_interval_ms: parse_var(&lookup, ENV_DROP_SPEED)?.unwrap_or(defaults.drop_interval_ms),
            board_width: parse_var(&lookup, ENV_BOARD_WIDTH)?.unwrap_or(defaults.board_width),
            board_height: parse_var(&lookup, ENV_BOARD_HEIGHT)?.unwrap_or(defaults.board_height),
            seed: parse_var(&lookup, ENV_SEED)?.unwrap_or(defaults.seed),
            randomizer: match lookup(ENV_RANDOMIZER) {
                Some(value) => Randomizer::from_str(&value).ok_or(ConfigError::InvalidVar {
                    var: ENV_RANDOMIZER,
                    value,
                })?,
                None => defaults.randomizer,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.board_width < MIN_BOARD_SIDE || self.board_height < MIN_BOARD_SIDE {
            return Err(ConfigError::BoardTooSmall {
                width: self.board_width,
                height: self.board_height,
                min: MIN_BOARD_SIDE,
            });
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { var, value }),
    }
}
