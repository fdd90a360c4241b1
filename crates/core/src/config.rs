//! Session configuration
//!
//! Board dimensions and the optional randomizer seed. Hosts validate a config
//! before handing it to [`crate::GameState::with_config`]; the core treats an
//! invalid one as a programming error.

use std::fmt;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Smallest allowed board side; the I piece needs four columns.
pub const MIN_DIMENSION: u8 = 4;

/// Largest allowed board side.
pub const MAX_DIMENSION: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub cols: u8,
    pub rows: u8,
    /// `None` shuffles from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Default dimensions with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.cols) {
            return Err(ConfigError::Columns(self.cols));
        }
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.rows) {
            return Err(ConfigError::Rows(self.rows));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_WIDTH,
            rows: BOARD_HEIGHT,
            seed: None,
        }
    }
}

/// Why a [`GameConfig`] was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Columns(u8),
    Rows(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Columns(v) => write!(
                f,
                "columns must be within {}..={}, got {}",
                MIN_DIMENSION, MAX_DIMENSION, v
            ),
            ConfigError::Rows(v) => write!(
                f,
                "rows must be within {}..={}, got {}",
                MIN_DIMENSION, MAX_DIMENSION, v
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
