//! Engine configuration and the single hard-failure path.
//!
//! Invalid construction parameters are the only condition that produces an
//! error value; everything at runtime is a boolean outcome or `game_over`.

use thiserror::Error;

use crate::types::{BASE_FALL_INTERVAL_MS, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest board edge that still fits signed 8-bit cell coordinates.
pub const MAX_BOARD_EDGE: u8 = i8::MAX as u8;

/// Smallest board edge that can fit every 4x4 shape bounding box.
pub const MIN_BOARD_EDGE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be within 4..=127, got {width}x{height}")]
    Dimensions { width: u8, height: u8 },
    #[error("fall interval must be non-zero")]
    FallInterval,
}

/// Construction parameters for [`Engine`](crate::core::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    pub fall_interval_ms: u32,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.width, self.height)?;
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::FallInterval);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fall_interval_ms: BASE_FALL_INTERVAL_MS,
        }
    }
}

/// Shared dimension check used by both `Board` and `EngineConfig`.
pub fn validate_dimensions(width: u8, height: u8) -> Result<(), ConfigError> {
    let in_range = |edge: u8| (MIN_BOARD_EDGE..=MAX_BOARD_EDGE).contains(&edge);
    if !in_range(width) || !in_range(height) {
        return Err(ConfigError::Dimensions { width, height });
    }
    Ok(())
}
