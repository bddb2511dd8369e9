//! Configuration errors raised when building a playfield.

use crate::types::{MIN_HEIGHT, MIN_WIDTH};

/// Invalid field setup. Fatal for the session being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum width is {min}, got {width}")]
    WidthTooSmall { width: usize, min: usize },

    #[error("minimum height is {min}, got {height}")]
    HeightTooSmall { height: usize, min: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Check field dimensions against the minimums
pub fn validate_dimensions(width: usize, height: usize) -> Result<(), ConfigError> {
    if width < MIN_WIDTH {
        return Err(ConfigError::WidthTooSmall {
            width,
            min: MIN_WIDTH,
        });
    }
    if height < MIN_HEIGHT {
        return Err(ConfigError::HeightTooSmall {
            height,
            min: MIN_HEIGHT,
        });
    }
    Ok(())
}
