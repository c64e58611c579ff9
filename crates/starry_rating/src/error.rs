//! Error types for starry_rating

use thiserror::Error;

/// Errors raised when a widget mutation or settings file is invalid
///
/// Configuration errors are programmer errors: the widget rejects the
/// mutation and keeps its last valid state.
#[derive(Error, Debug)]
pub enum RatingError {
    /// Star count must be at least one
    #[error("star count must be at least 1, got {0}")]
    InvalidCount(usize),

    /// Star size must be finite and positive in both dimensions
    #[error("star size must be positive, got {width}x{height}")]
    InvalidStarSize { width: f32, height: f32 },

    /// Minimum score must not be negative
    #[error("minimum score must be >= 0, got {0}")]
    NegativeMinScore(f32),

    /// Maximum score must be strictly greater than the minimum
    #[error("maximum score {max} must be greater than minimum score {min}")]
    InvalidRange { min: f32, max: f32 },

    /// NaN or infinite input
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    /// Failed to read a settings file
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a settings file
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for starry_rating operations
pub type Result<T> = std::result::Result<T, RatingError>;

/// Reject NaN and infinities
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RatingError::NonFinite { field, value })
    }
}
