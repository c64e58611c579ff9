//! Widget configuration
//!
//! [`RatingConfig`] describes the star row (how many stars, how big, how far
//! apart, and how selections snap). [`ScoreRange`] describes the score scale
//! the row maps onto. Both validate on construction and on every mutation.

use serde::{Deserialize, Serialize};
use starry_core::Size;

use crate::error::{ensure_finite, RatingError, Result};

/// Default number of stars
pub const DEFAULT_COUNT: usize = 5;
/// Default star edge length in pixels
pub const DEFAULT_STAR_SIZE: f32 = 24.0;
/// Default gap between stars (and before the first / after the last)
pub const DEFAULT_SPACING: f32 = 5.0;
/// Default maximum score
pub const DEFAULT_MAX_SCORE: f32 = 5.0;

/// How a selection snaps to stars
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingType {
    /// Whole stars only
    Whole,
    /// Half-star granularity
    Half,
    /// Continuous, no snapping
    #[default]
    Unlimited,
}

/// Star row geometry and rating mode
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingConfig {
    count: usize,
    star_size: Size,
    spacing: f32,
    rating_type: RatingType,
}

impl RatingConfig {
    /// Create a validated configuration
    ///
    /// Negative spacing is clamped to zero.
    pub fn new(
        count: usize,
        star_size: Size,
        spacing: f32,
        rating_type: RatingType,
    ) -> Result<Self> {
        let mut config = Self::default();
        config.set_count(count)?;
        config.set_star_size(star_size)?;
        config.set_spacing(spacing)?;
        config.rating_type = rating_type;
        Ok(config)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn star_size(&self) -> Size {
        self.star_size
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn rating_type(&self) -> RatingType {
        self.rating_type
    }

    /// Star count as a float, for geometry math
    pub(crate) fn count_f(&self) -> f32 {
        self.count as f32
    }

    pub fn set_count(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(RatingError::InvalidCount(count));
        }
        self.count = count;
        Ok(())
    }

    pub fn set_star_size(&mut self, star_size: Size) -> Result<()> {
        if !star_size.is_positive() {
            return Err(RatingError::InvalidStarSize {
                width: star_size.width,
                height: star_size.height,
            });
        }
        self.star_size = star_size;
        Ok(())
    }

    /// Returns the stored (clamped) spacing
    pub fn set_spacing(&mut self, spacing: f32) -> Result<f32> {
        let spacing = ensure_finite("spacing", spacing)?.max(0.0);
        self.spacing = spacing;
        Ok(spacing)
    }

    pub fn set_rating_type(&mut self, rating_type: RatingType) {
        self.rating_type = rating_type;
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            star_size: Size::square(DEFAULT_STAR_SIZE),
            spacing: DEFAULT_SPACING,
            rating_type: RatingType::default(),
        }
    }
}

/// Inclusive score scale, `0 <= min < max`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreRange {
    min: f32,
    max: f32,
}

impl ScoreRange {
    pub fn new(min: f32, max: f32) -> Result<Self> {
        let min = ensure_finite("min_score", min)?;
        let max = ensure_finite("max_score", max)?;
        if min < 0.0 {
            return Err(RatingError::NegativeMinScore(min));
        }
        if max <= min {
            return Err(RatingError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Copy with a different minimum
    pub fn with_min(&self, min: f32) -> Result<Self> {
        Self::new(min, self.max)
    }

    /// Copy with a different maximum
    pub fn with_max(&self, max: f32) -> Result<Self> {
        Self::new(self.min, max)
    }

    pub fn clamp(&self, score: f32) -> f32 {
        score.clamp(self.min, self.max)
    }

    /// Lowest ratio a pointer may select, `min / max`
    pub fn floor_ratio(&self) -> f32 {
        self.min / self.max
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_MAX_SCORE,
        }
    }
}
