//! Score model
//!
//! Holds the score range and the current score. The current score is kept
//! inside the range on every write, including writes caused by narrowing the
//! range itself.

use crate::config::ScoreRange;
use crate::error::{ensure_finite, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreModel {
    range: ScoreRange,
    current: f32,
}

impl ScoreModel {
    pub fn new(range: ScoreRange) -> Self {
        Self {
            range,
            current: range.min(),
        }
    }

    pub fn range(&self) -> ScoreRange {
        self.range
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn min(&self) -> f32 {
        self.range.min()
    }

    pub fn max(&self) -> f32 {
        self.range.max()
    }

    /// Store an externally requested score, clamping it into range
    ///
    /// Returns the stored value. NaN and infinities are rejected.
    pub fn set_current(&mut self, score: f32) -> Result<f32> {
        let requested = ensure_finite("current_score", score)?;
        let clamped = self.range.clamp(requested);
        if clamped != requested {
            tracing::warn!(
                requested,
                clamped,
                min = self.range.min(),
                max = self.range.max(),
                "current score outside range, clamped"
            );
        }
        self.current = clamped;
        Ok(clamped)
    }

    /// Record a score derived from interaction
    ///
    /// Returns true when the stored score changed.
    pub fn update(&mut self, score: f32) -> bool {
        let score = self.range.clamp(score);
        if score == self.current {
            return false;
        }
        self.current = score;
        true
    }

    pub fn set_min(&mut self, min: f32) -> Result<()> {
        let range = self.range.with_min(min)?;
        self.replace_range(range);
        Ok(())
    }

    pub fn set_max(&mut self, max: f32) -> Result<()> {
        let range = self.range.with_max(max)?;
        self.replace_range(range);
        Ok(())
    }

    /// Replace both bounds at once
    ///
    /// Useful when the new range does not overlap the old one, where setting
    /// the bounds one at a time would pass through an invalid state.
    pub fn set_range(&mut self, min: f32, max: f32) -> Result<()> {
        let range = ScoreRange::new(min, max)?;
        self.replace_range(range);
        Ok(())
    }

    fn replace_range(&mut self, range: ScoreRange) {
        self.range = range;
        let clamped = range.clamp(self.current);
        if clamped != self.current {
            tracing::debug!(
                from = self.current,
                to = clamped,
                "score range changed, current score re-clamped"
            );
            self.current = clamped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RatingError;

    #[test]
    fn test_starts_at_minimum() {
        let model = ScoreModel::new(ScoreRange::new(1.0, 5.0).unwrap());
        assert_eq!(model.current(), 1.0);
    }

    #[test]
    fn test_set_current_clamps() {
        let mut model = ScoreModel::default();
        assert_eq!(model.set_current(7.0).unwrap(), 5.0);
        assert_eq!(model.current(), 5.0);
        assert_eq!(model.set_current(-2.0).unwrap(), 0.0);
        assert_eq!(model.current(), 0.0);
        assert_eq!(model.set_current(3.5).unwrap(), 3.5);
    }

    #[test]
    fn test_set_current_rejects_nan() {
        let mut model = ScoreModel::default();
        model.set_current(2.0).unwrap();
        assert!(matches!(
            model.set_current(f32::NAN),
            Err(RatingError::NonFinite { .. })
        ));
        assert_eq!(model.current(), 2.0);
    }

    #[test]
    fn test_update_reports_change_once() {
        let mut model = ScoreModel::default();
        assert!(model.update(3.0));
        assert!(!model.update(3.0));
        assert_eq!(model.current(), 3.0);
    }

    #[test]
    fn test_invalid_bounds_keep_last_valid_range() {
        let mut model = ScoreModel::default();
        assert!(model.set_max(0.0).is_err());
        assert!(model.set_min(-1.0).is_err());
        assert!(model.set_min(5.0).is_err());
        assert_eq!(model.range(), ScoreRange::default());
    }

    #[test]
    fn test_narrowing_range_reclamps_current() {
        let mut model = ScoreModel::default();
        model.set_current(4.5).unwrap();
        model.set_max(4.0).unwrap();
        assert_eq!(model.current(), 4.0);

        model.set_min(2.0).unwrap();
        model.set_current(2.5).unwrap();
        model.set_range(3.0, 10.0).unwrap();
        assert_eq!(model.current(), 3.0);
    }

    #[test]
    fn test_set_range_jumps_past_old_bounds() {
        let mut model = ScoreModel::default();
        // min 6 is invalid against max 5 on its own
        assert!(model.set_min(6.0).is_err());
        model.set_range(6.0, 10.0).unwrap();
        assert_eq!((model.min(), model.max()), (6.0, 10.0));
    }
}
