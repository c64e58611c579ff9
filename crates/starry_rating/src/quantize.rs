//! Ratio quantization
//!
//! Turns a selection ratio into a *display ratio* (how many stars appear
//! filled, possibly fractional), the pixel width of the selected layer to
//! reveal, and the score that display ratio stands for.

use crate::config::{RatingConfig, RatingType, ScoreRange};

/// Fractions of a star below this snap down to the whole star in half mode
pub const HALF_STAR_EPSILON: f32 = 0.001;

/// Result of quantizing a selection ratio
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantized {
    /// Filled star count after snapping
    pub display_ratio: f32,
    /// Width of the selected layer to reveal, in pixels
    pub reveal_width: f32,
}

/// Snap `ratio` according to the rating mode
///
/// Returns `None` when `ratio` lies outside `[0, 1]` (NaN included); callers
/// treat that as a silent no-op.
pub fn display_ratio(ratio: f32, config: &RatingConfig) -> Option<f32> {
    if !(0.0..=1.0).contains(&ratio) {
        return None;
    }

    let scaled = ratio * config.count_f();

    let display = match config.rating_type() {
        RatingType::Whole => scaled.ceil(),
        RatingType::Half => {
            let whole = scaled.floor();
            let fraction = scaled - whole;
            if fraction > 0.5 {
                whole + 1.0
            } else if fraction >= HALF_STAR_EPSILON {
                whole + 0.5
            } else {
                whole
            }
        }
        RatingType::Unlimited => scaled,
    };

    Some(display)
}

/// Pixel width to reveal for a display ratio
///
/// Each filled star also uncovers the gap in front of it. Whole and half
/// modes count gaps for the nearest star; unlimited mode counts the gap of any
/// partially filled star.
pub fn reveal_width(display_ratio: f32, config: &RatingConfig) -> f32 {
    let gaps = match config.rating_type() {
        RatingType::Whole | RatingType::Half => display_ratio.round(),
        RatingType::Unlimited => display_ratio.ceil(),
    };

    let width = config.star_size().width * display_ratio + config.spacing() * gaps;
    width.max(0.0)
}

/// Quantize a selection ratio into display ratio and reveal width
pub fn quantize(ratio: f32, config: &RatingConfig) -> Option<Quantized> {
    let display_ratio = display_ratio(ratio, config)?;
    Some(Quantized {
        display_ratio,
        reveal_width: reveal_width(display_ratio, config),
    })
}

/// Display ratio for a score set directly, without snapping
pub fn display_ratio_for_score(score: f32, config: &RatingConfig, range: &ScoreRange) -> f32 {
    score / range.max() * config.count_f()
}

/// Score represented by a display ratio, clamped into `range`
///
/// Both factors are rounded to four decimals before multiplying so repeated
/// selections of the same star produce bit-identical scores.
pub fn score_for_display(display_ratio: f32, config: &RatingConfig, range: &ScoreRange) -> f32 {
    let fraction = round4(display_ratio / config.count_f());
    range.clamp(fraction * round4(range.max()))
}

/// Round to four decimal places
pub fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use starry_core::Size;

    fn config(rating_type: RatingType) -> RatingConfig {
        RatingConfig::new(5, Size::square(24.0), 5.0, rating_type).unwrap()
    }

    fn ratios() -> impl Iterator<Item = f32> {
        (0..=1000).map(|i| i as f32 / 1000.0)
    }

    #[test]
    fn test_out_of_range_ratio_is_rejected() {
        let c = config(RatingType::Whole);
        assert_eq!(display_ratio(-0.01, &c), None);
        assert_eq!(display_ratio(1.01, &c), None);
        assert_eq!(display_ratio(f32::NAN, &c), None);
        assert!(quantize(1.5, &c).is_none());
    }

    #[test]
    fn test_whole_mode_rounds_up() {
        let c = config(RatingType::Whole);
        assert_eq!(display_ratio(0.0, &c), Some(0.0));
        assert_eq!(display_ratio(0.01, &c), Some(1.0));
        assert_eq!(display_ratio(0.2, &c), Some(1.0));
        assert_eq!(display_ratio(0.61, &c), Some(4.0));
        assert_eq!(display_ratio(1.0, &c), Some(5.0));
    }

    #[test]
    fn test_whole_mode_yields_integers_in_range() {
        let c = config(RatingType::Whole);
        for ratio in ratios() {
            let d = display_ratio(ratio, &c).unwrap();
            assert_eq!(d.fract(), 0.0, "ratio {ratio}");
            assert!((0.0..=5.0).contains(&d), "ratio {ratio}");
        }
    }

    #[test]
    fn test_half_mode_snapping() {
        let c = config(RatingType::Half);
        // scaled 2.3 -> 2.5
        assert_eq!(display_ratio(0.46, &c), Some(2.5));
        // scaled 2.8 -> 3
        assert_eq!(display_ratio(0.56, &c), Some(3.0));
        // scaled 2.5 -> 2.5
        assert_eq!(display_ratio(0.5, &c), Some(2.5));
        // scaled 2.0 -> 2
        assert_eq!(display_ratio(0.4, &c), Some(2.0));
    }

    #[test]
    fn test_half_mode_ignores_float_jitter() {
        let c = config(RatingType::Half);
        // scaled = 2.0 + 0.0005
        assert_eq!(display_ratio(2.0005 / 5.0, &c), Some(2.0));
    }

    #[test]
    fn test_half_mode_yields_halves_in_range() {
        let c = config(RatingType::Half);
        for ratio in ratios() {
            let d = display_ratio(ratio, &c).unwrap();
            assert_eq!((d * 2.0).fract(), 0.0, "ratio {ratio}");
            assert!((0.0..=5.0).contains(&d), "ratio {ratio}");
        }
    }

    #[test]
    fn test_unlimited_mode_passes_through() {
        let c = config(RatingType::Unlimited);
        let d = display_ratio(0.37, &c).unwrap();
        assert!((d - 1.85).abs() < 1e-5);
    }

    #[test]
    fn test_reveal_width_whole() {
        let c = config(RatingType::Whole);
        assert_eq!(reveal_width(0.0, &c), 0.0);
        assert_eq!(reveal_width(1.0, &c), 29.0);
        assert_eq!(reveal_width(5.0, &c), 145.0);
    }

    #[test]
    fn test_reveal_width_half_rounds_gap_count() {
        let c = config(RatingType::Half);
        // 2.5 stars round to 3 gaps
        assert_eq!(reveal_width(2.5, &c), 24.0 * 2.5 + 15.0);
        assert_eq!(reveal_width(2.0, &c), 58.0);
    }

    #[test]
    fn test_reveal_width_unlimited_ceils_gap_count() {
        let c = config(RatingType::Unlimited);
        // 1.2 stars include the gap of the partially filled second star
        assert!((reveal_width(1.2, &c) - (24.0 * 1.2 + 10.0)).abs() < 1e-4);
    }

    #[test]
    fn test_reveal_width_never_negative() {
        let c = config(RatingType::Unlimited);
        assert_eq!(reveal_width(-1.0, &c), 0.0);
    }

    #[test]
    fn test_score_for_display() {
        let c = config(RatingType::Half);
        let range = ScoreRange::default();
        assert_eq!(score_for_display(2.5, &c, &range), 2.5);
        assert_eq!(score_for_display(5.0, &c, &range), 5.0);

        let ten = ScoreRange::new(0.0, 10.0).unwrap();
        assert_eq!(score_for_display(1.0, &c, &ten), 2.0);
    }

    #[test]
    fn test_score_for_display_clamped_to_minimum() {
        let c = config(RatingType::Whole);
        let range = ScoreRange::new(2.0, 5.0).unwrap();
        assert_eq!(score_for_display(1.0, &c, &range), 2.0);
    }

    #[test]
    fn test_display_ratio_for_score_is_direct() {
        let c = config(RatingType::Whole);
        let range = ScoreRange::new(0.0, 10.0).unwrap();
        // 3.3 / 10 * 5 = 1.65, no snapping even in whole mode
        let d = display_ratio_for_score(3.3, &c, &range);
        assert!((d - 1.65).abs() < 1e-5);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123_449), 0.1234);
        assert_eq!(round4(0.123_46), 0.1235);
        assert_eq!(round4(2.0), 2.0);
    }
}
