//! Pointer position to selection ratio
//!
//! A raw `x / width` ratio would count the gaps between stars as selectable
//! area. The mapping here removes the gaps that lie left of the pointer so
//! the ratio tracks how much *star* is covered. A pointer resting inside a gap
//! counts as the end of the star before it.

use crate::config::{RatingConfig, ScoreRange};

/// Convert a pointer x (widget-local) into a selection ratio in `[0, 1]`
///
/// `host_width` is the width of the host view; pointers within one gap of
/// either edge select nothing or everything. When the range has a non-zero
/// minimum the ratio never drops below `min / max`.
pub fn ratio_for_pointer_x(
    x: f32,
    host_width: f32,
    config: &RatingConfig,
    range: &ScoreRange,
) -> f32 {
    let spacing = config.spacing();
    let star_width = config.star_size().width;

    let mut ratio = if x < spacing {
        0.0
    } else if x > host_width - spacing {
        1.0
    } else {
        let item_width = spacing + star_width;
        let whole_units = (x / item_width).floor();
        // Offset into the current item, capped at one gap
        let gap_advance = spacing.min(x - item_width * whole_units);
        let star_x = x - spacing * whole_units - gap_advance;

        star_x / (star_width * config.count_f())
    };

    if range.min() != 0.0 {
        ratio = ratio.max(range.floor_ratio());
    }

    ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RatingType;
    use crate::layout::total_width;
    use starry_core::Size;

    fn default_config() -> RatingConfig {
        RatingConfig::new(5, Size::square(24.0), 5.0, RatingType::Whole).unwrap()
    }

    #[test]
    fn test_left_gap_maps_to_zero() {
        let config = default_config();
        let range = ScoreRange::default();
        assert_eq!(ratio_for_pointer_x(0.0, 150.0, &config, &range), 0.0);
        assert_eq!(ratio_for_pointer_x(4.9, 150.0, &config, &range), 0.0);
    }

    #[test]
    fn test_right_gap_maps_to_one() {
        let config = default_config();
        let range = ScoreRange::default();
        assert_eq!(ratio_for_pointer_x(145.5, 150.0, &config, &range), 1.0);
        assert_eq!(ratio_for_pointer_x(500.0, 150.0, &config, &range), 1.0);
    }

    #[test]
    fn test_end_of_first_star() {
        // x = 29 is one gap plus one star
        let config = default_config();
        let ratio = ratio_for_pointer_x(29.0, 150.0, &config, &ScoreRange::default());
        assert!((ratio - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_middle_of_second_star() {
        // second star spans 34..58; its midpoint is 46
        let config = default_config();
        let ratio = ratio_for_pointer_x(46.0, 150.0, &config, &ScoreRange::default());
        assert!((ratio - 1.5 / 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_gap_counts_as_previous_star_end() {
        let config = default_config();
        let range = ScoreRange::default();
        let in_gap = ratio_for_pointer_x(61.0, 150.0, &config, &range);
        let star_end = ratio_for_pointer_x(58.0, 150.0, &config, &range);
        assert_eq!(in_gap, star_end);
        assert!((in_gap - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_ratio_is_monotonic_and_bounded() {
        let config = default_config();
        let range = ScoreRange::default();
        let width = total_width(&config);
        let mut previous = 0.0;
        let mut x = -10.0;
        while x <= width + 10.0 {
            let ratio = ratio_for_pointer_x(x, width, &config, &range);
            assert!((0.0..=1.0).contains(&ratio), "x {x} ratio {ratio}");
            assert!(ratio + 1e-6 >= previous, "x {x}");
            previous = ratio;
            x += 0.5;
        }
    }

    #[test]
    fn test_minimum_score_floor() {
        let config = default_config();
        let range = ScoreRange::new(2.0, 5.0).unwrap();
        assert!((ratio_for_pointer_x(0.0, 150.0, &config, &range) - 0.4).abs() < 1e-6);
        assert!((ratio_for_pointer_x(29.0, 150.0, &config, &range) - 0.4).abs() < 1e-6);
        assert_eq!(ratio_for_pointer_x(149.0, 150.0, &config, &range), 1.0);
    }
}
