//! Star row layout
//!
//! Stars sit in a single row with `spacing` before each star and one more
//! gap after the last:
//!
//! ```text
//! | gap | star | gap | star | ... | star | gap |
//! ```
//!
//! Star frames are local to the layer that holds them. Both layers share the
//! same frame, vertically centered in the host view.

use starry_core::{Rect, Size};

use crate::config::RatingConfig;

/// Width of the full star row, including outer gaps
pub fn total_width(config: &RatingConfig) -> f32 {
    (config.star_size().width + config.spacing()) * config.count_f() + config.spacing()
}

/// Frame of star `index` in layer-local coordinates
pub fn star_frame(config: &RatingConfig, index: usize) -> Rect {
    let size = config.star_size();
    let x = (size.width + config.spacing()) * index as f32 + config.spacing();
    Rect::new(x, 0.0, size.width, size.height)
}

/// Frames of every star, left to right
pub fn star_frames(config: &RatingConfig) -> Vec<Rect> {
    (0..config.count()).map(|i| star_frame(config, i)).collect()
}

/// Frame of the star layers inside a host of `host_size`
pub fn layer_frame(config: &RatingConfig, host_size: Size) -> Rect {
    let height = config.star_size().height;
    let y = (host_size.height - height) * 0.5;
    Rect::new(0.0, y, total_width(config), height)
}
