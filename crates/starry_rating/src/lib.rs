//! Starry Rating
//!
//! A star rating widget: a row of star images showing a score, with tap and
//! drag selection and score change notification.
//!
//! # Modules
//!
//! - **layout**: star frames and total row width
//! - **geometry**: pointer x to selection ratio, skipping inter-star gaps
//! - **quantize**: whole / half / unlimited snapping, reveal width, score
//! - **score**: score range and clamped current score
//! - **widget**: `RatingWidget`, which wires everything to the host seams
//!   from `starry_core` and `starry_animation`
//!
//! The host supplies a [`starry_core::DrawContext`] to paint into, pointer
//! events in widget-local coordinates, and calls [`RatingWidget::tick`] each
//! frame to advance the reveal animation.

pub mod config;
pub mod error;
pub mod geometry;
pub mod layers;
pub mod layout;
pub mod listener;
pub mod quantize;
pub mod score;
pub mod settings;
pub mod widget;

pub use config::{RatingConfig, RatingType, ScoreRange};
pub use error::{RatingError, Result};
pub use layers::{StarCell, StarLayer};
pub use listener::ScoreListener;
pub use quantize::Quantized;
pub use score::ScoreModel;
pub use settings::RatingSettings;
pub use widget::{RatingWidget, ANIMATION_DURATION_MS};

/// Common imports for hosting a rating widget
pub mod prelude {
    pub use crate::{RatingSettings, RatingType, RatingWidget, ScoreListener};
    pub use starry_core::{DrawContext, ImageId, Point, PointerEvent, Rect, Size};
}
