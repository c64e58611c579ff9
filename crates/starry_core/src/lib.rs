//! Starry Core
//!
//! Foundational primitives shared by the Starry widget crates:
//!
//! - **Geometry**: `Point`, `Size` and `Rect` in widget-local coordinates
//! - **Draw Context**: the rendering seam a host toolkit implements, plus a
//!   `RecordingContext` for headless rendering
//! - **Events**: pointer events delivered by the host in local coordinates
//!
//! # Example
//!
//! ```rust
//! use starry_core::{DrawContext, ImageId, ImageOptions, Rect, RecordingContext};
//!
//! let mut ctx = RecordingContext::new();
//! ctx.draw_image(ImageId(1), Rect::new(5.0, 0.0, 24.0, 24.0), &ImageOptions::new());
//! assert_eq!(ctx.commands().len(), 1);
//! ```

pub mod draw;
pub mod events;
pub mod geometry;

pub use draw::{ClipShape, DrawCommand, DrawContext, ImageId, ImageOptions, RecordingContext};
pub use events::{event_types, EventType, PointerEvent};
pub use geometry::{Point, Rect, Size};
