//! Draw context seam
//!
//! The host toolkit owns the real canvas. Widgets only describe what they
//! need painted through the [`DrawContext`] trait: images placed in rects,
//! optionally clipped to a rectangular region.
//!
//! [`RecordingContext`] implements the trait by recording [`DrawCommand`]s,
//! which is how headless hosts and tests inspect rendered output.

use crate::geometry::Rect;

// ─────────────────────────────────────────────────────────────────────────────
// Images
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque handle to an image owned by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

/// Image rendering options
#[derive(Clone, Debug, PartialEq)]
pub struct ImageOptions {
    /// Opacity (1.0 = fully opaque)
    pub opacity: f32,
}

impl ImageOptions {
    pub fn new() -> Self {
        Self { opacity: 1.0 }
    }
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipping
// ─────────────────────────────────────────────────────────────────────────────

/// Shape used to clip subsequent drawing
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// Axis-aligned rectangle clip
    Rect(Rect),
}

impl ClipShape {
    /// Create a rectangular clip
    pub fn rect(rect: Rect) -> Self {
        ClipShape::Rect(rect)
    }

    /// Bounding rectangle of the clip
    pub fn bounds(&self) -> Rect {
        match self {
            ClipShape::Rect(rect) => *rect,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// Rendering surface provided by the host
pub trait DrawContext {
    /// Push a clip shape onto the stack
    fn push_clip(&mut self, shape: ClipShape);

    /// Pop the top clip from the stack
    fn pop_clip(&mut self);

    /// Draw an image
    fn draw_image(&mut self, image: ImageId, rect: Rect, options: &ImageOptions);
}

/// A recorded draw command
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushClip(ClipShape),
    PopClip,
    DrawImage {
        image: ImageId,
        rect: Rect,
        options: ImageOptions,
    },
}

/// A draw context that records commands for inspection
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingContext {
    /// Create an empty recording context
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clips currently pushed
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }
}

impl DrawContext for RecordingContext {
    fn push_clip(&mut self, shape: ClipShape) {
        self.commands.push(DrawCommand::PushClip(shape));
        self.clip_depth += 1;
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            tracing::warn!("RecordingContext: pop_clip() without matching push_clip()");
            return;
        }
        self.commands.push(DrawCommand::PopClip);
        self.clip_depth -= 1;
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect, options: &ImageOptions) {
        self.commands.push(DrawCommand::DrawImage {
            image,
            rect,
            options: options.clone(),
        });
    }
}
