//! Star rating widget
//!
//! `RatingWidget` ties the pieces together:
//!
//! ```text
//! pointer event
//!     ↓ geometry::ratio_for_pointer_x
//! selection ratio
//!     ↓ quantize::quantize
//! display ratio + reveal width ──→ AnimationContext (selected layer width)
//!     ↓ quantize::score_for_display
//! ScoreModel ──→ ScoreListener (only when the score changed)
//! ```
//!
//! Setting the score directly skips the snapping step: the requested score is
//! shown exactly, whatever the rating mode.
//!
//! # Example
//!
//! ```rust
//! use starry_core::{ImageId, Point, Rect};
//! use starry_rating::{RatingType, RatingWidget};
//!
//! let mut widget = RatingWidget::new(Rect::new(0.0, 0.0, 150.0, 24.0));
//! widget.set_rating_type(RatingType::Whole);
//! widget.set_normal_image(Some(ImageId(1)));
//! widget.set_selected_image(Some(ImageId(2)));
//! widget.set_touch_enabled(true);
//!
//! widget.handle_tap(Point::new(29.0, 12.0));
//! assert_eq!(widget.current_score(), 1.0);
//! ```

use std::fmt;

use starry_animation::{AnimationContext, FloatTransition};
use starry_core::{event_types, DrawContext, ImageId, Point, PointerEvent, Rect, Size};

use crate::config::{RatingConfig, RatingType};
use crate::error::Result;
use crate::geometry::ratio_for_pointer_x;
use crate::layers::{StarCell, StarLayer};
use crate::layout;
use crate::listener::ScoreListener;
use crate::quantize;
use crate::score::ScoreModel;

/// Duration of the reveal-width transition when star animation is on
pub const ANIMATION_DURATION_MS: u32 = 300;

/// A row of stars showing a score, optionally selectable by tap and drag
pub struct RatingWidget {
    frame: Rect,
    config: RatingConfig,
    score: ScoreModel,
    normal_layer: StarLayer,
    selected_layer: StarLayer,
    layer_frame: Rect,
    normal_image: Option<ImageId>,
    selected_image: Option<ImageId>,
    star_animation: bool,
    touch_enabled: bool,
    slide_enabled: bool,
    display_ratio: f32,
    animator: Box<dyn AnimationContext>,
    listener: Option<Box<dyn ScoreListener>>,
}

impl RatingWidget {
    /// Create a widget with default configuration inside `frame`
    ///
    /// Defaults: 5 stars of 24×24 with 5px spacing, scores 0–5, unlimited
    /// rating, animation on, interaction off.
    pub fn new(frame: Rect) -> Self {
        let mut widget = Self {
            frame,
            config: RatingConfig::default(),
            score: ScoreModel::default(),
            normal_layer: StarLayer::default(),
            selected_layer: StarLayer::default(),
            layer_frame: Rect::ZERO,
            normal_image: None,
            selected_image: None,
            star_animation: true,
            touch_enabled: false,
            slide_enabled: false,
            display_ratio: 0.0,
            animator: Box::new(FloatTransition::new(0.0)),
            listener: None,
        };
        widget.rebuild_cells();
        widget.relayout();
        widget
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────────

    pub fn count(&self) -> usize {
        self.config.count()
    }

    /// Change the number of stars, rebuilding both layers
    pub fn set_count(&mut self, count: usize) -> Result<()> {
        if let Err(e) = self.config.set_count(count) {
            tracing::warn!("RatingWidget: rejected star count: {}", e);
            return Err(e);
        }
        self.rebuild_cells();
        self.relayout();
        self.refresh_from_score();
        Ok(())
    }

    pub fn star_size(&self) -> Size {
        self.config.star_size()
    }

    pub fn set_star_size(&mut self, star_size: Size) -> Result<()> {
        if let Err(e) = self.config.set_star_size(star_size) {
            tracing::warn!("RatingWidget: rejected star size: {}", e);
            return Err(e);
        }
        self.relayout();
        self.refresh_from_score();
        Ok(())
    }

    pub fn spacing(&self) -> f32 {
        self.config.spacing()
    }

    /// Change the gap between stars; negative values are stored as zero
    pub fn set_spacing(&mut self, spacing: f32) -> Result<()> {
        if let Err(e) = self.config.set_spacing(spacing) {
            tracing::warn!("RatingWidget: rejected spacing: {}", e);
            return Err(e);
        }
        self.relayout();
        self.refresh_from_score();
        Ok(())
    }

    pub fn rating_type(&self) -> RatingType {
        self.config.rating_type()
    }

    pub fn set_rating_type(&mut self, rating_type: RatingType) {
        self.config.set_rating_type(rating_type);
        self.refresh_from_score();
    }

    /// Width of the full star row, including the outer gaps
    pub fn total_width(&self) -> f32 {
        layout::total_width(&self.config)
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the host view
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.relayout();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Score
    // ─────────────────────────────────────────────────────────────────────────

    pub fn current_score(&self) -> f32 {
        self.score.current()
    }

    pub fn min_score(&self) -> f32 {
        self.score.min()
    }

    pub fn max_score(&self) -> f32 {
        self.score.max()
    }

    /// Show `score` exactly, clamped into range
    ///
    /// Returns the stored score. The listener is not notified; it only hears
    /// about changes made through interaction.
    pub fn set_current_score(&mut self, score: f32) -> Result<f32> {
        let stored = match self.score.set_current(score) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("RatingWidget: rejected current score: {}", e);
                return Err(e);
            }
        };
        self.refresh_from_score();
        Ok(stored)
    }

    pub fn set_min_score(&mut self, min: f32) -> Result<()> {
        if let Err(e) = self.score.set_min(min) {
            tracing::warn!("RatingWidget: rejected minimum score: {}", e);
            return Err(e);
        }
        self.refresh_from_score();
        Ok(())
    }

    pub fn set_max_score(&mut self, max: f32) -> Result<()> {
        if let Err(e) = self.score.set_max(max) {
            tracing::warn!("RatingWidget: rejected maximum score: {}", e);
            return Err(e);
        }
        self.refresh_from_score();
        Ok(())
    }

    /// Replace both score bounds at once
    pub fn set_score_range(&mut self, min: f32, max: f32) -> Result<()> {
        if let Err(e) = self.score.set_range(min, max) {
            tracing::warn!("RatingWidget: rejected score range: {}", e);
            return Err(e);
        }
        self.refresh_from_score();
        Ok(())
    }

    /// Filled star count currently shown (after snapping)
    pub fn display_ratio(&self) -> f32 {
        self.display_ratio
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Images
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_image(&self) -> Option<ImageId> {
        self.selected_image
    }

    pub fn normal_image(&self) -> Option<ImageId> {
        self.normal_image
    }

    /// Use `image` for every filled star; `None` is ignored
    pub fn set_selected_image(&mut self, image: Option<ImageId>) {
        let Some(image) = image else {
            tracing::trace!("RatingWidget: set_selected_image(None) ignored");
            return;
        };
        self.selected_image = Some(image);
        self.selected_layer.set_image(image);
    }

    /// Use `image` for every empty star; `None` is ignored
    pub fn set_normal_image(&mut self, image: Option<ImageId>) {
        let Some(image) = image else {
            tracing::trace!("RatingWidget: set_normal_image(None) ignored");
            return;
        };
        self.normal_image = Some(image);
        self.normal_layer.set_image(image);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Interaction
    // ─────────────────────────────────────────────────────────────────────────

    pub fn star_animation(&self) -> bool {
        self.star_animation
    }

    pub fn set_star_animation(&mut self, enabled: bool) {
        self.star_animation = enabled;
    }

    pub fn touch_enabled(&self) -> bool {
        self.touch_enabled
    }

    /// Accept taps
    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.touch_enabled = enabled;
    }

    pub fn slide_enabled(&self) -> bool {
        self.slide_enabled
    }

    /// Accept drags
    pub fn set_slide_enabled(&mut self, enabled: bool) {
        self.slide_enabled = enabled;
    }

    /// Whether the widget accepts any pointer input
    pub fn is_interactive(&self) -> bool {
        self.touch_enabled || self.slide_enabled
    }

    /// Register the score listener, replacing any previous one
    pub fn set_listener(&mut self, listener: impl ScoreListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Tap at a widget-local point; returns true if the score changed
    pub fn handle_tap(&mut self, point: Point) -> bool {
        if !self.touch_enabled {
            tracing::trace!(x = point.x, "RatingWidget: tap ignored, touch disabled");
            return false;
        }
        self.select_at(point)
    }

    /// Drag sample at a widget-local point; returns true if the score changed
    pub fn handle_pan(&mut self, point: Point) -> bool {
        if !self.slide_enabled {
            tracing::trace!(x = point.x, "RatingWidget: pan ignored, slide disabled");
            return false;
        }
        self.select_at(point)
    }

    /// Route a host pointer event to the tap or pan handler
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        let point = Point::new(event.local_x, event.local_y);
        if event.is_drag() {
            return self.handle_pan(point);
        }
        match event.event_type {
            event_types::CLICK => self.handle_tap(point),
            other => {
                tracing::trace!(
                    event = event_types::name(other),
                    "RatingWidget: pointer event not handled"
                );
                false
            }
        }
    }

    fn select_at(&mut self, point: Point) -> bool {
        let ratio = ratio_for_pointer_x(
            point.x,
            self.frame.width(),
            &self.config,
            &self.score.range(),
        );
        tracing::trace!(x = point.x, ratio, "RatingWidget: pointer mapped");
        self.apply_ratio(ratio)
    }

    /// Select a ratio of the full score, snapping per rating mode
    ///
    /// Ratios outside `[0, 1]` are dropped without any visual update.
    /// Returns true if the score changed and the listener was notified.
    pub fn apply_ratio(&mut self, ratio: f32) -> bool {
        let Some(quantized) = quantize::quantize(ratio, &self.config) else {
            tracing::trace!(ratio, "RatingWidget: ratio outside [0, 1] dropped");
            return false;
        };

        self.display_ratio = quantized.display_ratio;
        self.animate_reveal(quantized.reveal_width);

        let score =
            quantize::score_for_display(quantized.display_ratio, &self.config, &self.score.range());
        if !self.score.update(score) {
            return false;
        }

        tracing::debug!(
            score,
            display_ratio = quantized.display_ratio,
            "RatingWidget: score changed"
        );
        if let Some(listener) = self.listener.as_mut() {
            listener.on_score_changed(score);
        }
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the animation primitive driving the reveal width
    pub fn set_animator(&mut self, mut animator: Box<dyn AnimationContext>) {
        animator.jump_to(self.animator.target());
        self.animator = animator;
    }

    /// Advance the reveal animation; returns true while it is running
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.animator.tick(dt_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Visible width of the selected layer right now
    pub fn reveal_width(&self) -> f32 {
        self.animator.current()
    }

    /// Width the selected layer is animating toward
    pub fn target_reveal_width(&self) -> f32 {
        self.animator.target()
    }

    fn animate_reveal(&mut self, width: f32) {
        let duration_ms = if self.star_animation {
            ANIMATION_DURATION_MS
        } else {
            0
        };
        self.animator.animate_to(width, duration_ms);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout & rendering
    // ─────────────────────────────────────────────────────────────────────────

    pub fn normal_cells(&self) -> &[StarCell] {
        self.normal_layer.cells()
    }

    pub fn selected_cells(&self) -> &[StarCell] {
        self.selected_layer.cells()
    }

    /// Frame of the normal-image layer in widget coordinates
    pub fn background_frame(&self) -> Rect {
        self.layer_frame
    }

    /// Visible frame of the selected-image layer in widget coordinates
    pub fn foreground_frame(&self) -> Rect {
        self.layer_frame.with_width(self.reveal_width())
    }

    /// Paint the empty stars, then the filled stars clipped to the reveal width
    pub fn render(&self, ctx: &mut dyn DrawContext) {
        self.normal_layer.paint(ctx, self.layer_frame);
        self.selected_layer
            .paint_clipped(ctx, self.layer_frame, self.foreground_frame());
    }

    fn rebuild_cells(&mut self) {
        let count = self.config.count();
        self.normal_layer.rebuild(count, self.normal_image);
        self.selected_layer.rebuild(count, self.selected_image);
    }

    fn relayout(&mut self) {
        let frames = layout::star_frames(&self.config);
        self.normal_layer.relayout(&frames);
        self.selected_layer.relayout(&frames);
        self.layer_frame = layout::layer_frame(&self.config, self.frame.size());
        tracing::debug!(
            count = self.config.count(),
            total_width = self.layer_frame.width(),
            y = self.layer_frame.y(),
            "RatingWidget: relayout"
        );
    }

    /// Show the stored score exactly, without snapping
    fn refresh_from_score(&mut self) {
        let display = quantize::display_ratio_for_score(
            self.score.current(),
            &self.config,
            &self.score.range(),
        );
        self.display_ratio = display;
        self.animate_reveal(quantize::reveal_width(display, &self.config));
    }
}

impl fmt::Debug for RatingWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingWidget")
            .field("frame", &self.frame)
            .field("config", &self.config)
            .field("score", &self.score)
            .field("display_ratio", &self.display_ratio)
            .field("reveal_width", &self.reveal_width())
            .field("touch_enabled", &self.touch_enabled)
            .field("slide_enabled", &self.slide_enabled)
            .field("star_animation", &self.star_animation)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
