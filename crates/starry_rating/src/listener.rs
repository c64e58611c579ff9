//! Score change notification

/// Receives the new score whenever interaction changes it
///
/// Any `FnMut(f32)` closure is a listener:
///
/// ```rust
/// use starry_core::Rect;
/// use starry_rating::RatingWidget;
///
/// let mut widget = RatingWidget::new(Rect::new(0.0, 0.0, 150.0, 24.0));
/// widget.set_listener(|score: f32| println!("score: {score}"));
/// ```
pub trait ScoreListener {
    fn on_score_changed(&mut self, score: f32);
}

impl<F: FnMut(f32)> ScoreListener for F {
    fn on_score_changed(&mut self, score: f32) {
        self(score)
    }
}
