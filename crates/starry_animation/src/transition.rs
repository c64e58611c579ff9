//! Duration-based transitions
//!
//! A [`Transition`] moves a value from where it currently is toward a target
//! over a fixed duration, shaped by an [`Easing`] curve. Setting a new target
//! while a transition is in flight restarts the clock from the current
//! interpolated value, so the latest target always wins.
//!
//! # Example
//!
//! ```rust
//! use starry_animation::{Easing, FloatTransition};
//!
//! let mut width = FloatTransition::new(0.0).with_easing(Easing::Linear);
//! width.retarget(100.0, 300);
//! width.tick(150.0);
//! assert!((width.value() - 50.0).abs() < 1e-4);
//! ```

use crate::easing::Easing;
use crate::values::Interpolate;

/// Interpolates a value toward a target over a duration in milliseconds
#[derive(Clone, Debug)]
pub struct Transition<T: Interpolate> {
    from: T,
    to: T,
    /// Duration in milliseconds
    duration_ms: u32,
    /// Elapsed time in milliseconds
    elapsed_ms: f32,
    easing: Easing,
    playing: bool,
}

impl<T: Interpolate> Transition<T> {
    /// Create a settled transition resting at `initial`
    pub fn new(initial: T) -> Self {
        Self {
            from: initial.clone(),
            to: initial,
            duration_ms: 0,
            elapsed_ms: 0.0,
            easing: Easing::default(),
            playing: false,
        }
    }

    /// Set the easing curve (builder pattern)
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start moving toward `target` over `duration_ms`
    ///
    /// The new transition starts from the current interpolated value. A zero
    /// duration jumps straight to the target.
    pub fn retarget(&mut self, target: T, duration_ms: u32) {
        if duration_ms == 0 {
            self.jump_to(target);
            return;
        }

        self.from = self.value();
        self.to = target;
        self.duration_ms = duration_ms;
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    /// Stop any transition and rest at `value`
    pub fn jump_to(&mut self, value: T) {
        self.from = value.clone();
        self.to = value;
        self.duration_ms = 0;
        self.elapsed_ms = 0.0;
        self.playing = false;
    }

    /// Advance by delta time (in milliseconds)
    ///
    /// Returns true while the transition is still running.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }

        self.elapsed_ms += dt_ms.max(0.0);

        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.from = self.to.clone();
            self.playing = false;
        }

        self.playing
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if !self.playing || self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        if !self.playing {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    /// Value the transition is heading toward
    pub fn target(&self) -> T {
        self.to.clone()
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl<T: Interpolate + Default> Default for Transition<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Transition over `f32` values
pub type FloatTransition = Transition<f32>;
