//! Animation context seam
//!
//! Widgets animate a single scalar through [`AnimationContext`] so that a host
//! can substitute its own animation primitive. [`FloatTransition`] is the
//! built-in implementation, driven by the host calling `tick` once per frame.

use crate::transition::FloatTransition;

/// A scalar the host interpolates toward a target over a duration
pub trait AnimationContext {
    /// Move toward `target` over `duration_ms`, superseding any in-flight target
    fn animate_to(&mut self, target: f32, duration_ms: u32);

    /// Rest at `value` immediately
    fn jump_to(&mut self, value: f32);

    /// Current (possibly mid-flight) value
    fn current(&self) -> f32;

    /// Value being animated toward
    fn target(&self) -> f32;

    /// Advance by delta time in milliseconds; returns true while animating
    fn tick(&mut self, dt_ms: f32) -> bool;

    /// Whether a transition is in flight
    fn is_animating(&self) -> bool;
}

impl AnimationContext for FloatTransition {
    fn animate_to(&mut self, target: f32, duration_ms: u32) {
        tracing::debug!(
            from = self.value(),
            to = target,
            duration_ms,
            "FloatTransition: animate_to"
        );
        self.retarget(target, duration_ms);
    }

    fn jump_to(&mut self, value: f32) {
        FloatTransition::jump_to(self, value);
    }

    fn current(&self) -> f32 {
        self.value()
    }

    fn target(&self) -> f32 {
        FloatTransition::target(self)
    }

    fn tick(&mut self, dt_ms: f32) -> bool {
        FloatTransition::tick(self, dt_ms)
    }

    fn is_animating(&self) -> bool {
        self.is_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    #[test]
    fn test_transition_through_trait_object() {
        let mut ctx: Box<dyn AnimationContext> =
            Box::new(FloatTransition::new(0.0).with_easing(Easing::Linear));

        ctx.animate_to(60.0, 300);
        assert!(ctx.is_animating());
        assert_eq!(ctx.target(), 60.0);

        ctx.tick(100.0);
        assert!((ctx.current() - 20.0).abs() < 1e-4);

        ctx.jump_to(5.0);
        assert!(!ctx.is_animating());
        assert_eq!(ctx.current(), 5.0);
    }
}
