//! Starry Animation System
//!
//! Duration-based transitions with easing curves.
//!
//! # Features
//!
//! - **Easing**: Standard easing curves (linear, quad, cubic)
//! - **Transitions**: Interpolate a value toward a target over a fixed duration
//! - **Interruptible**: Retargeting starts from the current interpolated value
//! - **AnimationContext**: Platform-agnostic seam for host animation primitives

pub mod context;
pub mod easing;
pub mod transition;
pub mod values;

pub use context::AnimationContext;
pub use easing::Easing;
pub use transition::{FloatTransition, Transition};
pub use values::Interpolate;
