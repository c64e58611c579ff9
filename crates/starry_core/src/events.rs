//! Pointer events
//!
//! Hosts translate their native gesture streams into [`PointerEvent`]s with
//! coordinates already converted into the receiving widget's local space.

/// Numeric event type identifier
pub type EventType = u32;

/// Pointer event type constants
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Press and release without a drag in between
    pub const CLICK: EventType = 4;
    /// Pointer moved while pressed
    pub const DRAG: EventType = 5;
    pub const DRAG_END: EventType = 6;

    /// Human readable name, used in log output
    pub fn name(event_type: EventType) -> &'static str {
        match event_type {
            POINTER_DOWN => "pointer_down",
            POINTER_UP => "pointer_up",
            POINTER_MOVE => "pointer_move",
            CLICK => "click",
            DRAG => "drag",
            DRAG_END => "drag_end",
            _ => "unknown",
        }
    }
}

/// A pointer event in widget-local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// The type of event that occurred
    pub event_type: EventType,
    /// Position relative to the widget bounds
    pub local_x: f32,
    pub local_y: f32,
}

impl PointerEvent {
    /// Create a new event at the local origin
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            local_x: 0.0,
            local_y: 0.0,
        }
    }

    /// Shorthand for a click at a local position
    pub fn click(x: f32, y: f32) -> Self {
        Self::new(event_types::CLICK).with_local_pos(x, y)
    }

    /// Shorthand for a drag sample at a local position
    pub fn drag(x: f32, y: f32) -> Self {
        Self::new(event_types::DRAG).with_local_pos(x, y)
    }

    /// Set local position
    pub fn with_local_pos(mut self, x: f32, y: f32) -> Self {
        self.local_x = x;
        self.local_y = y;
        self
    }

    /// True for events that belong to a drag gesture
    pub fn is_drag(&self) -> bool {
        matches!(self.event_type, event_types::DRAG | event_types::DRAG_END)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_builder() {
        let event = PointerEvent::click(12.0, 4.0);
        assert_eq!(event.event_type, event_types::CLICK);
        assert_eq!((event.local_x, event.local_y), (12.0, 4.0));
        assert!(!event.is_drag());
    }

    #[test]
    fn test_drag_events() {
        let event = PointerEvent::drag(30.0, 0.0);
        assert!(event.is_drag());
        assert_eq!((event.local_x, event.local_y), (30.0, 0.0));
        assert!(PointerEvent::new(event_types::DRAG_END).is_drag());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(event_types::name(event_types::DRAG), "drag");
        assert_eq!(event_types::name(99), "unknown");
    }
}
