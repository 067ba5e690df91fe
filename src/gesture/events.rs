//! Semantic gesture events

use std::fmt;

/// Gesture recognized from the pointer stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Primary finger held still past the long-press threshold
    LongPress {
        /// Position of the finger when the press fired
        x: i32,
        y: i32,
    },

    /// Fast press-move-release on the primary finger
    Swipe {
        /// Position where the swipe started
        x: i32,
        y: i32,
        /// Direction in radians, counter-clockwise from +x with "up" positive
        angle: f64,
        /// Average displacement in pixels per Move sample
        velocity: i32,
    },

    /// Change of distance between two fingers
    Pinch {
        /// Signed distance change in pixels (positive = fingers apart)
        delta: i32,
        /// |dx / dy| of the two-finger offset, infinite when dy is zero
        ratio: f32,
    },
}

/// Kind of a gesture, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    LongPress,
    Swipe,
    Pinch,
}

impl GestureKind {
    /// Channel name hosts subscribe to for this gesture
    pub fn channel(self) -> &'static str {
        match self {
            GestureKind::LongPress => "longpress",
            GestureKind::Swipe => "swipe",
            GestureKind::Pinch => "pinch",
        }
    }
}

impl GestureEvent {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureEvent::LongPress { .. } => GestureKind::LongPress,
            GestureEvent::Swipe { .. } => GestureKind::Swipe,
            GestureEvent::Pinch { .. } => GestureKind::Pinch,
        }
    }

    /// Channel name of this event
    pub fn channel(&self) -> &'static str {
        self.kind().channel()
    }
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureEvent::LongPress { x, y } => write!(f, "longpress at ({x}, {y})"),
            GestureEvent::Swipe {
                x,
                y,
                angle,
                velocity,
            } => write!(
                f,
                "swipe from ({x}, {y}) angle {:.1}° velocity {velocity}px/sample",
                angle.to_degrees()
            ),
            GestureEvent::Pinch { delta, ratio } => {
                write!(f, "pinch delta {delta:+}px ratio {ratio:.2}")
            }
        }
    }
}
