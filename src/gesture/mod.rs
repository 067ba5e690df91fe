//! Gesture recognition
//!
//! Turns a slot-indexed pointer stream into long-press, swipe and pinch
//! events:
//! - Each detector is a small state machine owning its own state
//! - Detectors run in priority order; a consumed sample stops there
//! - The pinch detector publishes its mode so swipes stay quiet during a pinch
//!
//! # Architecture
//!
//! ```text
//! Pointer source → GestureRecognizer::dispatch
//!                         ↓
//!        LongPress (30) → Swipe (20) → Pinch (10)
//!                         ↓
//!                    GestureSink
//! ```
//!
//! # Usage
//!
//! ```
//! use touch_gestures::config::GestureConfig;
//! use touch_gestures::gesture::{GestureEvent, GestureRecognizer};
//! use touch_gestures::input::PointerSample;
//!
//! let mut recognizer =
//!     GestureRecognizer::new(GestureConfig::default(), Vec::<GestureEvent>::new());
//! recognizer.dispatch(PointerSample::press(0, 0, 0));
//! for x in 1..=5 {
//!     recognizer.dispatch(PointerSample::moved(0, x * 10, 0));
//! }
//! recognizer.dispatch(PointerSample::release(0, 1000, 0));
//!
//! assert!(matches!(recognizer.sink()[0], GestureEvent::Swipe { velocity: 200, .. }));
//! ```

mod detector;
mod events;
mod long_press;
mod pinch;
mod recognizer;
mod swipe;

pub use detector::{GestureDetector, Propagation, Recognition, SharedTouchState};
pub use events::{GestureEvent, GestureKind};
pub use long_press::LongPressDetector;
pub use pinch::{PinchDetector, aspect_ratio};
pub use recognizer::{GestureRecognizer, GestureSink};
pub use swipe::{SwipeDetector, swipe_velocity};
