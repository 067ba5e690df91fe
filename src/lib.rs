//! Touch gestures
//!
//! Turns raw press/move/release pointer samples into long-press, swipe and
//! pinch events.

/// Build-time information (rustc, target, timestamp)
pub mod build_info;

/// Recognizer configuration and profile loading
pub mod config;

/// Self-diagnostics for configuration and detectors
pub mod diagnostics;

/// Gesture detectors and the recognizer that drives them
pub mod gesture;

/// Pointer samples, touch slots and replay traces
pub mod input;
