//! Detector trait for gesture state machines

use std::any::Any;

use super::events::GestureEvent;
use crate::input::PointerSample;

/// Whether a sample continues to lower priority detectors and the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Sample not claimed, keep delivering it
    #[default]
    Propagate,
    /// Sample claimed by a gesture, stop delivering it
    Consume,
}

impl Propagation {
    pub fn is_consumed(self) -> bool {
        matches!(self, Propagation::Consume)
    }
}

/// Outcome of offering one sample to one detector
///
/// At most one gesture can be carried per sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Recognition {
    pub propagation: Propagation,
    pub gesture: Option<GestureEvent>,
}

impl Recognition {
    /// Nothing recognized, sample passes through
    pub fn pass() -> Self {
        Self::default()
    }

    /// Sample claimed without a gesture
    pub fn consume() -> Self {
        Self {
            propagation: Propagation::Consume,
            gesture: None,
        }
    }

    /// Sample claimed by a completed gesture
    pub fn emit(gesture: GestureEvent) -> Self {
        Self {
            propagation: Propagation::Consume,
            gesture: Some(gesture),
        }
    }
}

/// State shared between detectors of one recognizer
///
/// The pinch flag is written by the pinch detector only; every other
/// detector can read it.
#[derive(Debug, Clone, Default)]
pub struct SharedTouchState {
    pinch_active: bool,
}

impl SharedTouchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while two fingers are down in pinch mode
    pub fn pinch_active(&self) -> bool {
        self.pinch_active
    }

    pub(crate) fn set_pinch_active(&mut self, active: bool) {
        self.pinch_active = active;
    }
}

/// Trait for gesture state machines fed by the recognizer
///
/// Detectors are called in priority order (highest first). When a detector
/// consumes a sample, lower priority detectors do not see it.
pub trait GestureDetector: Send {
    /// Name of this detector for debugging
    fn name(&self) -> &str;

    /// Priority for sample routing (higher = earlier)
    fn priority(&self) -> u32;

    /// Offer one pointer sample to the detector
    ///
    /// Only the detector's own state and, for the pinch detector, the shared
    /// pinch flag may change.
    fn handle_sample(
        &mut self,
        sample: &PointerSample,
        shared: &mut SharedTouchState,
    ) -> Recognition;

    /// Return to the idle state
    fn reset(&mut self);

    /// Downcast to concrete type for inspecting detector-specific state
    fn as_any(&self) -> &dyn Any;
}
