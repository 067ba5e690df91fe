//! Pinch detection
//!
//! Samples for the two fingers arrive interleaved, never paired. Each Move is
//! measured against the other finger's last known position, so one-sided
//! updates are enough to follow the distance between them.

use std::any::Any;

use tracing::debug;

use super::detector::{GestureDetector, Recognition, SharedTouchState};
use super::events::GestureEvent;
use crate::input::{Point, PointerSample, SampleKind};

/// Runs ahead of the single-finger detectors so it sees every Release,
/// including ones they consume
pub const PINCH_PRIORITY: u32 = 40;

/// Fingers taking part in a pinch: the primary and secondary slots
const TRACKED_SLOTS: usize = 2;

/// Detects two fingers moving apart or together
#[derive(Debug, Default)]
pub struct PinchDetector {
    positions: [Option<Point>; TRACKED_SLOTS],
    previous_distance: Option<i32>,
    active: bool,
}

impl PinchDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while both fingers are down in pinch mode
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last distance published (or first measured) in this pinch
    pub fn previous_distance(&self) -> Option<i32> {
        self.previous_distance
    }

    /// Last known position of a tracked slot
    pub fn position(&self, slot: usize) -> Option<Point> {
        self.positions.get(slot).copied().flatten()
    }

    fn end_pinch(&mut self) {
        debug!("Pinch mode ended");
        self.active = false;
        self.previous_distance = None;
        self.positions = [None; TRACKED_SLOTS];
    }

    fn handle_pinch_move(&mut self, slot: usize, position: Point) -> Recognition {
        debug_assert!(slot < TRACKED_SLOTS, "pinch slot {slot} out of range");

        let Some(other) = self.positions[1 - slot] else {
            self.positions[slot] = Some(position);
            return Recognition::consume();
        };

        let (dx, dy) = position.offset_from(other);
        let distance = dx.hypot(dy).round() as i32;

        // The baseline measurement leaves the stored position untouched
        let Some(previous) = self.previous_distance else {
            self.previous_distance = Some(distance);
            return Recognition::consume();
        };
        self.positions[slot] = Some(position);

        let delta = distance - previous;
        if delta == 0 {
            return Recognition::consume();
        }

        self.previous_distance = Some(distance);
        let ratio = aspect_ratio(dx, dy);
        debug!(delta, ratio, "Pinch recognized");
        Recognition::emit(GestureEvent::Pinch { delta, ratio })
    }
}

/// |dx / dy| of a two-finger offset, `f32::INFINITY` for a level offset
pub fn aspect_ratio(dx: f64, dy: f64) -> f32 {
    if dy == 0.0 {
        return f32::INFINITY;
    }
    (dx / dy).abs() as f32
}

impl GestureDetector for PinchDetector {
    fn name(&self) -> &str {
        "pinch"
    }

    fn priority(&self) -> u32 {
        PINCH_PRIORITY
    }

    fn handle_sample(
        &mut self,
        sample: &PointerSample,
        shared: &mut SharedTouchState,
    ) -> Recognition {
        let slot = sample.slot.index();
        if slot >= TRACKED_SLOTS {
            return Recognition::pass();
        }

        let outcome = match sample.kind {
            SampleKind::Press => {
                self.positions[slot] = Some(sample.position());
                if slot == 1 && self.positions[0].is_some() && !self.active {
                    debug!("Pinch mode started");
                    self.active = true;
                    self.previous_distance = None;
                }
                Recognition::pass()
            }
            SampleKind::Release => {
                if self.active {
                    self.end_pinch();
                } else {
                    self.positions[slot] = None;
                }
                Recognition::pass()
            }
            SampleKind::Move if self.active => self.handle_pinch_move(slot, sample.position()),
            SampleKind::Move => {
                self.positions[slot] = Some(sample.position());
                Recognition::pass()
            }
        };

        shared.set_pinch_active(self.active);
        outcome
    }

    fn reset(&mut self) {
        self.active = false;
        self.previous_distance = None;
        self.positions = [None; TRACKED_SLOTS];
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
