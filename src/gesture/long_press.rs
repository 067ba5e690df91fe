//! Long-press detection
//!
//! Counts consecutive Move samples at an unchanged position on the primary
//! finger. The threshold is a sample count, so the hold time scales with the
//! host's sampling cadence.

use std::any::Any;

use tracing::debug;

use super::detector::{GestureDetector, Recognition, SharedTouchState};
use super::events::GestureEvent;
use crate::input::{Point, PointerSample, SampleKind};

pub const LONG_PRESS_PRIORITY: u32 = 30;

/// Detects a primary finger resting in place
#[derive(Debug)]
pub struct LongPressDetector {
    threshold: u32,
    /// Stationary samples seen, `None` when not tracking
    stillness: Option<u32>,
    last_position: Option<Point>,
}

impl LongPressDetector {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            stillness: None,
            last_position: None,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Stationary samples counted so far, `None` when not tracking
    pub fn stillness(&self) -> Option<u32> {
        self.stillness
    }

    pub fn is_tracking(&self) -> bool {
        self.stillness.is_some()
    }

    fn handle_move(&mut self, position: Point) -> Recognition {
        let previous = self.last_position.replace(position);

        let Some(count) = self.stillness else {
            return Recognition::pass();
        };

        if previous != Some(position) {
            // Finger slid: the hold restarts from where it is now
            self.stillness = Some(0);
            return Recognition::pass();
        }

        let count = count + 1;
        if count > self.threshold {
            self.stillness = None;
            debug!(x = position.x, y = position.y, "Long press recognized");
            return Recognition::emit(GestureEvent::LongPress {
                x: position.x,
                y: position.y,
            });
        }

        self.stillness = Some(count);
        Recognition::pass()
    }
}

impl GestureDetector for LongPressDetector {
    fn name(&self) -> &str {
        "long_press"
    }

    fn priority(&self) -> u32 {
        LONG_PRESS_PRIORITY
    }

    fn handle_sample(
        &mut self,
        sample: &PointerSample,
        _shared: &mut SharedTouchState,
    ) -> Recognition {
        if !sample.slot.is_primary() {
            // A second finger turns the hold into something else
            self.stillness = None;
            return Recognition::pass();
        }

        match sample.kind {
            SampleKind::Press => {
                self.stillness = Some(0);
                self.last_position = Some(sample.position());
                Recognition::pass()
            }
            SampleKind::Move => self.handle_move(sample.position()),
            SampleKind::Release => {
                self.stillness = None;
                Recognition::pass()
            }
        }
    }

    fn reset(&mut self) {
        self.stillness = None;
        self.last_position = None;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
