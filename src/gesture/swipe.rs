//! Swipe detection
//!
//! Measures the straight-line displacement of a press-move-release on the
//! primary finger and divides it by the number of Move samples in between.

use std::any::Any;

use tracing::debug;

use super::detector::{GestureDetector, Recognition, SharedTouchState};
use super::events::GestureEvent;
use crate::input::{Point, PointerSample, SampleKind};

pub const SWIPE_PRIORITY: u32 = 20;

/// Detects fast flicks of the primary finger
#[derive(Debug)]
pub struct SwipeDetector {
    threshold: i32,
    frames: u32,
    start: Option<Point>,
}

impl SwipeDetector {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            frames: 0,
            start: None,
        }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Move samples seen since the press
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Press position of the swipe in progress
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    fn clear(&mut self) {
        self.frames = 0;
        self.start = None;
    }

    fn handle_release(&mut self, end: Point) -> Recognition {
        let Some(start) = self.start else {
            return Recognition::pass();
        };
        let frames = self.frames;
        self.clear();

        let Some(velocity) = swipe_velocity(start, end, frames) else {
            return Recognition::pass();
        };
        if velocity <= self.threshold {
            return Recognition::pass();
        }

        let (dx, dy) = end.offset_from(start);
        let angle = (-dy).atan2(dx);
        debug!(x = start.x, y = start.y, angle, velocity, "Swipe recognized");

        Recognition::emit(GestureEvent::Swipe {
            x: start.x,
            y: start.y,
            angle,
            velocity,
        })
    }
}

/// Rounded displacement per Move sample, `None` without any Move
pub fn swipe_velocity(start: Point, end: Point, frames: u32) -> Option<i32> {
    if frames == 0 {
        return None;
    }
    let (dx, dy) = end.offset_from(start);
    let distance = dx.hypot(dy).round() as i64;
    Some(i32::try_from(distance / i64::from(frames)).unwrap_or(i32::MAX))
}

impl GestureDetector for SwipeDetector {
    fn name(&self) -> &str {
        "swipe"
    }

    fn priority(&self) -> u32 {
        SWIPE_PRIORITY
    }

    fn handle_sample(
        &mut self,
        sample: &PointerSample,
        shared: &mut SharedTouchState,
    ) -> Recognition {
        if !sample.slot.is_primary() || shared.pinch_active() {
            self.clear();
            return Recognition::pass();
        }

        match sample.kind {
            SampleKind::Press => {
                self.frames = 0;
                self.start = Some(sample.position());
                Recognition::pass()
            }
            SampleKind::Move => {
                if self.start.is_some() {
                    self.frames = self.frames.saturating_add(1);
                }
                Recognition::pass()
            }
            SampleKind::Release => self.handle_release(sample.position()),
        }
    }

    fn reset(&mut self) {
        self.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
