//! Pointer sample collection from winit touch events

use winit::event::{Touch, TouchPhase, WindowEvent};

use super::sample::{PointerSample, SampleKind};
use super::slots::SlotAllocator;

/// Turns winit touch events into slot-indexed pointer samples
pub struct TouchCollector {
    slots: SlotAllocator,
    scale_factor: f64,
}

impl TouchCollector {
    pub fn new() -> Self {
        Self {
            slots: SlotAllocator::new(),
            scale_factor: 1.0,
        }
    }

    /// Update scale factor (DPI scaling)
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Handle a winit window event, yielding a sample for touch events
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<PointerSample> {
        match event {
            WindowEvent::Touch(touch) => self.handle_touch(touch),
            _ => None,
        }
    }

    /// Convert one touch into a sample in logical pixels
    pub fn handle_touch(&mut self, touch: &Touch) -> Option<PointerSample> {
        let (slot, kind) = match touch.phase {
            TouchPhase::Started => (self.slots.acquire(touch.id)?, SampleKind::Press),
            TouchPhase::Moved => (self.slots.lookup(touch.id)?, SampleKind::Move),
            // A cancelled touch ends the same way as a lifted one
            TouchPhase::Ended | TouchPhase::Cancelled => {
                (self.slots.release(touch.id)?, SampleKind::Release)
            }
        };

        let x = (touch.location.x / self.scale_factor).round() as i32;
        let y = (touch.location.y / self.scale_factor).round() as i32;

        Some(PointerSample::new(slot, kind, x, y))
    }

    /// Drop every live touch, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}

impl Default for TouchCollector {
    fn default() -> Self {
        Self::new()
    }
}
