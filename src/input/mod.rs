//! Pointer input plumbing
//!
//! Everything the recognizers consume: slot-indexed pointer samples, the
//! allocator that keeps host touch ids on stable slots, and the plain-text
//! trace format used for replays.

#[cfg(feature = "winit")]
mod collector;
mod sample;
mod slots;
pub mod trace;

#[cfg(feature = "winit")]
pub use collector::TouchCollector;
pub use sample::{Point, PointerSample, SampleKind, TouchSlot};
pub use slots::{MAX_SLOTS, SlotAllocator};
pub use trace::{TraceError, parse_trace};
