//! Raw pointer samples

use std::fmt;

/// Logical identifier for one concurrently tracked finger/pointer
///
/// Slots are 0-indexed: slot 0 is the primary finger, slot 1 the secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchSlot(pub u8);

impl TouchSlot {
    /// The first finger down
    pub const PRIMARY: TouchSlot = TouchSlot(0);
    /// The second finger down
    pub const SECONDARY: TouchSlot = TouchSlot(1);

    /// Index of this slot, for slot-indexed storage
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true for the primary slot
    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

impl fmt::Display for TouchSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleKind::Press => "press",
            SampleKind::Move => "move",
            SampleKind::Release => "release",
        };
        f.write_str(name)
    }
}

/// Phase of a pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Press,
    Move,
    Release,
}

/// Integer pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to this point, as floats for distance math
    pub fn offset_from(self, origin: Point) -> (f64, f64) {
        (
            f64::from(self.x) - f64::from(origin.x),
            f64::from(self.y) - f64::from(origin.y),
        )
    }
}

/// One pointer sample as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub slot: TouchSlot,
    pub kind: SampleKind,
    pub x: i32,
    pub y: i32,
}

impl PointerSample {
    pub fn new(slot: TouchSlot, kind: SampleKind, x: i32, y: i32) -> Self {
        Self { slot, kind, x, y }
    }

    pub fn press(slot: u8, x: i32, y: i32) -> Self {
        Self::new(TouchSlot(slot), SampleKind::Press, x, y)
    }

    pub fn moved(slot: u8, x: i32, y: i32) -> Self {
        Self::new(TouchSlot(slot), SampleKind::Move, x, y)
    }

    pub fn release(slot: u8, x: i32, y: i32) -> Self {
        Self::new(TouchSlot(slot), SampleKind::Release, x, y)
    }

    /// Position carried by this sample
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
