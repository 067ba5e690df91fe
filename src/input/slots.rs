//! Host touch id to slot mapping

use std::collections::HashMap;

use tracing::warn;

use super::sample::TouchSlot;

/// Maximum number of concurrently allocated slots
pub const MAX_SLOTS: usize = 10;

/// Maps host touch ids onto small, stable touch slots
///
/// Hosts usually report touches with large or reused ids. The allocator hands
/// out the lowest free slot when a touch starts and keeps it until the touch
/// ends, so the first finger down is always [`TouchSlot::PRIMARY`] while it
/// stays down.
#[derive(Debug, Default)]
pub struct SlotAllocator {
    assigned: HashMap<u64, TouchSlot>,
}

impl SlotAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a slot to a starting touch
    ///
    /// Returns the existing slot if the id is already live, or `None` when
    /// every slot is taken.
    pub fn acquire(&mut self, id: u64) -> Option<TouchSlot> {
        if let Some(slot) = self.assigned.get(&id) {
            return Some(*slot);
        }

        let free = (0..MAX_SLOTS as u8)
            .map(TouchSlot)
            .find(|slot| !self.assigned.values().any(|s| s == slot));

        match free {
            Some(slot) => {
                self.assigned.insert(id, slot);
                Some(slot)
            }
            None => {
                warn!(id, "No free touch slot, ignoring touch");
                None
            }
        }
    }

    /// Slot of a live touch
    pub fn lookup(&self, id: u64) -> Option<TouchSlot> {
        self.assigned.get(&id).copied()
    }

    /// Frees the slot of an ending touch
    pub fn release(&mut self, id: u64) -> Option<TouchSlot> {
        self.assigned.remove(&id)
    }

    /// Number of live touches
    pub fn active_count(&self) -> usize {
        self.assigned.len()
    }

    /// Forgets every live touch
    pub fn clear(&mut self) {
        self.assigned.clear();
    }
}
