use crate::domain::registry::Slot;
use crate::ports::SlotPort;
use std::cell::RefCell;

/// Slot owned by a single execution context.
pub struct LocalSlot<H> {
    slot: RefCell<Slot<H>>,
}

impl<H> LocalSlot<H> {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(Slot::Empty),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.slot.borrow().is_resolved()
    }
}

impl<H> Default for LocalSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SlotPort<H> for LocalSlot<H> {
    fn with_slot<R>(&self, f: impl FnOnce(&mut Slot<H>) -> R) -> R {
        f(&mut self.slot.borrow_mut())
    }
}
