use crate::domain::registry::Slot;

/// Port for the ambient slot through which independently loaded scripts find
/// the page's registry.
pub trait SlotPort<H> {
    /// Runs `f` with exclusive access to the slot.
    ///
    /// `f` must not reach the slot again; callers release it before running
    /// announcers or listeners.
    fn with_slot<R>(&self, f: impl FnOnce(&mut Slot<H>) -> R) -> R;
}
