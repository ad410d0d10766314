/// Adapters shared by every target.

pub mod local_slot;
pub mod thread_slot;

pub use local_slot::LocalSlot;
pub use thread_slot::ThreadSlot;
