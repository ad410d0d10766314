pub mod bootstrap;
pub mod events;
#[allow(clippy::module_inception)]
pub mod registry;

pub use bootstrap::{announce, resolve, Slot};
pub use events::RegistryEvent;
pub use registry::{Announcer, Listener, Registrar, Registry, Unsubscribe};
