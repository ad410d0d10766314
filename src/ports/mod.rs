/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The registry domain only talks to the host through these traits; adapters
/// provide the browser and native implementations.

pub mod logger;
pub mod slot;

pub use logger::LoggerPort;
pub use slot::SlotPort;
