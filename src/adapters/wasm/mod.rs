/// WASM adapters - implementations using browser APIs.

pub mod console_logger;
pub mod error_conversions;
pub mod js_handle;
pub mod navigator_slot;

pub use console_logger::ConsoleLogger;
pub use navigator_slot::{NavigatorSlot, SlotValue};
