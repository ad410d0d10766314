/// Rust-typed entry points. Compiled on every target: a Rust wallet provider
/// running in the browser uses the same functions as native code.
pub mod wallets;

pub use wallets::{announce, initialize};
