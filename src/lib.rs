#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod errors;
pub mod facades;
pub mod platform;
pub mod ports;

#[cfg(target_arch = "wasm32")]
pub mod global;

pub use domain::registry::{
    Announcer, Listener, Registrar, Registry, RegistryEvent, Slot, Unsubscribe,
};
pub use domain::wallet::{Handle, Wallet, WalletAccount, WalletHandle, WALLET_VERSION};
pub use errors::WalletsError;
pub use facades::native::{announce, initialize};
pub use platform::Platform;

/// Name of the navigator property shared by every script on the page.
pub const WALLETS_PROPERTY: &str = "wallets";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start_app() -> Result<(), wasm_bindgen::JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
