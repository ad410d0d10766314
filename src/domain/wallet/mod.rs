pub mod handle;
pub mod types;

pub use handle::Handle;
pub use types::{Wallet, WalletAccount, WalletHandle, WALLET_VERSION};
