use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Version of the wallet interface implemented by this crate.
pub const WALLET_VERSION: &str = "1.0.0";

/// A wallet provider as seen by apps.
///
/// The registry never inspects these properties: it tracks wallets by
/// reference only. Capability negotiation (connect, sign, ...) happens between
/// the app and the wallet through the advertised `features`.
pub trait Wallet {
    fn version(&self) -> &str {
        WALLET_VERSION
    }

    /// Name displayed by apps. Not unique.
    fn name(&self) -> &str;

    /// Data URI of a base64-encoded SVG or PNG image.
    fn icon(&self) -> &str;

    fn chains(&self) -> &[String];

    /// Identifiers such as `standard:connect` or `solana:signTransaction`.
    fn features(&self) -> &[String];

    fn events(&self) -> &[String] {
        &[]
    }

    /// Accounts the app is already authorized to use.
    fn accounts(&self) -> Vec<WalletAccount>;
}

/// Handle type of the Rust-native registry.
pub type WalletHandle = Rc<dyn Wallet>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    pub address: String,
    pub public_key: Vec<u8>,
    pub chains: Vec<String>,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl WalletAccount {
    pub fn new(address: impl Into<String>, public_key: Vec<u8>) -> Self {
        Self {
            address: address.into(),
            public_key,
            chains: Vec::new(),
            features: Vec::new(),
            label: None,
            icon: None,
        }
    }
}
