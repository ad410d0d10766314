use crate::errors::WalletsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Events emitted by the registry.
///
/// Listeners receive exactly the wallets the event is about, never the full
/// registered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistryEvent {
    /// Wallets were added.
    Register,
    /// Wallets were removed.
    Unregister,
}

impl RegistryEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryEvent::Register => "register",
            RegistryEvent::Unregister => "unregister",
        }
    }
}

impl fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistryEvent {
    type Err = WalletsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "register" => Ok(RegistryEvent::Register),
            "unregister" => Ok(RegistryEvent::Unregister),
            other => Err(WalletsError::UnknownEvent(other.to_string())),
        }
    }
}
