use crate::adapters::ThreadSlot;
use crate::domain::registry::{bootstrap, Registrar, Registry};
use crate::domain::wallet::WalletHandle;
use crate::platform::Platform;

/// Returns the wallet registry of the current execution context.
///
/// Every call, from any module, returns the same registry. Announcers queued
/// through [`announce`] before the first call run exactly once, in order,
/// when the registry is created.
pub fn initialize() -> Registry<WalletHandle> {
    bootstrap::resolve(&Platform::new(), Some(&ThreadSlot))
}

/// Announces wallets from a provider.
///
/// The announcer only receives a [`Registrar`]: it can add its wallets (and
/// later remove them) but cannot list or observe other wallets.
pub fn announce<F>(announcer: F)
where
    F: FnOnce(&Registrar<WalletHandle>) + 'static,
{
    bootstrap::announce(&Platform::new(), Some(&ThreadSlot), Box::new(announcer));
}
