use super::LocalSlot;
use crate::domain::registry::Slot;
use crate::domain::wallet::WalletHandle;
use crate::ports::SlotPort;

thread_local! {
    static WALLETS: LocalSlot<WalletHandle> = LocalSlot::new();
}

/// Ambient slot of the current execution context for Rust wallets.
///
/// The registry is single-threaded, so each thread is its own page: scripts on
/// the same thread share one registry and never observe another thread's.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSlot;

impl SlotPort<WalletHandle> for ThreadSlot {
    fn with_slot<R>(&self, f: impl FnOnce(&mut Slot<WalletHandle>) -> R) -> R {
        WALLETS.with(|slot| slot.with_slot(f))
    }
}
