use super::registry::{Announcer, Registry};
use crate::domain::wallet::Handle;
use crate::platform::Platform;
use crate::ports::SlotPort;

/// Value held by the ambient slot shared by every script of a page.
pub enum Slot<H> {
    /// Nobody touched the slot yet.
    Empty,
    /// Announcers queued before any registry existed, in arrival order.
    Pending(Vec<Announcer<H>>),
    /// The page's registry. Once set, it is never replaced.
    Resolved(Registry<H>),
}

impl<H> Default for Slot<H> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<H> Slot<H> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Slot::Resolved(_))
    }
}

/// Returns the registry of the current execution context, creating it on the
/// first call.
///
/// Without a shared slot there is nothing to coordinate with, so a fresh
/// registry local to the caller is returned. Otherwise the first caller
/// replaces the pending queue with a new registry and then runs every queued
/// announcer against it. The slot is released before announcers run, so an
/// announcer resolving or announcing again observes the registry.
pub fn resolve<H, S>(platform: &Platform, slot: Option<&S>) -> Registry<H>
where
    H: Handle,
    S: SlotPort<H>,
{
    let Some(slot) = slot else {
        return Registry::new();
    };

    let (registry, queued) = slot.with_slot(|current| {
        if let Slot::Resolved(registry) = current {
            return (registry.clone(), None);
        }
        let registry = Registry::new();
        let queued = match std::mem::replace(current, Slot::Resolved(registry.clone())) {
            Slot::Pending(queued) => queued,
            _ => Vec::new(),
        };
        (registry, Some(queued))
    });

    if let Some(queued) = queued {
        platform.logger().log(&format!(
            "Wallet registry created, running {} queued announcer(s)",
            queued.len()
        ));
        registry.push(queued);
    }

    registry
}

/// Announces wallets from a provider script.
///
/// The announcer runs immediately when the page already has a registry and is
/// queued otherwise, to run once the registry gets resolved.
pub fn announce<H, S>(platform: &Platform, slot: Option<&S>, announcer: Announcer<H>)
where
    H: Handle,
    S: SlotPort<H>,
{
    let Some(slot) = slot else {
        platform
            .logger()
            .warn("No shared wallet slot available, announcement dropped");
        return;
    };

    let mut pending = 0;
    let ready = slot.with_slot(|current| match current {
        Slot::Resolved(registry) => Some((registry.clone(), announcer)),
        Slot::Pending(queued) => {
            queued.push(announcer);
            pending = queued.len();
            None
        }
        Slot::Empty => {
            *current = Slot::Pending(vec![announcer]);
            pending = 1;
            None
        }
    });

    match ready {
        Some((registry, announcer)) => registry.push([announcer]),
        None => platform
            .logger()
            .debug(&format!("Wallet announcement queued, {pending} pending")),
    }
}
