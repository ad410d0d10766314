use super::events::RegistryEvent;
use crate::domain::wallet::Handle;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ptr;
use std::rc::{Rc, Weak};

/// Listener invoked with the wallets an event is about.
pub type Listener<H> = Rc<dyn Fn(&[H])>;

/// Function returned by `register` and `on`. Calling it again after the
/// first call has no effect.
pub type Unsubscribe = Box<dyn Fn()>;

/// Callback supplied by a wallet provider to announce its wallets.
pub type Announcer<H> = Box<dyn FnOnce(&Registrar<H>)>;

struct State<H> {
    registered: Vec<H>,
    listeners: HashMap<RegistryEvent, Vec<Listener<H>>>,
}

/// Live set of registered wallets and the listeners observing it.
///
/// Cloning yields another handle to the same registry. All operations are
/// synchronous and no internal borrow is held while listeners or announcers
/// run, so they are free to call back into the registry.
pub struct Registry<H> {
    state: Rc<RefCell<State<H>>>,
}

impl<H> Clone for Registry<H> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<H: Handle> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle> Registry<H> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                registered: Vec::new(),
                listeners: HashMap::new(),
            })),
        }
    }

    /// Returns true when both handles refer to the same registry instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Runs each announcer in order with a capability limited to `register`.
    ///
    /// A panicking announcer is not isolated: the panic reaches the caller and
    /// the remaining announcers do not run.
    pub fn push<I>(&self, announcers: I)
    where
        I: IntoIterator<Item = Announcer<H>>,
    {
        let registrar = self.registrar();
        for announcer in announcers {
            announcer(&registrar);
        }
    }

    /// Capability to register wallets, and nothing else.
    pub fn registrar(&self) -> Registrar<H> {
        Registrar {
            registry: self.clone(),
        }
    }

    /// Adds the wallets that are not registered yet and notifies `register`
    /// listeners with exactly those.
    ///
    /// The returned function removes the wallets added by this call that are
    /// still registered. When nothing was added it is a no-op, so a stale
    /// reference to an already registered wallet cannot be used to remove it.
    pub fn register<I>(&self, wallets: I) -> Unsubscribe
    where
        I: IntoIterator<Item = H>,
    {
        let added = {
            let mut state = self.state.borrow_mut();
            let mut added: Vec<H> = Vec::new();
            for wallet in wallets {
                let known = state.registered.iter().any(|w| w.same(&wallet))
                    || added.iter().any(|w| w.same(&wallet));
                if !known {
                    added.push(wallet);
                }
            }
            state.registered.extend(added.iter().cloned());
            added
        };

        if added.is_empty() {
            return Box::new(|| {});
        }

        self.emit(RegistryEvent::Register, &added);

        let state = Rc::downgrade(&self.state);
        Box::new(move || unregister(&state, &added))
    }

    /// Point-in-time copy of the registered wallets, in registration order.
    pub fn get(&self) -> Vec<H> {
        self.state.borrow().registered.clone()
    }

    /// Subscribes `listener` to `event`. Every call is an independent
    /// subscription.
    pub fn on<F>(&self, event: RegistryEvent, listener: F) -> Unsubscribe
    where
        F: Fn(&[H]) + 'static,
    {
        self.subscribe(event, Rc::new(listener))
    }

    /// Subscribes a shared listener. The returned function removes every
    /// subscription of this same listener to `event`.
    pub fn subscribe(&self, event: RegistryEvent, listener: Listener<H>) -> Unsubscribe {
        self.state
            .borrow_mut()
            .listeners
            .entry(event)
            .or_default()
            .push(Rc::clone(&listener));

        let state = Rc::downgrade(&self.state);
        Box::new(move || {
            if let Some(state) = state.upgrade() {
                if let Some(listeners) = state.borrow_mut().listeners.get_mut(&event) {
                    listeners.retain(|l| !ptr::addr_eq(Rc::as_ptr(l), Rc::as_ptr(&listener)));
                }
            }
        })
    }

    pub fn listener_count(&self, event: RegistryEvent) -> usize {
        self.state
            .borrow()
            .listeners
            .get(&event)
            .map_or(0, Vec::len)
    }

    fn emit(&self, event: RegistryEvent, wallets: &[H]) {
        emit(&self.state, event, wallets);
    }
}

fn emit<H>(state: &Rc<RefCell<State<H>>>, event: RegistryEvent, wallets: &[H]) {
    // Snapshot so listeners may subscribe, unsubscribe or register while we dispatch.
    let listeners = state
        .borrow()
        .listeners
        .get(&event)
        .cloned()
        .unwrap_or_default();
    for listener in listeners {
        listener(wallets);
    }
}

fn unregister<H: Handle>(state: &Weak<RefCell<State<H>>>, added: &[H]) {
    let Some(state) = state.upgrade() else {
        return;
    };

    let removed: Vec<H> = {
        let mut inner = state.borrow_mut();
        let removed: Vec<H> = added
            .iter()
            .filter(|wallet| inner.registered.iter().any(|w| w.same(wallet)))
            .cloned()
            .collect();
        inner
            .registered
            .retain(|w| !removed.iter().any(|r| r.same(w)));
        removed
    };

    if !removed.is_empty() {
        emit(&state, RegistryEvent::Unregister, &removed);
    }
}

/// The only capability handed to announcing wallet providers: they can add
/// wallets (and remove them through the returned function) but cannot list
/// other wallets or observe the registry.
pub struct Registrar<H> {
    registry: Registry<H>,
}

impl<H> Clone for Registrar<H> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<H: Handle> Registrar<H> {
    pub fn register<I>(&self, wallets: I) -> Unsubscribe
    where
        I: IntoIterator<Item = H>,
    {
        self.registry.register(wallets)
    }
}
