
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Mutex;
use test_utils::{names, wallet, EventLog};
use wallet_registry::adapters::LocalSlot;
use wallet_registry::domain::registry::{announce, resolve};
use wallet_registry::ports::LoggerPort;
use wallet_registry::{Announcer, Platform, Registrar, Registry, RegistryEvent, WalletHandle};

fn announcer_for(name: &'static str, calls: Rc<RefCell<Vec<&'static str>>>) -> Announcer<WalletHandle> {
    Box::new(move |registrar: &Registrar<WalletHandle>| {
        calls.borrow_mut().push(name);
        let _off = registrar.register([wallet(name)]);
    })
}

#[test]
fn test_resolve_is_idempotent() {
    let platform = Platform::new();
    let slot: LocalSlot<WalletHandle> = LocalSlot::new();

    let first: Registry<WalletHandle> = resolve(&platform, Some(&slot));
    let second = resolve(&platform, Some(&slot));
    let third = resolve(&platform, Some(&slot));

    assert!(slot.is_resolved());
    assert!(first.ptr_eq(&second));
    assert!(first.ptr_eq(&third));
}

#[test]
fn test_resolve_without_slot_is_page_local() {
    let platform = Platform::new();
    let first: Registry<WalletHandle> = resolve(&platform, None::<&LocalSlot<WalletHandle>>);
    let second: Registry<WalletHandle> = resolve(&platform, None::<&LocalSlot<WalletHandle>>);
    assert!(!first.ptr_eq(&second));
}

#[test]
fn test_queued_announcers_run_once_in_order() {
    let platform = Platform::new();
    let slot: LocalSlot<WalletHandle> = LocalSlot::new();
    let calls = Rc::new(RefCell::new(Vec::new()));

    announce(&platform, Some(&slot), announcer_for("x", calls.clone()));
    announce(&platform, Some(&slot), announcer_for("y", calls.clone()));
    assert!(calls.borrow().is_empty());
    assert!(!slot.is_resolved());

    let registry = resolve(&platform, Some(&slot));
    assert_eq!(names(&registry.get()), ["x", "y"]);

    resolve(&platform, Some(&slot));
    assert_eq!(*calls.borrow(), vec!["x", "y"]);
}

#[test]
fn test_announce_after_resolve_runs_immediately() {
    let platform = Platform::new();
    let slot: LocalSlot<WalletHandle> = LocalSlot::new();
    let registry = resolve(&platform, Some(&slot));
    let log = EventLog::default();
    let _off = registry.on(RegistryEvent::Register, log.listener(RegistryEvent::Register));

    announce(
        &platform,
        Some(&slot),
        announcer_for("late", Rc::new(RefCell::new(Vec::new()))),
    );

    assert_eq!(names(&registry.get()), ["late"]);
    assert_eq!(
        log.take(),
        vec![(RegistryEvent::Register, vec!["late".to_string()])]
    );
}

#[test]
fn test_announcer_may_resolve_and_announce_again() {
    let platform = Platform::new();
    let slot: Rc<LocalSlot<WalletHandle>> = Rc::new(LocalSlot::new());
    let seen_same_registry = Rc::new(Cell::new(false));

    let inner_slot = slot.clone();
    let seen = seen_same_registry.clone();
    announce(
        &platform,
        Some(&*slot),
        Box::new(move |registrar: &Registrar<WalletHandle>| {
            let _off = registrar.register([wallet("outer")]);
            let platform = Platform::new();
            let registry = resolve(&platform, Some(&*inner_slot));
            seen.set(registry.get().len() == 1);
            announce(
                &platform,
                Some(&*inner_slot),
                Box::new(|registrar: &Registrar<WalletHandle>| {
                    let _off = registrar.register([wallet("nested")]);
                }),
            );
        }),
    );

    let registry = resolve(&platform, Some(&*slot));
    assert!(seen_same_registry.get());
    assert_eq!(names(&registry.get()), ["outer", "nested"]);
}

struct RecordingLogger {
    debugs: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingLogger {
    const fn new() -> Self {
        Self {
            debugs: Mutex::new(Vec::new()),
            warnings: Mutex::new(Vec::new()),
        }
    }
}

impl LoggerPort for RecordingLogger {
    fn debug(&self, message: &str) {
        self.debugs.lock().unwrap().push(message.to_string());
    }

    fn log(&self, _message: &str) {}

    fn error(&self, _message: &str) {}

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

static RECORDER: RecordingLogger = RecordingLogger::new();
static QUEUE_RECORDER: RecordingLogger = RecordingLogger::new();

#[test]
fn test_announce_without_slot_is_dropped() {
    let platform = Platform::with_logger(&RECORDER);
    let called = Rc::new(Cell::new(false));
    let flag = called.clone();
    announce(
        &platform,
        None::<&LocalSlot<WalletHandle>>,
        Box::new(move |_: &Registrar<WalletHandle>| flag.set(true)),
    );

    assert!(!called.get());
    assert_eq!(RECORDER.warnings.lock().unwrap().len(), 1);
}

#[test]
fn test_announce_logs_queue_size() {
    let platform = Platform::with_logger(&QUEUE_RECORDER);
    let slot: LocalSlot<WalletHandle> = LocalSlot::new();
    let calls = Rc::new(RefCell::new(Vec::new()));

    announce(&platform, Some(&slot), announcer_for("a", calls.clone()));
    announce(&platform, Some(&slot), announcer_for("b", calls.clone()));

    let debugs = QUEUE_RECORDER.debugs.lock().unwrap().clone();
    assert_eq!(
        debugs,
        [
            "Wallet announcement queued, 1 pending",
            "Wallet announcement queued, 2 pending"
        ]
    );
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_global_initialize_shares_one_registry() {
    wallet_registry::announce(|registrar| {
        let _off = registrar.register([wallet("early")]);
    });

    let app = wallet_registry::initialize();
    let other_script = wallet_registry::initialize();
    assert!(app.ptr_eq(&other_script));
    assert_eq!(names(&app.get()), ["early"]);

    wallet_registry::announce(|registrar| {
        let _off = registrar.register([wallet("late")]);
    });
    assert_eq!(names(&other_script.get()), ["early", "late"]);
}

#[test]
fn test_global_registry_is_per_execution_context() {
    let here = wallet_registry::initialize();
    let _off = here.register([wallet("here")]);

    let elsewhere = std::thread::spawn(|| wallet_registry::initialize().get().len())
        .join()
        .unwrap();

    assert_eq!(elsewhere, 0);
    assert_eq!(here.get().len(), 1);
}
