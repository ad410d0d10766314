use super::converters;
use crate::adapters::wasm::{NavigatorSlot, SlotValue};
use crate::domain::registry::{Announcer, Registrar, Registry, RegistryEvent};
use crate::platform::Platform;
use js_sys::{Array, Object, Reflect};
use serde_wasm_bindgen::from_value;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    /// Registries that could not be installed on their navigator. They stay
    /// the registry of that page so every resolver still shares one instance.
    static DETACHED: RefCell<Vec<(Object, JsValue)>> = const { RefCell::new(Vec::new()) };
}

/// Returns the page's wallet registry, `navigator.wallets`.
///
/// The first call on a page replaces the queue of announcer callbacks left by
/// wallet scripts with a registry object `{ push, register, get, on }` and then
/// runs the queued callbacks in order. Later calls, from this module or any
/// other script following the same protocol, return that same object. Without
/// a navigator the registry is local to the caller.
#[wasm_bindgen]
pub fn initialize() -> Result<JsValue, JsValue> {
    match NavigatorSlot::current() {
        Ok(slot) => resolve(&Platform::new(), &slot),
        Err(err) => {
            Platform::new()
                .logger()
                .warn(&format!("{err}, using a page-local wallet registry"));
            Ok(registry_to_js(&Registry::new())?.into())
        }
    }
}

/// Same as [`initialize`], against the given navigator object.
pub fn initialize_on(navigator: Object) -> Result<JsValue, JsValue> {
    resolve(&Platform::new(), &NavigatorSlot::new(navigator))
}

fn detached(navigator: &Object) -> Option<JsValue> {
    DETACHED.with(|detached| {
        detached
            .borrow()
            .iter()
            .find(|(owner, _)| Object::is(owner, navigator))
            .map(|(_, wallets)| wallets.clone())
    })
}

/// Resolves the registry held by `slot`, creating it when the slot only holds
/// a queue. The queue drains exactly once, whether or not the registry could be
/// installed on the navigator.
fn resolve(platform: &Platform, slot: &NavigatorSlot) -> Result<JsValue, JsValue> {
    if let Some(wallets) = detached(slot.navigator()) {
        return Ok(wallets);
    }

    let queue = match slot.read()? {
        SlotValue::Resolved(wallets) => return Ok(wallets),
        SlotValue::Pending(queue) => queue,
        SlotValue::Missing => Array::new(),
    };

    let registry = Registry::new();
    let wallets = registry_to_js(&registry)?;

    // Visible before the queue drains, so announcers calling back in find it.
    if let Err(err) = slot.install(&wallets) {
        platform.logger().error(&format!(
            "Failed to install wallet registry, keeping it page-local: {err}"
        ));
        DETACHED.with(|detached| {
            detached
                .borrow_mut()
                .push((slot.navigator().clone(), wallets.clone().into()))
        });
    }

    platform.logger().debug(&format!(
        "Wallet registry created, running {} queued announcer(s)",
        queue.length()
    ));
    registry.push(queue.iter().map(js_announcer));

    Ok(wallets.into())
}

/// Announces a JavaScript wallet object to the page's registry, queueing the
/// announcement when no registry exists yet.
#[wasm_bindgen(js_name = registerWallet)]
pub fn register_wallet(wallet: JsValue) -> Result<(), JsValue> {
    register_wallet_with(&NavigatorSlot::current()?, wallet)
}

/// Same as [`register_wallet`], against the given navigator object.
pub fn register_wallet_on(navigator: Object, wallet: JsValue) -> Result<(), JsValue> {
    register_wallet_with(&NavigatorSlot::new(navigator), wallet)
}

fn register_wallet_with(slot: &NavigatorSlot, wallet: JsValue) -> Result<(), JsValue> {
    let target: JsValue = match detached(slot.navigator()) {
        Some(wallets) => wallets,
        None => match slot.read()? {
            SlotValue::Missing => slot.init_queue()?.into(),
            SlotValue::Pending(queue) => queue.into(),
            SlotValue::Resolved(wallets) => wallets,
        },
    };
    push_announcer(&target, wallet)
}

/// `target.push(({ register }) => register(wallet))`, where `target` is either
/// the pending queue or a registry.
fn push_announcer(target: &JsValue, wallet: JsValue) -> Result<(), JsValue> {
    let announcer = Closure::once_into_js(move |api: JsValue| -> Result<JsValue, JsValue> {
        let register = Reflect::get(&api, &JsValue::from_str("register"))?;
        converters::to_function(register, "register")?.call1(&JsValue::UNDEFINED, &wallet)
    });

    let push = Reflect::get(target, &JsValue::from_str("push"))?;
    converters::to_function(push, "navigator.wallets.push")?.call1(target, &announcer)?;
    Ok(())
}

/// Turns a JavaScript announcer callback into one the registry can run.
///
/// Exceptions thrown by the callback are rethrown to whoever triggered the
/// push.
fn js_announcer(callback: JsValue) -> Announcer<JsValue> {
    Box::new(move |registrar: &Registrar<JsValue>| {
        let result = registrar_to_js(registrar.clone()).and_then(|api| {
            converters::to_function(callback, "wallet announcer")?
                .call1(&JsValue::UNDEFINED, &api)
        });
        if let Err(err) = result {
            wasm_bindgen::throw_val(err);
        }
    })
}

fn register_function(registrar: Registrar<JsValue>) -> JsValue {
    converters::variadic(Closure::new(move |wallets: Array| -> JsValue {
        let off = registrar.register(wallets.iter());
        converters::unsubscribe_to_js(off).into()
    }))
    .into()
}

/// Object handed to announcer callbacks: `{ register }` only.
fn registrar_to_js(registrar: Registrar<JsValue>) -> Result<JsValue, JsValue> {
    let register = register_function(registrar);
    Ok(converters::frozen_object(&[("register", register)])?.into())
}

fn registry_to_js(registry: &Registry<JsValue>) -> Result<Object, JsValue> {
    let push = {
        let registry = registry.clone();
        converters::variadic(Closure::new(move |callbacks: Array| -> JsValue {
            registry.push(callbacks.iter().map(js_announcer));
            JsValue::UNDEFINED
        }))
    };

    let register = register_function(registry.registrar());

    let get = {
        let registry = registry.clone();
        Closure::<dyn Fn() -> JsValue>::new(move || -> JsValue {
            registry.get().into_iter().collect::<Array>().into()
        })
        .into_js_value()
    };

    let on = {
        let registry = registry.clone();
        converters::variadic(Closure::new(move |args: Array| -> JsValue {
            let event: RegistryEvent = match from_value(args.get(0)) {
                Ok(event) => event,
                Err(err) => {
                    Platform::new().logger().warn(&format!(
                        "Ignoring listener for unknown wallet registry event: {err}"
                    ));
                    return converters::noop().into();
                }
            };
            let listener = match converters::to_function(args.get(1), "listener") {
                Ok(listener) => listener,
                Err(err) => wasm_bindgen::throw_val(err),
            };
            let off = registry.on(event, move |wallets: &[JsValue]| {
                let args: Array = wallets.iter().collect();
                if let Err(err) = listener.apply(&JsValue::UNDEFINED, &args) {
                    wasm_bindgen::throw_val(err);
                }
            });
            Platform::new().logger().debug(&format!(
                "Wallet registry listener added for `{event}`, {} active",
                registry.listener_count(event)
            ));
            converters::unsubscribe_to_js(off).into()
        }))
    };

    converters::frozen_object(&[
        ("push", push.into()),
        ("register", register),
        ("get", get),
        ("on", on.into()),
    ])
}
