use crate::errors::WalletsError;
use crate::global::get_navigator;
use crate::WALLETS_PROPERTY;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Decoded content of `navigator.wallets`.
pub enum SlotValue {
    Missing,
    /// Announcer callbacks pushed by wallet scripts before any registry existed.
    Pending(Array),
    /// A registry object, installed by this module or by another script.
    Resolved(JsValue),
}

/// The `wallets` property of the page's navigator.
pub struct NavigatorSlot {
    navigator: Object,
}

impl NavigatorSlot {
    pub fn new(navigator: Object) -> Self {
        Self { navigator }
    }

    /// Slot of the current global scope (window or dedicated worker).
    pub fn current() -> Result<Self, WalletsError> {
        Ok(Self::new(get_navigator()?))
    }

    pub fn navigator(&self) -> &Object {
        &self.navigator
    }

    fn key() -> JsValue {
        JsValue::from_str(WALLETS_PROPERTY)
    }

    pub fn read(&self) -> Result<SlotValue, WalletsError> {
        let value = Reflect::get(&self.navigator, &Self::key())?;
        if value.is_undefined() || value.is_null() {
            Ok(SlotValue::Missing)
        } else if Array::is_array(&value) {
            Ok(SlotValue::Pending(value.unchecked_into()))
        } else {
            Ok(SlotValue::Resolved(value))
        }
    }

    /// Stores an empty announcer queue, as wallet scripts do with
    /// `navigator.wallets ||= []`.
    pub fn init_queue(&self) -> Result<Array, WalletsError> {
        let queue = Array::new();
        Reflect::set(&self.navigator, &Self::key(), &queue)?;
        Ok(queue)
    }

    /// Replaces the pending queue with the registry object.
    ///
    /// The property stays a plain writable, configurable data property, as if
    /// created by `navigator.wallets ||= []`, so wallet scripts assigning
    /// `navigator.wallets = navigator.wallets || []` keep working whether or
    /// not the property existed before.
    pub fn install(&self, wallets: &Object) -> Result<(), WalletsError> {
        let descriptor = Object::new();
        Reflect::set(&descriptor, &JsValue::from_str("value"), wallets)?;
        for attribute in ["writable", "enumerable", "configurable"] {
            Reflect::set(&descriptor, &JsValue::from_str(attribute), &JsValue::TRUE)?;
        }
        if Reflect::define_property(&self.navigator, &Self::key(), &descriptor)? {
            Ok(())
        } else {
            Err(WalletsError::js_error(format!(
                "navigator.{WALLETS_PROPERTY} cannot be redefined"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_read_missing_then_pending() {
        let slot = NavigatorSlot::new(Object::new());
        assert!(matches!(slot.read().unwrap(), SlotValue::Missing));

        let queue = slot.init_queue().unwrap();
        queue.push(&JsValue::from_str("callback"));
        match slot.read().unwrap() {
            SlotValue::Pending(pending) => assert_eq!(pending.length(), 1),
            _ => panic!("expected a pending queue"),
        }
    }

    #[wasm_bindgen_test]
    fn test_install_resolves_slot() {
        let slot = NavigatorSlot::new(Object::new());
        slot.init_queue().unwrap();

        let wallets = Object::new();
        slot.install(&wallets).unwrap();

        match slot.read().unwrap() {
            SlotValue::Resolved(value) => assert!(Object::is(&value, &wallets)),
            _ => panic!("expected the installed registry"),
        }
    }

    #[wasm_bindgen_test]
    fn test_installed_property_stays_assignable() {
        let navigator = Object::new();
        let slot = NavigatorSlot::new(navigator.clone());

        let wallets = Object::new();
        slot.install(&wallets).unwrap();

        // What wallet scripts do: `navigator.wallets = navigator.wallets || []`.
        let current = Reflect::get(&navigator, &JsValue::from_str("wallets")).unwrap();
        assert!(Reflect::set(&navigator, &JsValue::from_str("wallets"), &current).unwrap());

        let descriptor =
            Object::get_own_property_descriptor(&navigator, &JsValue::from_str("wallets"));
        let writable = Reflect::get(&descriptor, &JsValue::from_str("writable")).unwrap();
        assert_eq!(writable.as_bool(), Some(true));

        match slot.read().unwrap() {
            SlotValue::Resolved(value) => assert!(Object::is(&value, &wallets)),
            _ => panic!("expected the installed registry"),
        }
    }
}
