use crate::errors::WalletsError;
use js_sys::Object;
use wasm_bindgen::prelude::JsValue;
use wasm_bindgen::JsCast;
use web_sys::{DedicatedWorkerGlobalScope, Window};

pub fn get_global_scope() -> Result<JsValue, WalletsError> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    // Fallback to window
    let window = web_sys::window().ok_or(WalletsError::NavigatorUnavailable)?;
    Ok(JsValue::from(window))
}

/// Navigator of the current global scope, as a plain object so the shared
/// `wallets` property can be read and defined on it.
pub fn get_navigator() -> Result<Object, WalletsError> {
    let global = get_global_scope()?;

    let navigator: Object = if let Ok(worker) = global.clone().dyn_into::<DedicatedWorkerGlobalScope>() {
        worker.navigator().into()
    } else if let Ok(window) = global.dyn_into::<Window>() {
        window.navigator().into()
    } else {
        return Err(WalletsError::NavigatorUnavailable);
    };

    Ok(navigator)
}
