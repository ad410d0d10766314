use crate::domain::registry::Unsubscribe;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Shipped as a module snippet: building functions from source strings would
// need `unsafe-eval` under the page's CSP.
#[wasm_bindgen(inline_js = "
export function wrap_variadic(f) {
    return function () { return f(Array.prototype.slice.call(arguments)); };
}
export function noop() {
    return function () {};
}
")]
extern "C" {
    fn wrap_variadic(f: &JsValue) -> Function;

    #[wasm_bindgen(js_name = noop)]
    fn make_noop() -> Function;
}

/// Wraps `f` into a JavaScript function that hands all of its call arguments
/// to `f` as one array, so `push(a, b)` and `register(a, b)` work as in JS.
pub fn variadic(f: Closure<dyn Fn(Array) -> JsValue>) -> Function {
    wrap_variadic(&f.into_js_value())
}

/// Function with no effect, returned where there is nothing to undo.
pub fn noop() -> Function {
    make_noop()
}

pub fn unsubscribe_to_js(off: Unsubscribe) -> Function {
    Closure::<dyn Fn()>::new(move || off())
        .into_js_value()
        .unchecked_into()
}

/// Plain frozen object with the given properties.
pub fn frozen_object(entries: &[(&str, JsValue)]) -> Result<Object, JsValue> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(Object::freeze(&object))
}

pub fn to_function(value: JsValue, what: &str) -> Result<Function, JsValue> {
    value
        .dyn_into::<Function>()
        .map_err(|_| js_sys::TypeError::new(&format!("{what} is not a function")).into())
}
