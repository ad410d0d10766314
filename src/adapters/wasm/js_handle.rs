use crate::domain::wallet::Handle;
use js_sys::Object;
use wasm_bindgen::JsValue;

/// JavaScript wallets are identified by `Object.is`, the same identity the
/// page's scripts use.
impl Handle for JsValue {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        Object::is(self, other)
    }
}
