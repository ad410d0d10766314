use crate::errors::WalletsError;
use wasm_bindgen::JsValue;

/// Conversion from JsValue to WalletsError for WASM infrastructure
impl From<JsValue> for WalletsError {
    fn from(err: JsValue) -> Self {
        WalletsError::js_error(
            err.as_string()
                .unwrap_or_else(|| format!("{err:?}")),
        )
    }
}

/// Conversion from WalletsError to JsValue for WASM boundary
impl From<WalletsError> for JsValue {
    fn from(error: WalletsError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
