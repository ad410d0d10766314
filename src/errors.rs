use std::fmt;

/// Errors raised at the boundary with the host page.
///
/// Registry operations themselves are total; these only come from decoding
/// caller input or from reaching the shared navigator slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletsError {
    UnknownEvent(String),
    NavigatorUnavailable,
    JsError(String),
}

impl fmt::Display for WalletsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletsError::UnknownEvent(name) => write!(f, "Unknown registry event: {name}"),
            WalletsError::NavigatorUnavailable => write!(f, "Navigator not available"),
            WalletsError::JsError(msg) => write!(f, "JavaScript Error: {msg}"),
        }
    }
}

impl std::error::Error for WalletsError {}

impl WalletsError {
    pub fn js_error(message: impl Into<String>) -> Self {
        WalletsError::JsError(message.into())
    }
}
