//! Errors from browser side effects.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("no browser window available")]
    NoWindow,

    #[error("new tab was blocked for {0}")]
    PopupBlocked(String),

    #[error("clipboard write rejected: {0}")]
    Clipboard(String),

    #[error("browser error: {0}")]
    Js(String),
}

/// Best-effort text for a thrown JS value
pub fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        EffectError::Js(js_error_text(&value))
    }
}
