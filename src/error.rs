//! Error Types

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the records endpoint
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("No browser window available")]
    NoWindow,
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Could not encode request body: {0}")]
    Encode(String),
    #[error("Response was not the expected JSON: {0}")]
    Decode(String),
}

/// Invalid page configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Could not read page config: {0}")]
    Malformed(String),
    #[error("Element id for '{0}' is empty")]
    EmptyId(&'static str),
    #[error("Unknown log level '{0}'")]
    LogLevel(String),
}

/// Everything that can go wrong on a page
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No element with id '{0}' in the document")]
    MissingElement(String),
    #[error("Element '{0}' is not a {1}")]
    WrongElement(String, &'static str),
    #[error("Could not bind '{0}' listener: {1}")]
    Listener(&'static str, String),
    #[error("This page has no write form")]
    ReadOnlyPage,
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort text for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
