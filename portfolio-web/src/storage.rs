//! Preference persistence in `localStorage`.

use crate::dom::{js_error_message, local_storage};
use portfolio_core::{PreferenceKey, PreferenceStore};

/// Raw string values under the bare `theme` / `language` keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPrefs;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<wasm_bindgen::JsValue> for WebStorageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Storage(js_error_message(&value))
    }
}

impl PreferenceStore for LocalPrefs {
    type Error = WebStorageError;

    fn read(&self, key: PreferenceKey) -> Result<Option<String>, Self::Error> {
        Ok(local_storage()?.get_item(key.storage_key())?)
    }

    fn write(&self, key: PreferenceKey, value: &str) -> Result<(), Self::Error> {
        local_storage()?.set_item(key.storage_key(), value)?;
        Ok(())
    }
}
