//! `localStorage` backend for the economy store.
use crate::dom::{js_error_message, js_error_name, local_storage};
use smartbin_core::{KeyValueStorage, StorageError};
use wasm_bindgen::JsValue;

/// Browser `localStorage` behind [`KeyValueStorage`].
///
/// The handle is looked up on every call so that private-mode or disabled
/// storage surfaces as [`StorageError::Unavailable`] instead of a panic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn handle() -> Result<web_sys::Storage, StorageError> {
        local_storage().map_err(|err| StorageError::Unavailable(js_error_message(&err)))
    }
}

/// Map a thrown storage exception onto the core error type.
#[must_use]
pub fn classify_js_error(key: &str, err: &JsValue) -> StorageError {
    match js_error_name(err).as_deref() {
        Some("QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED") => StorageError::QuotaExceeded {
            key: key.to_string(),
        },
        Some("SecurityError") => StorageError::Unavailable(js_error_message(err)),
        _ => StorageError::Backend(js_error_message(err)),
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::handle()?
            .get_item(key)
            .map_err(|err| classify_js_error(key, &err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|err| classify_js_error(key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::handle()?
            .remove_item(key)
            .map_err(|err| classify_js_error(key, &err))
    }
}
