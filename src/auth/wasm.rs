//! Browser credential storage: `window.localStorage`.

use super::TokenStorage;
use crate::error::StorageError;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Token storage backed by the page's `localStorage`.
///
/// The `Storage` handle is not `Send`, so it is looked up on every call
/// rather than held.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStorage;

impl LocalStorageTokenStorage {
    pub fn new() -> Self {
        Self
    }

    /// Whether the page exposes `localStorage` at all (private modes and
    /// workers may not).
    pub fn is_available() -> bool {
        local_storage().is_ok()
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", err))
}

impl TokenStorage for LocalStorageTokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}
