//! Authentication: bearer token, persistent token storage, credential provider.
//!
//! ## Credential Model
//!
//! - A single bearer token is held in client-local persistent storage under the
//!   fixed key [`TOKEN_KEY`]. In the browser (`wasm` feature) that storage is
//!   `localStorage` via `LocalStorageTokenStorage`, which `Credentials::default()`
//!   picks there. On native it is a JSON file ([`FileTokenStorage`]) or memory.
//! - [`Credentials`] is the injected provider. The resource client and the view
//!   controllers read the token through it; nothing looks the token up ambiently.
//! - Lifecycle: [`Credentials::set_token`] on login, [`Credentials::clear`] on
//!   logout. Presence of a token is what route guards check.
//! - The token is never logged. `AuthToken`'s `Debug` output is redacted.

#[cfg(feature = "http")]
pub mod client;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use wasm::LocalStorageTokenStorage;

use crate::error::StorageError;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Storage key the bearer token lives under.
pub const TOKEN_KEY: &str = "token";

// ─── AuthToken ───────────────────────────────────────────────────────────────

/// Opaque bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value, for the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

impl From<&str> for AuthToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AuthToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── TokenStorage ────────────────────────────────────────────────────────────

/// Client-local persistent key/value storage.
pub trait TokenStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: a flat JSON object of string keys to string values.
///
/// A missing file reads as empty. Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(HashMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.read().unwrap_or_else(|e| e.into_inner());
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.store(&entries)?;
        }
        Ok(())
    }
}

// ─── Credentials ─────────────────────────────────────────────────────────────

/// Credential provider injected into the client and view controllers.
///
/// Cheap to clone; clones share the same storage.
#[derive(Clone)]
pub struct Credentials {
    storage: Arc<dyn TokenStorage>,
}

impl Credentials {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// Credentials backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStorage::new()))
    }

    /// Credentials persisted to a JSON file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileTokenStorage::new(path)))
    }

    /// Current token, if any. Unreadable storage counts as signed out.
    pub fn token(&self) -> Option<AuthToken> {
        match self.storage.get(TOKEN_KEY) {
            Ok(Some(t)) if !t.is_empty() => Some(AuthToken(t)),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored credential");
                None
            }
        }
    }

    pub fn set_token(&self, token: AuthToken) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token.expose())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl Default for Credentials {
    /// Browser builds (`wasm` feature) persist to `localStorage` when the page
    /// has it; everything else keeps the token in memory.
    fn default() -> Self {
        Self::new(default_storage())
    }
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
fn default_storage() -> Arc<dyn TokenStorage> {
    if LocalStorageTokenStorage::is_available() {
        Arc::new(LocalStorageTokenStorage::new())
    } else {
        tracing::warn!("localStorage unavailable; credentials will not survive a reload");
        Arc::new(MemoryTokenStorage::new())
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
fn default_storage() -> Arc<dyn TokenStorage> {
    Arc::new(MemoryTokenStorage::new())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("super-secret");
        assert_eq!(format!("{:?}", token), "AuthToken(***)");
        assert_eq!(token.expose(), "super-secret");
    }

    #[test]
    fn test_credentials_lifecycle() {
        let creds = Credentials::in_memory();
        assert!(!creds.is_authenticated());

        creds.set_token(AuthToken::from("abc")).unwrap();
        assert_eq!(creds.token(), Some(AuthToken::from("abc")));

        creds.clear().unwrap();
        assert!(creds.token().is_none());
    }

    #[test]
    fn test_default_outside_browser_is_private_memory() {
        let a = Credentials::default();
        let b = Credentials::default();
        a.set_token(AuthToken::from("only-a")).unwrap();
        assert!(a.is_authenticated());
        assert!(!b.is_authenticated());
    }

    #[test]
    fn test_clones_share_storage() {
        let creds = Credentials::in_memory();
        let other = creds.clone();
        creds.set_token(AuthToken::from("shared")).unwrap();
        assert_eq!(other.token(), Some(AuthToken::from("shared")));
    }

    #[test]
    fn test_empty_token_counts_as_signed_out() {
        let storage = Arc::new(MemoryTokenStorage::new());
        storage.set(TOKEN_KEY, "").unwrap();
        let creds = Credentials::new(storage);
        assert!(!creds.is_authenticated());
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        Credentials::file(&path)
            .set_token(AuthToken::from("persisted"))
            .unwrap();

        let reopened = Credentials::file(&path);
        assert_eq!(reopened.token(), Some(AuthToken::from("persisted")));

        reopened.clear().unwrap();
        assert!(Credentials::file(&path).token().is_none());
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("storage.json"));
        storage.set("theme", "dark").unwrap();
        storage.set(TOKEN_KEY, "t").unwrap();
        storage.remove(TOKEN_KEY).unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(storage.get(TOKEN_KEY).unwrap().is_none());
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("absent.json"));
        assert!(storage.get(TOKEN_KEY).unwrap().is_none());
        storage.remove(TOKEN_KEY).unwrap();
    }

    #[test]
    fn test_file_storage_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();
        let storage = FileTokenStorage::new(&path);
        assert!(matches!(storage.get(TOKEN_KEY), Err(StorageError::Corrupt(_))));
        // Provider treats unreadable storage as signed out.
        assert!(Credentials::file(&path).token().is_none());
    }
}
