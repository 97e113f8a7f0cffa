//! Session-scoped key-value persistence.
//!
//! The credit counter must survive re-initialization within a session but
//! reset when the session ends. [`SessionStore`] abstracts that storage so
//! the credit gate can be exercised against an in-memory map in tests and a
//! session-scoped file on disk in the running application.
//!
//! Values are plain strings; callers own parsing and must treat an
//! unreadable or malformed value as absent.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::warn;

/// String key-value store with read-after-write consistency: a value passed
/// to [`SessionStore::set`] must be observable by the next
/// [`SessionStore::get`] on the same store.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store backed by a shared map.
///
/// Clones share the same map, which lets a test hand the "session" to a
/// second gate instance to simulate a reload.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("session store mutex poisoned")
            .get(key)
            .cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("session store mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: one file per key inside a directory.
///
/// The default directory lives under the OS temporary directory, which the
/// operating system clears between sessions. That gives the counter the
/// session-scoped lifetime it expects: it survives application restarts
/// within a session and starts fresh afterwards.
///
/// Storage failures are never fatal. A failed read behaves like a missing
/// value; a failed write is logged and the in-memory value stays
/// authoritative for the rest of the run.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The store used by the running application:
    /// `<os-temp-dir>/zeroconflict/session`.
    pub fn session_default() -> Self {
        Self::new(std::env::temp_dir().join("zeroconflict").join("session"))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read session value {:?}: {}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!("Failed to create session store dir {:?}: {}", self.dir, e);
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            warn!("Failed to persist session value {:?}: {}", key, e);
        }
    }
}
