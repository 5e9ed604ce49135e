//! Session - Per-user key/value state carried across requests.
//!
//! A [`Session`] is an opaque bag of JSON values keyed by name. Components
//! that keep per-user state (the basket) read and write their own key, then
//! call [`Session::mark_modified`] so the host persists the bag at the end
//! of the request via [`SessionStore::commit`].
//!
//! ## Example
//!
//! ```ignore
//! use storefront::{InMemorySessionStore, SessionStore};
//!
//! let store = InMemorySessionStore::new();
//! let mut session = store.load("abc123")?;
//! session.insert("theme", json!("dark"));
//! session.mark_modified();
//! store.commit(&mut session)?; // persisted, flag cleared
//! ```

mod in_memory;
mod store;

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use in_memory::InMemorySessionStore;
pub use store::SessionStore;

/// Error type for session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Serialization/deserialization error.
    #[error("session serialization error: {0}")]
    Serde(String),
    /// Storage-level error.
    #[error("session storage error: {0}")]
    Storage(String),
}

/// One user's session bag.
///
/// `modified` is the dirty flag the store consults on commit. `created`
/// records keys that were initialised during this request rather than
/// loaded from storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    key: String,
    values: Map<String, Value>,
    modified: bool,
    created: BTreeSet<String>,
}

impl Session {
    /// Create an empty session with the given session key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Create an empty session with a freshly generated key.
    pub fn anonymous() -> Self {
        Self::new(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Rebuild a session from previously persisted values.
    pub fn from_values(key: impl Into<String>, values: Map<String, Value>) -> Self {
        Self {
            key: key.into(),
            values,
            ..Self::default()
        }
    }

    /// The session key (the value a client presents to get this bag back).
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Deserialize the value stored under `name`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, SessionError> {
        self.values
            .get(name)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|e| SessionError::Serde(e.to_string()))
            })
            .transpose()
    }

    /// Store a value. Does not mark the session modified.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    /// Remove a value. Does not mark the session modified.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All stored values.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Flag the bag as changed so the store persists it on commit.
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Reset the dirty flag after the bag has been persisted.
    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    /// Record that `name` was initialised during this request.
    pub fn mark_created(&mut self, name: impl Into<String>) {
        self.created.insert(name.into());
    }

    /// Whether `name` was initialised during this request.
    pub fn is_new(&self, name: &str) -> bool {
        self.created.contains(name)
    }
}
