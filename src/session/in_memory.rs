//! InMemorySessionStore - HashMap-backed session store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};

use super::{Session, SessionError, SessionStore};

/// In-memory session store.
///
/// Bags are kept as serialized JSON bytes, so every load goes through the
/// same decode path a cookie or cache backend would. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    storage: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemorySessionStore {
    /// Create a new empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted sessions.
    pub fn len(&self) -> Result<usize, SessionError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| SessionError::Storage("lock poisoned".into()))?;
        Ok(storage.len())
    }

    pub fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.len()? == 0)
    }

    /// Raw persisted JSON for a session, if any.
    pub fn raw(&self, session_key: &str) -> Result<Option<Value>, SessionError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| SessionError::Storage("lock poisoned".into()))?;
        storage
            .get(session_key)
            .map(|bytes| serde_json::from_slice(bytes).map_err(|e| SessionError::Serde(e.to_string())))
            .transpose()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, session_key: &str) -> Result<Session, SessionError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| SessionError::Storage("lock poisoned".into()))?;

        match storage.get(session_key) {
            Some(bytes) => {
                let values: Map<String, Value> = serde_json::from_slice(bytes)
                    .map_err(|e| SessionError::Serde(e.to_string()))?;
                Ok(Session::from_values(session_key, values))
            }
            None => Ok(Session::new(session_key)),
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let bytes =
            serde_json::to_vec(session.values()).map_err(|e| SessionError::Serde(e.to_string()))?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| SessionError::Storage("lock poisoned".into()))?;
        storage.insert(session.key().to_string(), bytes);
        Ok(())
    }

    fn delete(&self, session_key: &str) -> Result<bool, SessionError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| SessionError::Storage("lock poisoned".into()))?;
        Ok(storage.remove(session_key).is_some())
    }
}
