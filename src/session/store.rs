//! SessionStore - Abstract persistence for session bags.

use tracing::info;

use super::{Session, SessionError};

/// Abstract persistence for session bags.
pub trait SessionStore: Send + Sync {
    /// Load the session for a key. Unknown keys yield a fresh empty session
    /// carrying that key.
    fn load(&self, session_key: &str) -> Result<Session, SessionError>;

    /// Persist the session's values unconditionally.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Delete a session. Returns true if it existed.
    fn delete(&self, session_key: &str) -> Result<bool, SessionError>;

    /// End-of-request persistence: save only when the session was marked
    /// modified, then clear the flag. Returns whether a save happened.
    fn commit(&self, session: &mut Session) -> Result<bool, SessionError> {
        if !session.is_modified() {
            return Ok(false);
        }
        self.save(session)?;
        session.clear_modified();
        info!(session = session.key(), "session persisted");
        Ok(true)
    }
}
