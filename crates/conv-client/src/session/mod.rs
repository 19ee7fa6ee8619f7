pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

use crate::SessionResult;

use std::sync::Arc;

use conv_core::Session;

/// Persisted authentication slot: one token plus the user profile that
/// came with it.
///
/// `load` never fails. Unreadable profile data yields a session without a
/// user; a missing token yields no session at all, whatever profile is
/// stored. Writes replace the whole slot.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;

    fn save(&self, session: &Session) -> SessionResult<()>;

    /// Remove token and profile; clearing an empty store is not an error
    fn clear(&self) -> SessionResult<()>;
}

/// Shared handle to the session store, injected into the client and every controller
pub type SessionContext = Arc<dyn SessionStore>;
