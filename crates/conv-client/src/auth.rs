use crate::{ApiClient, ClientError, ClientResult, LOGIN_FAILED_MESSAGE, SessionContext};

use std::sync::{Arc, Mutex, MutexGuard};

use conv_core::{Session, UserProfile};
use log::{info, warn};
use thiserror::Error;

/// Who is using the front-end right now
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Persisted session not checked yet
    Loading,
    Anonymous,
    /// A token is stored; `user` is `None` when the stored profile was unreadable
    Authenticated { user: Option<UserProfile> },
}

impl AuthState {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            AuthState::Authenticated { user } => user.as_ref(),
            _ => None,
        }
    }
}

/// A rejected login, with the message to show the user
#[derive(Error, Debug)]
#[error("{message}")]
pub struct LoginError {
    pub message: String,
    #[source]
    pub source: ClientError,
}

/// Login, logout and current-user state over the session store.
///
/// Startup trusts the persisted profile without asking the backend; a
/// stale token is caught by the first call that comes back 401.
/// `verify` is the explicit opt-in check.
pub struct AuthController {
    client: Arc<ApiClient>,
    session: SessionContext,
    state: Mutex<AuthState>,
}

impl AuthController {
    pub fn new(client: Arc<ApiClient>, session: SessionContext) -> Self {
        Self {
            client,
            session,
            state: Mutex::new(AuthState::Loading),
        }
    }

    fn state_slot(&self) -> MutexGuard<'_, AuthState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_state(&self, state: AuthState) {
        *self.state_slot() = state;
    }

    pub fn state(&self) -> AuthState {
        self.state_slot().clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state_slot().user().cloned()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.state_slot(), AuthState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state_slot(), AuthState::Authenticated { .. })
    }

    /// Load the persisted session without contacting the backend
    pub fn restore(&self) -> AuthState {
        let state = match self.session.load() {
            Some(session) => AuthState::Authenticated { user: session.user },
            None => AuthState::Anonymous,
        };
        self.set_state(state.clone());
        state
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, LoginError> {
        let reply = match self.client.login(username, password).await {
            Ok(reply) => reply,
            Err(source) => {
                warn!("Login failed for {username}");
                self.set_state(AuthState::Anonymous);
                let message = source
                    .backend_message(&["error"])
                    .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
                return Err(LoginError { message, source });
            }
        };

        let session = Session::new(reply.access_token, Some(reply.user.clone()));
        if let Err(e) = self.session.save(&session) {
            self.set_state(AuthState::Anonymous);
            return Err(LoginError {
                message: format!("Could not store the session: {e}"),
                source: e.into(),
            });
        }

        info!("Logged in as {}", reply.user.display_name());
        self.set_state(AuthState::Authenticated {
            user: Some(reply.user.clone()),
        });
        Ok(reply.user)
    }

    /// Local only; the backend is not told
    pub fn logout(&self) -> ClientResult<()> {
        self.set_state(AuthState::Anonymous);
        self.session.clear()?;
        info!("Logged out");
        Ok(())
    }

    /// Ask the backend whether the stored token is still good and merge the
    /// profile it returns into the stored one.
    pub async fn verify(&self) -> ClientResult<AuthState> {
        if self.session.load().is_none() {
            self.set_state(AuthState::Anonymous);
            return Ok(AuthState::Anonymous);
        }

        let reply = match self.client.verify_token().await {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_unauthorized() {
                    self.set_state(AuthState::Anonymous);
                }
                return Err(e);
            }
        };

        // Re-read: the stored slot is the source of truth for the token
        let Some(mut session) = self.session.load() else {
            self.set_state(AuthState::Anonymous);
            return Ok(AuthState::Anonymous);
        };

        if let Some(newer) = reply.user {
            match session.user.as_mut() {
                Some(user) => user.merge(newer),
                None => session.user = Some(newer),
            }
            self.session.save(&session)?;
        }

        let state = AuthState::Authenticated { user: session.user };
        self.set_state(state.clone());
        Ok(state)
    }
}
