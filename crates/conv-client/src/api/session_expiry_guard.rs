use crate::{
    ApiRequest, ApiResponse, ClientError, ClientResult, Navigator, ResponseMiddleware,
    SessionContext,
};

use std::sync::Arc;

use log::{error, warn};

/// On a 401, empties the session store and sends the user to the login view.
pub struct SessionExpiryGuard {
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
}

impl SessionExpiryGuard {
    pub fn new(session: SessionContext, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }
}

impl ResponseMiddleware for SessionExpiryGuard {
    fn after(&self, request: &ApiRequest, outcome: &ClientResult<ApiResponse>) {
        if !matches!(outcome, Err(ClientError::Unauthorized { .. })) {
            return;
        }

        warn!("{} {} rejected with 401; ending session", request.method, request.path);
        if let Err(e) = self.session.clear() {
            error!("Failed to clear session after 401: {e}");
        }
        self.navigator.redirect_to_login();
    }
}
