use crate::AuthState;

/// Views of the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Records,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Records => "/convencionistas",
            Route::NotFound => "*",
        }
    }

    /// Guarded views need a session
    pub fn is_guarded(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Records)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Auth state not known yet; show a spinner
    Wait,
    RedirectToLogin,
}

pub struct RouteGuard;

impl RouteGuard {
    pub fn check(route: Route, state: &AuthState) -> GuardDecision {
        if !route.is_guarded() {
            return GuardDecision::Render;
        }
        match state {
            AuthState::Loading => GuardDecision::Wait,
            AuthState::Anonymous => GuardDecision::RedirectToLogin,
            AuthState::Authenticated { .. } => GuardDecision::Render,
        }
    }
}
