//! Reusable front-end logic over the registration backend: session
//! persistence, the API client with its middleware pair, and the
//! auth, form and list controllers.

pub(crate) mod api;
pub(crate) mod auth;
pub(crate) mod error;
pub(crate) mod navigator;
pub(crate) mod record_form;
pub(crate) mod record_list;
pub(crate) mod route_guard;
pub(crate) mod session;


pub use api::client::ApiClient;
pub use api::middleware::{RequestMiddleware, ResponseMiddleware};
pub use api::payloads::{
    CreateRecordResponse, LoginResponse, RecordListPayload, VerifyTokenResponse,
};
pub use api::request::{ApiRequest, ApiResponse};
pub use api::request_log::RequestLog;
pub use api::session_augmenter::SessionAugmenter;
pub use api::session_expiry_guard::SessionExpiryGuard;
pub use auth::{AuthController, AuthState, LoginError};
pub use error::{ClientError, Result as ClientResult};
pub use navigator::{Navigator, RecordingNavigator};
pub use record_form::{RecordForm, SubmitOutcome};
pub use record_list::{LoadState, RecordList, RefreshHandle};
pub use route_guard::{GuardDecision, Route, RouteGuard};
pub use session::error::{Result as SessionResult, SessionError};
pub use session::file_store::FileSessionStore;
pub use session::memory_store::MemorySessionStore;
pub use session::{SessionContext, SessionStore};

/// Shown when a login failure carries no backend message
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
/// Shown when a submission succeeds without a backend message
pub const RECORD_CREATED_MESSAGE: &str = "Record registered successfully";
/// Shown when a submission fails without a backend message
pub const RECORD_FAILED_MESSAGE: &str = "Failed to register record";
/// Shown when the record list cannot be fetched without a backend message
pub const LIST_FAILED_MESSAGE: &str = "Failed to load records";
