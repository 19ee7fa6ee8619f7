use crate::{ApiRequest, ApiResponse, ClientResult};

/// Runs before every outgoing call and may rewrite it
pub trait RequestMiddleware: Send + Sync {
    fn before(&self, request: &mut ApiRequest);
}

/// Observes every outcome after the call; the outcome reaches the caller unchanged
pub trait ResponseMiddleware: Send + Sync {
    fn after(&self, request: &ApiRequest, outcome: &ClientResult<ApiResponse>);
}
