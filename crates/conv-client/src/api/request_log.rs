use crate::{ApiRequest, ApiResponse, ClientResult, RequestMiddleware, ResponseMiddleware};

use log::{debug, warn};
use serde_json::Value;

/// Logs every call and its outcome. Neither the bearer token nor body values
/// (credentials travel in the login body) are written; only body field names.
#[derive(Debug, Default)]
pub struct RequestLog;

impl RequestMiddleware for RequestLog {
    fn before(&self, request: &mut ApiRequest) {
        debug!("{}", describe_request(request));
    }
}

pub(crate) fn describe_request(request: &ApiRequest) -> String {
    format!(
        "-> {} {} query={:?} fields=[{}] auth={}",
        request.method,
        request.path,
        request.query,
        body_fields(request.body.as_ref()),
        request.bearer.is_some()
    )
}

fn body_fields(body: Option<&Value>) -> String {
    match body {
        Some(Value::Object(map)) => {
            let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
            keys.sort_unstable();
            keys.join(", ")
        }
        _ => String::new(),
    }
}

impl ResponseMiddleware for RequestLog {
    fn after(&self, request: &ApiRequest, outcome: &ClientResult<ApiResponse>) {
        match outcome {
            Ok(response) => debug!(
                "<- {} {} {}",
                request.method, request.path, response.status
            ),
            Err(e) => match e.status() {
                Some(status) => warn!(
                    "<- {} {} failed with {status}: {e}",
                    request.method, request.path
                ),
                None => warn!("<- {} {} failed: {e}", request.method, request.path),
            },
        }
    }
}
