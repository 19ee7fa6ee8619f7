use crate::{
    ApiRequest, ApiResponse, ClientError, ClientResult, CreateRecordResponse, LoginResponse,
    Navigator, RecordListPayload, RequestLog, RequestMiddleware, ResponseMiddleware,
    SessionAugmenter, SessionContext, SessionExpiryGuard, VerifyTokenResponse,
};

use std::sync::Arc;
use std::time::Duration;

use conv_config::ApiConfig;
use conv_core::{NewRecord, Record, Statistics};
use reqwest::{Client as ReqwestClient, Url};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// HTTP client for the registration backend.
///
/// Every call goes through the same pipeline: request middleware in
/// installation order, one HTTP exchange, then response middleware in
/// installation order. No retries.
pub struct ApiClient {
    base_url: String,
    client: ReqwestClient,
    request_middleware: Vec<Arc<dyn RequestMiddleware>>,
    response_middleware: Vec<Arc<dyn ResponseMiddleware>>,
}

impl ApiClient {
    /// Create a bare client without middleware
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:3001/api")
    /// * `timeout` - per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            request_middleware: Vec::new(),
            response_middleware: Vec::new(),
        })
    }

    /// Create a client with the standard middleware installed: session
    /// augmentation, request logging and 401 handling.
    pub fn with_session(
        base_url: &str,
        timeout: Duration,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let log = Arc::new(RequestLog);

        Ok(Self::new(base_url, timeout)?
            .with_request_middleware(Arc::new(SessionAugmenter::new(session.clone())))
            .with_request_middleware(log.clone())
            .with_response_middleware(log)
            .with_response_middleware(Arc::new(SessionExpiryGuard::new(session, navigator))))
    }

    pub fn from_config(
        config: &ApiConfig,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        Self::with_session(&config.base_url, config.timeout(), session, navigator)
    }

    pub fn with_request_middleware(mut self, middleware: Arc<dyn RequestMiddleware>) -> Self {
        self.request_middleware.push(middleware);
        self
    }

    pub fn with_response_middleware(mut self, middleware: Arc<dyn ResponseMiddleware>) -> Self {
        self.response_middleware.push(middleware);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a request through the middleware pipeline
    pub async fn send(&self, mut request: ApiRequest) -> ClientResult<ApiResponse> {
        for middleware in &self.request_middleware {
            middleware.before(&mut request);
        }

        let outcome = self.execute(&request).await;

        for middleware in &self.response_middleware {
            middleware.after(&request, &outcome);
        }

        outcome
    }

    fn url_for(&self, request: &ApiRequest) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, request.path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::url(&raw, e.to_string()))?;

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }

        Ok(url)
    }

    /// Execute request and handle errors
    async fn execute(&self, request: &ApiRequest) -> ClientResult<ApiResponse> {
        let url = self.url_for(request)?;
        let mut req = self.client.request(request.method.clone(), url);

        if let Some(token) = &request.bearer {
            req = req.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Error bodies are not guaranteed to be JSON
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ClientError::from_status(status.as_u16(), body));
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }

    async fn send_for<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let response = self.send(request).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for a token and the user profile
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let body = json!({ "username": username, "password": password });
        self.send_for(ApiRequest::post("/auth/login", body)).await
    }

    /// Check the stored token; the reply may carry a fresher profile
    pub async fn verify_token(&self) -> ClientResult<VerifyTokenResponse> {
        self.send_for(ApiRequest::get("/auth/verify-token")).await
    }

    // =========================================================================
    // Records
    // =========================================================================

    pub async fn create_record(&self, record: &NewRecord) -> ClientResult<CreateRecordResponse> {
        let body = serde_json::to_value(record)?;
        let response = self.send(ApiRequest::post("/convencionistas", body)).await?;

        // Empty or non-object success replies carry no message
        Ok(serde_json::from_value(response.body).unwrap_or_default())
    }

    /// Every record of the user's zone
    pub async fn list_records(&self) -> ClientResult<Vec<Record>> {
        let payload: RecordListPayload =
            self.send_for(ApiRequest::get("/convencionistas")).await?;
        Ok(payload.into_records())
    }

    pub async fn statistics(&self) -> ClientResult<Statistics> {
        self.send_for(ApiRequest::get("/convencionistas/estadisticas")).await
    }
}
