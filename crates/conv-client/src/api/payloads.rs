use conv_core::{Record, UserProfile};
use serde::Deserialize;

/// Reply to `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Reply to `GET /auth/verify-token`
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyTokenResponse {
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Reply to `POST /convencionistas`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRecordResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// The record list arrives either wrapped as `{data: [...]}` or as a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordListPayload {
    Wrapped { data: Vec<Record> },
    Bare(Vec<Record>),
}

impl RecordListPayload {
    pub fn into_records(self) -> Vec<Record> {
        match self {
            RecordListPayload::Wrapped { data } => data,
            RecordListPayload::Bare(records) => records,
        }
    }
}
