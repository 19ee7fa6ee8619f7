use crate::{ApiRequest, RequestMiddleware, SessionContext};

use serde_json::Value;

const USER_ID_FIELD: &str = "usuario_id";
const ZONE_ID_FIELD: &str = "zona_id";

/// Attaches the stored credential and tags requests with the user's zone.
///
/// - bearer token on every request when a session exists
/// - `usuario_id` / `zona_id` merged into object payloads of mutating
///   requests, unless the payload already carries a non-null value
/// - `zona_id` added to the query of reads, unless already present
pub struct SessionAugmenter {
    session: SessionContext,
}

impl SessionAugmenter {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }
}

impl RequestMiddleware for SessionAugmenter {
    fn before(&self, request: &mut ApiRequest) {
        let Some(session) = self.session.load() else {
            return;
        };

        request.bearer = Some(session.token.clone());

        let user_id = session.user_id();
        let zone_id = session.zone_id();

        if request.is_mutating()
            && let Some(Value::Object(payload)) = request.body.as_mut()
        {
            for (field, value) in [(USER_ID_FIELD, user_id), (ZONE_ID_FIELD, zone_id)] {
                let missing = payload.get(field).is_none_or(Value::is_null);
                if missing && let Some(value) = value {
                    payload.insert(field.to_string(), Value::from(value));
                }
            }
        }

        if request.is_read()
            && let Some(zone_id) = zone_id
            && request.query_value(ZONE_ID_FIELD).is_none()
        {
            request.query.push((ZONE_ID_FIELD.to_string(), zone_id.to_string()));
        }
    }
}
