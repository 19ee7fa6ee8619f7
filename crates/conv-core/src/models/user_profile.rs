use crate::lenient;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Zone a user is assigned to; every record they register is tagged with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

/// Authenticated user as returned by the login endpoint.
///
/// Deserialization normalizes the zone once: `zona.id` wins, the legacy
/// top-level `idzona` is the fallback. Serialization always writes the
/// canonical `zona` object, so a persisted profile reloads unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawUserProfile")]
pub struct UserProfile {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_completo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zona: Option<Zone>,
    /// Fields this client does not interpret (username, role, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn new(id: i64, nombre_completo: Option<String>, zona: Option<Zone>) -> Self {
        Self {
            id,
            nombre_completo,
            zona,
            extra: Map::new(),
        }
    }

    pub fn zone_id(&self) -> Option<i64> {
        self.zona.as_ref().map(|z| z.id)
    }

    pub fn zone_name(&self) -> Option<&str> {
        self.zona.as_ref().and_then(|z| z.nombre.as_deref())
    }

    /// Full name, else username, else the numeric id
    pub fn display_name(&self) -> String {
        if let Some(name) = self.nombre_completo.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        match self.extra.get("username").and_then(Value::as_str) {
            Some(username) => username.to_string(),
            None => format!("user #{}", self.id),
        }
    }

    /// Overlay fields from a newer copy of the same user (verify-token reply).
    pub fn merge(&mut self, newer: UserProfile) {
        self.id = newer.id;
        if newer.nombre_completo.is_some() {
            self.nombre_completo = newer.nombre_completo;
        }
        if newer.zona.is_some() {
            self.zona = newer.zona;
        }
        self.extra.extend(newer.extra);
    }
}

#[derive(Deserialize)]
struct RawZone {
    #[serde(default, deserialize_with = "lenient::option_id")]
    id: Option<i64>,
    #[serde(default)]
    nombre: Option<String>,
}

#[derive(Deserialize)]
struct RawUserProfile {
    #[serde(deserialize_with = "lenient::id")]
    id: i64,
    #[serde(default)]
    nombre_completo: Option<String>,
    #[serde(default)]
    zona: Option<RawZone>,
    #[serde(default, deserialize_with = "lenient::option_id")]
    idzona: Option<i64>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawUserProfile> for UserProfile {
    fn from(raw: RawUserProfile) -> Self {
        let (zone_id, zone_name) = match raw.zona {
            Some(zona) => (zona.id.or(raw.idzona), zona.nombre),
            None => (raw.idzona, None),
        };

        Self {
            id: raw.id,
            nombre_completo: raw.nombre_completo,
            zona: zone_id.map(|id| Zone {
                id,
                nombre: zone_name,
            }),
            extra: raw.extra,
        }
    }
}
