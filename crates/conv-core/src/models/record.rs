use crate::lenient;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered attendee as returned by `GET /convencionistas`.
///
/// Categorical fields are kept as the raw backend strings: the list is a
/// read-only copy and a value this client does not know must still render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient::text")]
    pub nombre: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub apellido: String,

    #[serde(default, deserialize_with = "lenient::option_age")]
    pub edad: Option<u32>,

    #[serde(default)]
    pub sexo: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub tipo_matricula: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tipo_pago: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub referencia_pago: String,

    #[serde(default, deserialize_with = "lenient::amount")]
    pub monto: f64,

    #[serde(default)]
    pub tipo_asamblea: Option<String>,

    #[serde(default, deserialize_with = "lenient::option_timestamp")]
    pub fecha_registro: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient::option_id")]
    pub zona_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::option_id")]
    pub usuario_id: Option<i64>,
}

impl Record {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}
