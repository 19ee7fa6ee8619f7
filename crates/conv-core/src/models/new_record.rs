use crate::{EnrollmentType, ParticipationType, PaymentType, Sex};

use serde::Serialize;

/// Validated payload for `POST /convencionistas`.
///
/// `usuario_id` and `zona_id` are normally left unset; the request
/// middleware fills them from the session. Values set here are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecord {
    pub nombre: String,
    pub apellido: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edad: Option<u32>,
    pub sexo: Sex,
    pub tipo_matricula: EnrollmentType,
    pub tipo_pago: PaymentType,
    pub referencia_pago: String,
    pub monto: f64,
    pub tipo_asamblea: ParticipationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zona_id: Option<i64>,
}
