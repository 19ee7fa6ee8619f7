use crate::{EnrollmentType, PaymentType, lenient};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentCount {
    pub tipo_matricula: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub cantidad: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCount {
    pub tipo_pago: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub cantidad: i64,
}

/// Aggregates returned by `GET /convencionistas/estadisticas`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total: i64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monto_total: f64,
    #[serde(default)]
    pub por_tipo_matricula: Vec<EnrollmentCount>,
    #[serde(default)]
    pub por_tipo_pago: Vec<PaymentCount>,
}

impl Statistics {
    /// Registrations of one enrollment type (0 when the backend omits it)
    pub fn enrollment_count(&self, enrollment: EnrollmentType) -> i64 {
        self.por_tipo_matricula
            .iter()
            .find(|c| c.tipo_matricula.parse::<EnrollmentType>().ok() == Some(enrollment))
            .map(|c| c.cantidad)
            .unwrap_or(0)
    }

    /// Registrations of one payment type (0 when the backend omits it)
    pub fn payment_count(&self, payment: PaymentType) -> i64 {
        self.por_tipo_pago
            .iter()
            .find(|c| c.tipo_pago.parse::<PaymentType>().ok() == Some(payment))
            .map(|c| c.cantidad)
            .unwrap_or(0)
    }

    /// Percentage of the total a count represents; 0 when there are no registrations
    pub fn share_of_total(&self, count: i64) -> f64 {
        if self.total <= 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}
