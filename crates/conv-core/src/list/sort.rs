use crate::{CoreError, Record, Result as CoreErrorResult};

use std::cmp::Ordering;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

/// Record field the list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Surname,
    Age,
    EnrollmentType,
    PaymentType,
    PaymentReference,
    Amount,
    #[default]
    RegisteredAt,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Age => "age",
            Self::EnrollmentType => "enrollment",
            Self::PaymentType => "payment",
            Self::PaymentReference => "reference",
            Self::Amount => "amount",
            Self::RegisteredAt => "registered",
        }
    }

    /// Natural ordering of the field; incomparable amounts compare equal
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Name => a.nombre.cmp(&b.nombre),
            Self::Surname => a.apellido.cmp(&b.apellido),
            Self::Age => a.edad.cmp(&b.edad),
            Self::EnrollmentType => a.tipo_matricula.cmp(&b.tipo_matricula),
            Self::PaymentType => a.tipo_pago.cmp(&b.tipo_pago),
            Self::PaymentReference => a.referencia_pago.cmp(&b.referencia_pago),
            Self::Amount => a.monto.partial_cmp(&b.monto).unwrap_or(Ordering::Equal),
            Self::RegisteredAt => a.fecha_registro.cmp(&b.fecha_registro),
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" | "nombre" => Ok(Self::Name),
            "surname" | "apellido" => Ok(Self::Surname),
            "age" | "edad" => Ok(Self::Age),
            "enrollment" | "tipo_matricula" => Ok(Self::EnrollmentType),
            "payment" | "tipo_pago" => Ok(Self::PaymentType),
            "reference" | "referencia_pago" => Ok(Self::PaymentReference),
            "amount" | "monto" => Ok(Self::Amount),
            "registered" | "fecha_registro" => Ok(Self::RegisteredAt),
            _ => Err(CoreError::InvalidSortKey {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}
