use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How a registrant paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentType {
    #[serde(rename = "divisa")]
    ForeignCurrency,
    #[default]
    #[serde(rename = "pago_movil")]
    MobilePayment,
    #[serde(rename = "transferencia")]
    Transfer,
}

impl PaymentType {
    pub const ALL: [PaymentType; 3] = [
        PaymentType::ForeignCurrency,
        PaymentType::MobilePayment,
        PaymentType::Transfer,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForeignCurrency => "divisa",
            Self::MobilePayment => "pago_movil",
            Self::Transfer => "transferencia",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ForeignCurrency => "Foreign currency",
            Self::MobilePayment => "Mobile payment",
            Self::Transfer => "Transfer",
        }
    }

    /// Display label for a raw backend value, echoing unknown values unchanged
    pub fn label_for(raw: &str) -> &str {
        raw.parse::<Self>().map(|t| t.label()).unwrap_or(raw)
    }
}

impl FromStr for PaymentType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "divisa" | "foreign_currency" | "foreign-currency" => Ok(Self::ForeignCurrency),
            "pago_movil" | "mobile_payment" | "mobile-payment" => Ok(Self::MobilePayment),
            "transferencia" | "transfer" => Ok(Self::Transfer),
            _ => Err(CoreError::InvalidPaymentType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
