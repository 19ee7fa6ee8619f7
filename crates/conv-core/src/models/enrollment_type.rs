use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of enrollment purchased by a registrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentType {
    /// Plain enrollment, stored as `normal`
    #[default]
    #[serde(rename = "normal")]
    General,
    Combo,
}

impl EnrollmentType {
    pub const ALL: [EnrollmentType; 2] = [EnrollmentType::General, EnrollmentType::Combo];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "normal",
            Self::Combo => "combo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "Normal",
            Self::Combo => "Combo",
        }
    }

    /// Display label for a raw backend value, echoing unknown values unchanged
    pub fn label_for(raw: &str) -> &str {
        raw.parse::<Self>().map(|t| t.label()).unwrap_or(raw)
    }
}

impl FromStr for EnrollmentType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "general" => Ok(Self::General),
            "combo" => Ok(Self::Combo),
            _ => Err(CoreError::InvalidEnrollmentType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for EnrollmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
