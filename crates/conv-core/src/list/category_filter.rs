use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

/// Categorical quick filter offered above the record list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    #[default]
    All,
    /// Registrants younger than [`crate::MINOR_AGE_LIMIT`]
    Minors,
    AssemblyMembers,
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Minors => "minors",
            Self::AssemblyMembers => "assembly-members",
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(Self::All),
            "minors" | "menores" => Ok(Self::Minors),
            "assembly-members" | "assembly_members" | "asambleistas" => Ok(Self::AssemblyMembers),
            _ => Err(CoreError::InvalidCategoryFilter {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
