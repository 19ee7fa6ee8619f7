use crate::{CoreError, Sex};

use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SexFilter {
    #[default]
    All,
    Only(Sex),
}

impl FromStr for SexFilter {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(Self::All),
            _ => s.parse::<Sex>().map(Self::Only),
        }
    }
}

impl std::fmt::Display for SexFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(sex) => write!(f, "{}", sex.as_str()),
        }
    }
}
