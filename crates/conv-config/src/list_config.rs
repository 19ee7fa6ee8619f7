use crate::{ConfigError, ConfigErrorResult, DEFAULT_LIST_PAGE_SIZE, LIST_PAGE_SIZE_OPTIONS};

use std::str::FromStr;

use serde::Deserialize;

/// How the records page lays out its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListView {
    #[default]
    Table,
    Cards,
}

impl ListView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Cards => "cards",
        }
    }
}

impl FromStr for ListView {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "cards" => Ok(Self::Cards),
            _ => Err(ConfigError::list(format!(
                "list.view must be 'table' or 'cards', got '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for ListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: usize,
    pub view: ListView,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_LIST_PAGE_SIZE,
            view: ListView::default(),
        }
    }
}

impl ListConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !LIST_PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            return Err(ConfigError::list(format!(
                "list.page_size must be one of {:?}, got {}",
                LIST_PAGE_SIZE_OPTIONS, self.page_size
            )));
        }

        Ok(())
    }
}
