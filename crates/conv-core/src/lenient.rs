//! Deserializers for backend fields whose JSON type is not stable.
//!
//! The registration backend serializes identifiers and decimals either as
//! JSON numbers or as strings depending on the driver, and timestamps either
//! as RFC 3339 or as a plain SQL datetime.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .map(|v| v.trunc() as i64)
                })
            }
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Identifier sent as a number or a numeric string
pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrText::deserialize(deserializer)?;
    raw.as_i64()
        .ok_or_else(|| D::Error::custom("expected a numeric identifier"))
}

/// Count sent as a number or a numeric string; null reads as zero
pub fn count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    match raw {
        None => Ok(0),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected a numeric count")),
    }
}

/// Text column; null reads as empty
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional identifier; null and blank strings read as absent
pub fn option_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected a numeric identifier")),
    }
}

/// Optional age; anything that does not parse as a whole number reads as absent
pub fn option_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.as_i64())
        .and_then(|age| u32::try_from(age).ok()))
}

/// Decimal amount sent as a number or a decimal string; null reads as zero
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    match raw {
        None => Ok(0.0),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected a decimal amount")),
    }
}

/// Optional timestamp in RFC 3339 or `YYYY-MM-DD HH:MM:SS` (read as UTC)
pub fn option_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unrecognized timestamp: {s}"))),
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, SQL_DATETIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
