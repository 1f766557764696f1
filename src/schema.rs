use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Struct representing the request body for registering a User
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CreateUserSchema {
    pub name: String,
    pub username: String,
}

// Struct representing the request body for creating or updating a Todo
//
// Both fields always overwrite the stored ones. A missing title is empty and a
// missing or unreadable deadline is stored as `null`.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct TodoSchema {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_deadline")]
    pub deadline: Option<DateTime<Utc>>,
}

/// Parses a caller supplied deadline. Accepts RFC 3339, a bare
/// `YYYY-MM-DDTHH:MM:SS` (read as UTC) and a plain `YYYY-MM-DD` date
/// (midnight UTC).
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(deadline) = DateTime::parse_from_rfc3339(raw) {
        return Some(deadline.with_timezone(&Utc));
    }
    if let Ok(deadline) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&deadline));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
}

// Strings go through `parse_deadline`, numbers are epoch milliseconds.
fn deserialize_deadline<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let deadline = match Value::deserialize(deserializer)? {
        Value::String(raw) => parse_deadline(&raw),
        Value::Number(millis) => millis
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    };
    Ok(deadline)
}
