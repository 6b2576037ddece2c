//! Loose boolean parsing for settings and post metadata.
//!
//! The content store and the environment both hand us flags as strings
//! (`"1"`, `"on"`, `"true"`, ...). This is the single place that decides
//! which of them count as set.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Returns true for `1`, `true`, `yes` and `on`, case-insensitive.
///
/// Everything else, including the empty string, is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Interprets an arbitrary JSON value as a flag.
///
/// Numbers are set when non-zero, strings follow [`parse_flag`], `null` and
/// containers are unset.
pub fn flag_from_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => parse_flag(s),
        _ => false,
    }
}

/// Serde helper for fields that may arrive as booleans, numbers or strings.
pub fn deserialize_loose_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(flag_from_value))
}
