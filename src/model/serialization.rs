/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an unsigned integer sent either as a JSON number or as a string
///
/// Token endpoints are not consistent about `expires_in`, both `3600` and `"3600"` are seen.
pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .ok_or_else(|| serde::de::Error::custom(format!("invalid unsigned number: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid unsigned number {s:?}: {e}"))),
        other => Err(serde::de::Error::custom(format!(
            "expected number or string, found {other}"
        ))),
    }
}
