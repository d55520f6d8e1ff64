/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error block of a failed v1 call
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorInfo {
    /// Error category reported by the server
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Human readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope of every v1 response
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the call succeeded
    pub success: bool,
    /// Payload of the call
    #[serde(default)]
    pub data: Value,
    /// Error details when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorInfo>,
}

impl ApiResponse {
    /// Interprets a v1 response document
    ///
    /// # Errors
    /// `ApiCall` when `success` is not `true`, carrying the whole document
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        if value.get("success").and_then(Value::as_bool) != Some(true) {
            let message = value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("API call returned an error")
                .to_string();
            return Err(AppError::ApiCall {
                message,
                data: value,
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Deserializes the payload into a caller type
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(T::deserialize(&self.data)?)
    }
}
