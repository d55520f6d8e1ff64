/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::{Config, RestApiConfig};
use crate::constants::LEGACY_API_PATH;
use crate::error::AppError;
use crate::model::http::{ApiRequest, HttpClient};
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Client for the legacy read-only API
///
/// Responses are returned as parsed JSON, without any envelope check.
#[derive(Debug, Clone)]
pub struct LegacyClient {
    http: HttpClient,
}

impl LegacyClient {
    /// Creates a client for the legacy endpoint of `config`
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Self::with_api(&config.legacy_api)
    }

    /// Creates a client for an explicit endpoint
    pub fn with_api(api: &RestApiConfig) -> Result<Self, AppError> {
        Ok(Self {
            http: HttpClient::new(api, LEGACY_API_PATH)?,
        })
    }

    /// Calls an endpoint and returns the parsed JSON
    pub async fn call(&self, request: ApiRequest) -> Result<Value, AppError> {
        self.http.call(&request, &HeaderMap::new()).await
    }
}
