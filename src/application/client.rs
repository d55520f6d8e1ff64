/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Client for the Voat v1 API
//!
//! Endpoints are grouped in service traits (see [`crate::application::interfaces`]),
//! all implemented by [`VoatClient`]. Every `get_` endpoint works anonymously
//! unless documented otherwise.
//!
//! # Example
//! ```ignore
//! use voat_client::prelude::*;
//!
//! let client = VoatClient::new(Config::new()).await?;
//! let status = client.get_system_status().await?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::constants::V1_API_PATH;
use crate::error::AppError;
use crate::model::auth::AuthData;
use crate::model::http::{ApiRequest, HttpClient};
use crate::model::responses::ApiResponse;
use crate::utils::title::clean_title;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the v1 API with OAuth2 session management
pub struct VoatClient {
    http: Arc<HttpClient>,
    auth: Arc<Auth>,
    config: Arc<Config>,
}

impl VoatClient {
    /// Creates a client and logs in when the configuration has secret, username and password
    ///
    /// Without complete credentials the client stays anonymous.
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::anonymous(config)?;
        if client.config.credentials.can_login() {
            client.auth.login().await?;
        } else {
            info!("No complete credentials configured, using the API anonymously");
        }
        Ok(client)
    }

    /// Creates a client without logging in
    pub fn anonymous(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http = Arc::new(HttpClient::new(&config.rest_api, V1_API_PATH)?);
        let auth = Arc::new(Auth::new(config.clone(), http.clone()));
        Ok(Self { http, auth, config })
    }

    /// Creates a client from previously saved authentication data
    ///
    /// The saved refresh token is used right away to get a fresh access token.
    pub async fn with_auth_data(config: Config, auth_data: AuthData) -> Result<Self, AppError> {
        let client = Self::anonymous(config)?;
        let refresh_token = auth_data.refresh_token.clone();
        client.auth.adopt(auth_data).await;
        client.auth.refresh_token(refresh_token.as_deref()).await?;
        Ok(client)
    }

    /// Logs in with the configured credentials
    pub async fn login(&self) -> Result<AuthData, AppError> {
        self.auth.login().await
    }

    /// Gets a new access token
    ///
    /// # Arguments
    /// * `refresh_token` - Token to use instead of the stored one
    pub async fn refresh_token(&self, refresh_token: Option<&str>) -> Result<AuthData, AppError> {
        self.auth.refresh_token(refresh_token).await
    }

    /// Whether the client holds a valid session
    pub async fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated().await
    }

    /// Current authentication data, to be persisted by the caller if needed
    pub async fn auth_data(&self) -> Option<AuthData> {
        self.auth.auth_data().await
    }

    /// Forgets the session
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the authentication manager
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Cleans a title with [`clean_title`]
    #[must_use]
    pub fn clean_title(&self, title: &str) -> String {
        clean_title(title)
    }

    /// Title as it will be sent, cleaned when `autoclean_titles` is set
    pub(crate) fn prepare_title(&self, title: &str) -> String {
        if self.config.autoclean_titles {
            let cleaned = clean_title(title);
            if cleaned != title {
                debug!("Title cleaned before sending");
            }
            cleaned
        } else {
            title.to_string()
        }
    }

    /// Calls an endpoint and returns the response envelope
    ///
    /// # Errors
    /// * `ApiCall` - the response has `success: false`
    /// * `Connection` - the response is not JSON
    pub async fn call(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let headers = self.auth.api_headers().await?;
        let value = self.http.call(&request, &headers).await?;
        ApiResponse::from_value(value)
    }
}
