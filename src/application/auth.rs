/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Authentication module for the Voat v1 API
//!
//! This module handles:
//! - Password grant login, for the owner of the API key (bots)
//! - Authorization code login, emulated through the HTML sign-in and grant forms,
//!   for third-party users
//! - Token refresh, explicit or from a background timer
//! - Adopting previously saved [`AuthData`]

use crate::application::config::Config;
use crate::constants::{
    FORM_CONTENT_TYPE, GRANT_MARKER, HTML_CONTENT_TYPE, OAUTH_AUTHORIZE_PATH, OAUTH_TOKEN_PATH,
    SIGN_IN_MARKER,
};
use crate::error::{AppError, LogInErrorKind, TokenErrorKind};
use crate::model::auth::{AuthData, TokenRequest};
use crate::model::http::{HttpClient, header_value};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, LOCATION};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Header carrying the public API key
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("voat-apikey");

static CODE_IN_LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*?\?code=(.*)$").expect("valid authorization code regex"));

/// Extracts the authorization code from the `Location` of the grant redirect
#[must_use]
pub fn authorization_code_from_location(location: &str) -> Option<String> {
    CODE_IN_LOCATION
        .captures(location)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[derive(Debug, Clone, Default)]
struct AuthState {
    data: Option<AuthData>,
    authenticated: bool,
}

/// Authentication manager for the v1 API
///
/// Holds the token, attaches it to requests and keeps it fresh with a single
/// background task. The state lives as long as the manager and is never persisted.
pub struct Auth {
    config: Arc<Config>,
    http: Arc<HttpClient>,
    state: RwLock<AuthState>,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
}

impl Auth {
    /// Creates an unauthenticated manager
    pub fn new(config: Arc<Config>, http: Arc<HttpClient>) -> Self {
        Self {
            config,
            http,
            state: RwLock::new(AuthState::default()),
            refresh_task: Mutex::new(None),
        }
    }

    /// Whether the last token request succeeded
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.authenticated
    }

    /// Current token document, if any
    pub async fn auth_data(&self) -> Option<AuthData> {
        self.state.read().await.data.clone()
    }

    /// Headers every v1 call carries: the API key and, once a token is known, the bearer token
    pub async fn api_headers(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, header_value(&self.config.credentials.api_key)?);
        if let Some(data) = &self.state.read().await.data {
            headers.insert(AUTHORIZATION, header_value(&data.bearer())?);
        }
        Ok(headers)
    }

    /// Logs in with the configured credentials
    ///
    /// Uses the authorization code flow when `third_party` is set, the password grant otherwise.
    pub async fn login(self: &Arc<Self>) -> Result<AuthData, AppError> {
        let credentials = &self.config.credentials;
        let (Some(username), Some(password)) = (&credentials.username, &credentials.password)
        else {
            return Err(AppError::InvalidInput(
                "username and password are required to log in".to_string(),
            ));
        };
        if credentials.secret.is_none() {
            return Err(AppError::InvalidInput(
                "the API secret is required to log in".to_string(),
            ));
        }

        info!("Logging in as {}", username);
        let data = if self.config.third_party {
            self.login_authorization_code(username, password).await?
        } else {
            self.login_password(username, password).await?
        };
        self.schedule_refresh(&data);
        info!("✓ Login successful");
        Ok(data)
    }

    async fn login_password(&self, username: &str, password: &str) -> Result<AuthData, AppError> {
        let credentials = &self.config.credentials;
        let request = TokenRequest::password(
            &credentials.api_key,
            credentials.secret.as_deref(),
            username,
            password,
        );
        debug!("Requesting token with the password grant");
        self.request_token(&request, FORM_CONTENT_TYPE).await
    }

    async fn login_authorization_code(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthData, AppError> {
        let credentials = &self.config.credentials;
        let mut headers = self.http.headers();
        headers.extend(self.api_headers().await?);

        let mut html_headers = headers.clone();
        html_headers.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
        let authorize_url = self.http.url(OAUTH_AUTHORIZE_PATH);
        debug!("GET {}", authorize_url);
        let response = self
            .http
            .client()
            .get(&authorize_url)
            .headers(html_headers)
            .query(&[
                ("response_type", "code"),
                ("scope", "account"),
                ("grant_type", "authorization_code"),
                ("client_id", credentials.api_key.as_str()),
            ])
            .send()
            .await?;
        let sign_in_url = response.url().clone();
        if !response.text().await?.contains(SIGN_IN_MARKER) {
            error!("Authorize page has no sign-in form");
            return Err(AppError::log_in(
                LogInErrorKind::InvalidKey,
                "Invalid API key, make sure your API key has a Redirect Url configured",
            ));
        }

        headers.remove(CONTENT_TYPE);
        debug!("POST {}", sign_in_url);
        let response = self
            .http
            .client()
            .post(sign_in_url)
            .headers(headers.clone())
            .form(&[
                ("username", username),
                ("password", password),
                ("submit.Signin", "Sign In"),
            ])
            .send()
            .await?;
        let grant_url = response.url().clone();
        if !response.text().await?.contains(GRANT_MARKER) {
            error!("Sign-in did not lead to the grant form");
            return Err(AppError::log_in(
                LogInErrorKind::InvalidPassword,
                "Invalid password",
            ));
        }

        debug!("POST {}", grant_url);
        let response = self
            .http
            .no_redirect_client()
            .post(grant_url)
            .headers(headers)
            .form(&[("submit.Grant", "Grant")])
            .send()
            .await?;
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let Some(code) = authorization_code_from_location(location) else {
            error!("Grant redirect carries no authorization code");
            return Err(AppError::log_in(
                LogInErrorKind::InvalidRedirection,
                "Unexpected error, could not get code from URL",
            ));
        };

        let request = TokenRequest::authorization_code(
            &credentials.api_key,
            credentials.secret.as_deref(),
            &code,
            username,
            password,
        );
        debug!("Requesting token with the authorization code grant");
        self.request_token(&request, HTML_CONTENT_TYPE).await
    }

    /// Gets a new access token and restarts the refresh timer
    ///
    /// # Arguments
    /// * `refresh_token` - Token to use instead of the stored one
    ///
    /// # Errors
    /// `Token/NotAuthenticated` when no token is given and the session is not authenticated
    pub async fn refresh_token(
        self: &Arc<Self>,
        refresh_token: Option<&str>,
    ) -> Result<AuthData, AppError> {
        let data = self.request_refresh(refresh_token).await?;
        self.schedule_refresh(&data);
        Ok(data)
    }

    async fn request_refresh(&self, refresh_token: Option<&str>) -> Result<AuthData, AppError> {
        let refresh_token = match refresh_token {
            Some(token) => token.to_string(),
            None => {
                let state = self.state.read().await;
                if !state.authenticated {
                    return Err(AppError::token(
                        TokenErrorKind::NotAuthenticated,
                        "You are not authenticated",
                        "",
                    ));
                }
                state
                    .data
                    .as_ref()
                    .and_then(|d| d.refresh_token.clone())
                    .ok_or_else(|| {
                        AppError::token(
                            TokenErrorKind::NotAuthenticated,
                            "The current session has no refresh token",
                            "",
                        )
                    })?
            }
        };

        info!("Refreshing access token");
        let credentials = &self.config.credentials;
        let request = TokenRequest::refresh(
            &credentials.api_key,
            credentials.secret.as_deref(),
            &refresh_token,
        );
        let data = self.request_token(&request, FORM_CONTENT_TYPE).await?;
        info!("✓ Token refreshed successfully");
        Ok(data)
    }

    /// Posts a token form and stores the resulting token
    async fn request_token(
        &self,
        request: &TokenRequest,
        content_type: &'static str,
    ) -> Result<AuthData, AppError> {
        let mut headers = self.http.headers();
        headers.extend(self.api_headers().await?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));

        let url = self.http.url(OAUTH_TOKEN_PATH);
        debug!("POST {} ({})", url, request.grant_type.as_str());
        let response = self
            .http
            .client()
            .post(&url)
            .headers(headers)
            .form(&request.to_form())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Token response status: {}", status);
        self.accept_token(&body).await
    }

    /// Stores the token carried by a token endpoint body
    ///
    /// The session stops being authenticated until a valid token is read.
    async fn accept_token(&self, body: &str) -> Result<AuthData, AppError> {
        let mut state = self.state.write().await;
        state.authenticated = false;
        let data = AuthData::from_token_response(body).inspect_err(|e| error!("{}", e))?;
        state.data = Some(data.clone());
        state.authenticated = true;
        Ok(data)
    }

    /// Adopts a saved token without contacting the server
    ///
    /// The bearer header is sent from now on, but the session only counts as
    /// authenticated after a successful refresh.
    pub async fn adopt(&self, data: AuthData) {
        let mut state = self.state.write().await;
        state.data = Some(data);
        state.authenticated = false;
    }

    /// Starts the background refresh of `data`, replacing any running one
    fn schedule_refresh(self: &Arc<Self>, data: &AuthData) {
        let ratio = self.config.effective_refresh_ratio();
        let first_delay = data.refresh_delay(ratio);
        debug!("Next token refresh in {:?}", first_delay);
        let handle = tokio::spawn(refresh_loop(Arc::downgrade(self), first_delay, ratio));
        self.replace_refresh_task(Some(handle));
    }

    fn replace_refresh_task(&self, handle: Option<JoinHandle<()>>) {
        let mut slot = match self.refresh_task.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        let previous = std::mem::replace(&mut *slot, handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Whether a background refresh is pending
    #[must_use]
    pub fn has_refresh_task(&self) -> bool {
        match self.refresh_task.lock() {
            Ok(slot) => slot.as_ref().is_some_and(|h| !h.is_finished()),
            Err(_) => false,
        }
    }

    /// Forgets the token and stops the refresh timer
    pub async fn logout(&self) {
        info!("Logging out");
        self.replace_refresh_task(None);
        *self.state.write().await = AuthState::default();
    }
}

impl Drop for Auth {
    fn drop(&mut self) {
        if let Ok(slot) = self.refresh_task.get_mut() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

async fn refresh_loop(auth: Weak<Auth>, first_delay: Duration, ratio: f64) {
    let mut delay = first_delay;
    loop {
        tokio::time::sleep(delay).await;
        let Some(auth) = auth.upgrade() else {
            break;
        };
        if !auth.is_authenticated().await {
            debug!("Session no longer authenticated, stopping token refresh");
            break;
        }
        match auth.request_refresh(None).await {
            Ok(data) => {
                delay = data.refresh_delay(ratio);
                debug!("Next token refresh in {:?}", delay);
            }
            Err(e) => {
                warn!("Background token refresh failed: {}", e);
                break;
            }
        }
    }
}
