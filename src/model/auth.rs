/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::{AppError, TokenErrorKind};
use crate::model::serialization::u64_from_string_or_number;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

fn default_expires_in() -> u64 {
    3600
}

/// Seconds as a signed delta, saturating at the largest value chrono accepts
fn seconds(value: u64) -> TimeDelta {
    i64::try_from(value)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX)
}

/// Token document returned by the OAuth2 token endpoint
///
/// This is the authentication state of a client. It can be serialized and
/// handed back later through `VoatClient::with_auth_data` to skip the login.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthData {
    /// Bearer token for API calls
    pub access_token: String,
    /// Token used to obtain a new access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds
    #[serde(
        default = "default_expires_in",
        deserialize_with = "u64_from_string_or_number"
    )]
    pub expires_in: u64,
    /// Token type, usually `bearer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Account the token belongs to
    #[serde(rename = "userName", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Any other field sent by the server (`.issued`, `.expires`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// When this document was received
    #[serde(skip, default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for AuthData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthData")
            .field("access_token", &"***")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "***"))
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .field("user_name", &self.user_name)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

impl AuthData {
    /// Creates a token document received now
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        expires_in: u64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            expires_in,
            token_type: Some("bearer".to_string()),
            user_name: None,
            extra: Map::new(),
            created_at: Utc::now(),
        }
    }

    /// Parses the body of a token endpoint response
    ///
    /// # Errors
    /// * `Token/AccessTokenNotFound` - the body is not JSON or carries no `access_token`
    /// * `Token/ApiCallFailure` - the body has an `error` field
    pub fn from_token_response(body: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(body).map_err(|_| {
            AppError::token(
                TokenErrorKind::AccessTokenNotFound,
                "Unable to get access token",
                body,
            )
        })?;

        if value.get("error").is_some() {
            return Err(AppError::token(
                TokenErrorKind::ApiCallFailure,
                "API call failed",
                value.to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| {
            AppError::token(
                TokenErrorKind::AccessTokenNotFound,
                format!("Unable to get access token: {e}"),
                body,
            )
        })
    }

    /// `Authorization` header value
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// When the access token expires, saturating at the latest representable date
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at
            .checked_add_signed(seconds(self.expires_in))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Checks if the token is expired or will expire within `margin_seconds`
    #[must_use]
    pub fn is_expired(&self, margin_seconds: u64) -> bool {
        match self.expires_at().checked_sub_signed(seconds(margin_seconds)) {
            Some(deadline) => deadline <= Utc::now(),
            None => true,
        }
    }

    /// How long to wait before refreshing, `ratio` being the fraction of the lifetime to use
    #[must_use]
    pub fn refresh_delay(&self, ratio: f64) -> Duration {
        Duration::try_from_secs_f64(self.expires_in as f64 * ratio.clamp(0.0, 1.0))
            .unwrap_or(Duration::MAX)
    }
}

/// OAuth2 grant used against the token endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    /// Resource owner password grant, for the owner of the API key
    Password,
    /// Authorization code grant, for third-party users
    AuthorizationCode,
    /// Refresh token grant
    RefreshToken,
}

impl GrantType {
    /// Wire name of the grant
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::Password => "password",
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::RefreshToken => "refresh_token",
        }
    }
}

/// Form sent to the token endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct TokenRequest {
    /// Grant type
    pub grant_type: GrantType,
    /// Public API key
    pub client_id: String,
    /// Private key, omitted from the form when absent
    pub client_secret: Option<String>,
    /// Account name (password and authorization code grants)
    pub username: Option<String>,
    /// Account password (password and authorization code grants)
    pub password: Option<String>,
    /// Authorization code (authorization code grant)
    pub code: Option<String>,
    /// Refresh token (refresh grant)
    pub refresh_token: Option<String>,
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("grant_type", &self.grant_type)
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl TokenRequest {
    fn base(grant_type: GrantType, client_id: &str, client_secret: Option<&str>) -> Self {
        Self {
            grant_type,
            client_id: client_id.to_string(),
            client_secret: client_secret.map(str::to_string),
            username: None,
            password: None,
            code: None,
            refresh_token: None,
        }
    }

    /// Password grant
    pub fn password(
        client_id: &str,
        client_secret: Option<&str>,
        username: &str,
        password: &str,
    ) -> Self {
        Self {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            ..Self::base(GrantType::Password, client_id, client_secret)
        }
    }

    /// Authorization code grant
    pub fn authorization_code(
        client_id: &str,
        client_secret: Option<&str>,
        code: &str,
        username: &str,
        password: &str,
    ) -> Self {
        Self {
            code: Some(code.to_string()),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            ..Self::base(GrantType::AuthorizationCode, client_id, client_secret)
        }
    }

    /// Refresh grant
    pub fn refresh(client_id: &str, client_secret: Option<&str>, refresh_token: &str) -> Self {
        Self {
            refresh_token: Some(refresh_token.to_string()),
            ..Self::base(GrantType::RefreshToken, client_id, client_secret)
        }
    }

    /// Form fields in the order the service documents them
    #[must_use]
    pub fn to_form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![("grant_type", self.grant_type.as_str().to_string())];
        let optional = [
            ("code", &self.code),
            ("refresh_token", &self.refresh_token),
            ("username", &self.username),
            ("password", &self.password),
        ];
        form.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.clone().map(|v| (key, v))),
        );
        form.push(("client_id", self.client_id.clone()));
        if let Some(secret) = &self.client_secret {
            form.push(("client_secret", secret.clone()));
        }
        form
    }
}
