/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_DOMAIN, DEFAULT_LEGACY_DOMAIN, DEFAULT_REFRESH_RATIO, DEFAULT_SCHEME,
    DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Credentials for the v1 API
///
/// Password and secret are never serialized, so printing a configuration is safe.
pub struct Credentials {
    /// Public API key, sent as `Voat-ApiKey`
    pub api_key: String,
    /// Private key of the API key
    #[serde(skip_serializing, default)]
    pub secret: Option<String>,
    /// Account name
    pub username: Option<String>,
    /// Account password
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl Credentials {
    /// Creates credentials that only carry an API key (anonymous access)
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Creates credentials able to log in
    pub fn new(
        api_key: impl Into<String>,
        secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret: Some(secret.into()),
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Whether secret, username and password are all present
    #[must_use]
    pub fn can_login(&self) -> bool {
        self.secret.is_some() && self.username.is_some() && self.password.is_some()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Where one of the APIs is served
pub struct RestApiConfig {
    /// Host name (and optional port), e.g. `api.voat.co`
    pub domain: String,
    /// URL scheme, `https` in production
    pub scheme: String,
    /// Timeout in seconds for each request
    pub timeout: u64,
}

impl RestApiConfig {
    /// Creates an https endpoint configuration with the default timeout
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            scheme: DEFAULT_SCHEME.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Builds `{scheme}://{domain}`
    #[must_use]
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.domain)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Voat clients
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// v1 API endpoint
    pub rest_api: RestApiConfig,
    /// Legacy API endpoint
    pub legacy_api: RestApiConfig,
    /// Use the full authorization-code flow; needed when the user does not own the API key
    pub third_party: bool,
    /// Sanitize submission titles before sending them
    pub autoclean_titles: bool,
    /// Fraction of the token lifetime after which the token is refreshed
    pub refresh_ratio: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment (and `.env` when present)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("VOAT_API_KEY", String::from("default_api_key"));
        if api_key == "default_api_key" {
            error!("VOAT_API_KEY not found in environment variables or .env file");
        }

        let scheme = get_env_or_default("VOAT_SCHEME", DEFAULT_SCHEME.to_string());
        let timeout = get_env_or_default("VOAT_TIMEOUT", DEFAULT_TIMEOUT_SECS);

        Config {
            credentials: Credentials {
                api_key,
                secret: get_env_or_none("VOAT_SECRET"),
                username: get_env_or_none("VOAT_USERNAME"),
                password: get_env_or_none("VOAT_PASSWORD"),
            },
            rest_api: RestApiConfig {
                domain: get_env_or_default("VOAT_DOMAIN", DEFAULT_DOMAIN.to_string()),
                scheme: scheme.clone(),
                timeout,
            },
            legacy_api: RestApiConfig {
                domain: get_env_or_default("VOAT_LEGACY_DOMAIN", DEFAULT_LEGACY_DOMAIN.to_string()),
                scheme,
                timeout,
            },
            third_party: get_env_flag("VOAT_THIRD_PARTY", false),
            autoclean_titles: get_env_flag("VOAT_AUTOCLEAN_TITLES", true),
            refresh_ratio: checked_ratio(get_env_or_default(
                "VOAT_REFRESH_RATIO",
                DEFAULT_REFRESH_RATIO,
            )),
        }
    }

    /// Creates a configuration for the production domains without reading the environment
    pub fn with_credentials(credentials: Credentials) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig::new(DEFAULT_DOMAIN),
            legacy_api: RestApiConfig::new(DEFAULT_LEGACY_DOMAIN),
            third_party: false,
            autoclean_titles: true,
            refresh_ratio: DEFAULT_REFRESH_RATIO,
        }
    }

    /// Ratio actually used by the refresh timer
    #[must_use]
    pub fn effective_refresh_ratio(&self) -> f64 {
        checked_ratio(self.refresh_ratio)
    }
}

fn checked_ratio(ratio: f64) -> f64 {
    if ratio > 0.0 && ratio <= 1.0 {
        ratio
    } else {
        warn!(
            "Refresh ratio {} outside (0, 1], using {}",
            ratio, DEFAULT_REFRESH_RATIO
        );
        DEFAULT_REFRESH_RATIO
    }
}
