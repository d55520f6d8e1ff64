/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error types returned by every fallible operation of the crate

use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Reason a login attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogInErrorKind {
    /// The authorize page has no sign-in form, usually an API key without a Redirect Url
    InvalidKey,
    /// The sign-in form was shown again instead of the grant form (third-party login only)
    InvalidPassword,
    /// The grant step did not redirect to a URL carrying an authorization code
    InvalidRedirection,
}

impl fmt::Display for LogInErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogInErrorKind::InvalidKey => "invalid key",
            LogInErrorKind::InvalidPassword => "invalid password",
            LogInErrorKind::InvalidRedirection => "invalid redirection",
        };
        f.write_str(s)
    }
}

/// Reason an access token could not be obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// The token endpoint did not answer with a usable token document
    AccessTokenNotFound,
    /// The token endpoint answered with an `error` field
    ApiCallFailure,
    /// A refresh was requested without an authenticated session
    NotAuthenticated,
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenErrorKind::AccessTokenNotFound => "access token not found",
            TokenErrorKind::ApiCallFailure => "api call failure",
            TokenErrorKind::NotAuthenticated => "not authenticated",
        };
        f.write_str(s)
    }
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport level failure reported by reqwest
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The server answered with something that is not JSON, typically an HTML error page
    #[error("connection error: unexpected non-JSON response with status {status}")]
    Connection {
        /// HTTP status of the response
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Login was rejected
    #[error("login error ({kind}): {message}")]
    LogIn {
        /// What went wrong
        kind: LogInErrorKind,
        /// Human readable description
        message: String,
    },
    /// An access token could not be obtained or refreshed
    #[error("token error ({kind}): {message}")]
    Token {
        /// What went wrong
        kind: TokenErrorKind,
        /// Human readable description
        message: String,
        /// Raw payload returned by the server, if any
        data: String,
    },
    /// A v1 API call returned `success: false`
    #[error("api call error: {message}")]
    ApiCall {
        /// Error message reported by the server
        message: String,
        /// Full response document
        data: Value,
    },
    /// Caller supplied an invalid value
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    pub(crate) fn log_in(kind: LogInErrorKind, message: impl Into<String>) -> Self {
        AppError::LogIn {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn token(
        kind: TokenErrorKind,
        message: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        AppError::Token {
            kind,
            message: message.into(),
            data: data.into(),
        }
    }
}
