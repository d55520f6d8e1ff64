/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Voat Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Voat client library.
//!
//! ## Usage
//!
//! ```rust
//! use voat_client::prelude::*;
//!
//! let config = Config::default();
//! let legacy = LegacyClient::new(&config).unwrap();
//! assert_eq!(clean_title("  hello   world "), "hello world");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration of the clients
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library and its error kinds
pub use crate::error::{AppError, LogInErrorKind, TokenErrorKind};

// ============================================================================
// CLIENTS AND AUTHENTICATION
// ============================================================================

/// Authentication manager
pub use crate::application::auth::{API_KEY_HEADER, Auth};

/// v1 API client
pub use crate::application::client::VoatClient;

/// Legacy API client
pub use crate::application::legacy::LegacyClient;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Endpoint groups
pub use crate::application::interfaces::{
    CommentService, LegacyService, MessageService, StreamService, SubmissionService,
    SubverseService, SystemService, UserService, VoteService,
};

// ============================================================================
// MODELS
// ============================================================================

/// Authentication models
pub use crate::model::auth::{AuthData, GrantType, TokenRequest};

/// Request wrapper
pub use crate::model::http::ApiRequest;

/// Request models
pub use crate::model::requests::{
    CommentTarget, MessageState, MessageType, NewMessage, NewSubmission, SearchOptions,
    SearchSort, SearchSpan, SortDirection, SubmissionEdit, Vote, VoteType,
};

/// Response models
pub use crate::model::responses::{ApiErrorInfo, ApiResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Title sanitizer
pub use crate::utils::title::clean_title;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
