/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Voat Client
//!
//! Client library for the Voat HTTP APIs:
//!
//! - the legacy read-only API served under `api/` on `voat.co`
//! - the OAuth2 authenticated v1 API served under `api/v1/` on `api.voat.co`
//!
//! The library builds the requests, keeps the authentication state (including a
//! background token refresh) and returns parsed JSON or a structured [`error::AppError`].
//!
//! ## Example
//!
//! ```ignore
//! use voat_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = VoatClient::new(Config::new()).await?;
//!     let submissions = client
//!         .get_submissions("_front", Some(&SearchOptions::new().with_sort(SearchSort::Top)))
//!         .await?;
//!     println!("{}", submissions.data);
//!     Ok(())
//! }
//! ```

/// Application layer: configuration, authentication, clients and services
pub mod application;

/// Constants shared across the crate
pub mod constants;

/// Error types
pub mod error;

/// Request, response and authentication models plus the HTTP call wrapper
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Configuration, logging and title helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
