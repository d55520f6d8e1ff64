/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Authentication and token refresh
pub mod auth;
/// v1 API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits grouping the endpoints
pub mod interfaces;
/// Legacy API client
pub mod legacy;
mod services;
