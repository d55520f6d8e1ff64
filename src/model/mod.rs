/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Authentication data and token endpoint payloads
pub mod auth;
/// HTTP call wrapper shared by the legacy and v1 clients
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Serde helpers
pub mod serialization;
