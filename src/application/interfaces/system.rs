/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the system endpoints
#[async_trait]
pub trait SystemService: Send + Sync {
    /// Currently banned domains
    async fn get_system_banned_domains(&self) -> Result<ApiResponse, AppError>;

    /// Operational state of the API
    async fn get_system_status(&self) -> Result<ApiResponse, AppError>;

    /// Current server time, useful to compute clock offsets
    async fn get_system_time(&self) -> Result<ApiResponse, AppError>;
}
