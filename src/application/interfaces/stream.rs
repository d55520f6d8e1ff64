/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for live monitoring (authentication required)
///
/// Each call returns the items created since the previous call.
#[async_trait]
pub trait StreamService: Send + Sync {
    /// New submissions
    async fn get_stream_submissions(&self) -> Result<ApiResponse, AppError>;

    /// New comments
    async fn get_stream_comments(&self) -> Result<ApiResponse, AppError>;
}
