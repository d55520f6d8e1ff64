/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the subverse endpoints
#[async_trait]
pub trait SubverseService: Send + Sync {
    /// Subverse information
    async fn get_subverse_info(&self, subverse: &str) -> Result<ApiResponse, AppError>;

    /// Blocks a subverse (authentication required)
    async fn post_subverse_block(&self, subverse: &str) -> Result<ApiResponse, AppError>;

    /// Unblocks a previously blocked subverse (authentication required)
    async fn delete_subverse_block(&self, subverse: &str) -> Result<ApiResponse, AppError>;

    /// Default subverse list
    async fn get_subverse_defaults(&self) -> Result<ApiResponse, AppError>;

    /// Newest subverses
    async fn get_subverse_new(&self) -> Result<ApiResponse, AppError>;

    /// Top subverses by subscriber count
    async fn get_subverse_top(&self) -> Result<ApiResponse, AppError>;

    /// Searches the subverse catalog
    async fn get_subverse_search(&self, phrase: &str) -> Result<ApiResponse, AppError>;
}
