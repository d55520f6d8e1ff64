/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::SearchOptions;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the user and preference endpoints
#[async_trait]
pub trait UserService: Send + Sync {
    /// Blocks a user, hiding their submissions, comments and messages (authentication required)
    async fn post_user_block(&self, user: &str) -> Result<ApiResponse, AppError>;

    /// Unblocks a previously blocked user (authentication required)
    async fn delete_user_block(&self, user: &str) -> Result<ApiResponse, AppError>;

    /// User information
    async fn get_user_info(&self, user: &str) -> Result<ApiResponse, AppError>;

    /// Comments of a user
    async fn get_user_comments(
        &self,
        user: &str,
        options: Option<&SearchOptions>,
    ) -> Result<ApiResponse, AppError>;

    /// Submissions of a user
    async fn get_user_submissions(
        &self,
        user: &str,
        options: Option<&SearchOptions>,
    ) -> Result<ApiResponse, AppError>;

    /// Subscriptions of `user`, or of the current user when `None` (authentication required)
    async fn get_user_subscriptions(&self, user: Option<&str>) -> Result<ApiResponse, AppError>;

    /// Saved items of the current user (authentication required)
    async fn get_user_saved(&self) -> Result<ApiResponse, AppError>;

    /// Subverses blocked by the current user (authentication required)
    async fn get_user_blocked_subverses(&self) -> Result<ApiResponse, AppError>;

    /// Users blocked by the current user (authentication required)
    async fn get_user_blocked_users(&self) -> Result<ApiResponse, AppError>;

    /// Preferences of the current user (authentication required)
    async fn get_preferences(&self) -> Result<ApiResponse, AppError>;

    /// Updates the preferences of the current user (authentication required)
    async fn put_preferences(&self, preferences: &Value) -> Result<ApiResponse, AppError>;
}
