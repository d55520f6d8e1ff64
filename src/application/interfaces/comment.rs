/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{CommentTarget, SearchOptions};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the comment endpoints
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Comments of a submission
    ///
    /// # Arguments
    /// * `parent_id` - Only list the children of this comment
    /// * `index` - Start position among those children, ignored without `parent_id`
    async fn get_comments(
        &self,
        subverse: &str,
        submission_id: u64,
        parent_id: Option<u64>,
        index: Option<u32>,
        options: Option<&SearchOptions>,
    ) -> Result<ApiResponse, AppError>;

    /// Deletes a comment
    async fn delete_comment(&self, comment_id: u64) -> Result<ApiResponse, AppError>;

    /// Gets a single comment
    async fn get_comment(&self, comment_id: u64) -> Result<ApiResponse, AppError>;

    /// Posts a comment on a submission or a reply to a comment
    async fn post_comment(
        &self,
        target: &CommentTarget,
        value: &str,
    ) -> Result<ApiResponse, AppError>;

    /// Edits a comment
    async fn put_comment(&self, comment_id: u64, value: &str) -> Result<ApiResponse, AppError>;

    /// Saves a comment to the saved items of the current user (authentication required)
    async fn post_comments_save(&self, comment_id: u64) -> Result<ApiResponse, AppError>;

    /// Removes a comment from the saved items (authentication required)
    async fn delete_comments_save(&self, comment_id: u64) -> Result<ApiResponse, AppError>;
}
