/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the legacy read-only API
#[async_trait]
pub trait LegacyService: Send + Sync {
    /// Default subverses shown to guests
    async fn get_default_subverses(&self) -> Result<Value, AppError>;

    /// Hostnames banned from link submissions
    async fn get_banned_hostnames(&self) -> Result<Value, AppError>;

    /// Site-wide banned users
    async fn get_banned_users(&self) -> Result<Value, AppError>;

    /// Top 200 subverses ordered by subscriber count
    async fn get_top_200_subverses(&self) -> Result<Value, AppError>;

    /// The 100 submissions currently on the frontpage
    async fn get_frontpage(&self) -> Result<Value, AppError>;

    /// The 100 submissions currently on the frontpage of `subverse`
    async fn get_subverse_frontpage(&self, subverse: &str) -> Result<Value, AppError>;

    /// A single submission
    async fn get_single_submission(&self, submission_id: u64) -> Result<Value, AppError>;

    /// A single comment
    async fn get_single_comment(&self, comment_id: u64) -> Result<Value, AppError>;

    /// Sidebar of a subverse
    async fn get_subverse_info(&self, subverse_name: &str) -> Result<Value, AppError>;

    /// Basic information about a user
    async fn get_user_info(&self, user_name: &str) -> Result<Value, AppError>;

    /// Information about a badge
    ///
    /// # Arguments
    /// * `badge_id` - Badge name; spaces are sent as underscores
    async fn get_badge_info(&self, badge_id: &str) -> Result<Value, AppError>;

    /// Comments of a submission
    async fn get_submission_comments(&self, submission_id: u64) -> Result<Value, AppError>;

    /// Top 100 images
    async fn get_top_100_images_by_date(&self) -> Result<Value, AppError>;
}
