/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::legacy::LegacyService;
use crate::application::legacy::LegacyClient;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[async_trait]
impl LegacyService for LegacyClient {
    async fn get_default_subverses(&self) -> Result<Value, AppError> {
        self.call(ApiRequest::get("defaultsubverses")).await
    }

    async fn get_banned_hostnames(&self) -> Result<Value, AppError> {
        self.call(ApiRequest::get("bannedhostnames")).await
    }

    async fn get_banned_users(&self) -> Result<Value, AppError> {
        self.call(ApiRequest::get("bannedusers")).await
    }

    async fn get_top_200_subverses(&self) -> Result<Value, AppError> {
        self.call(ApiRequest::get("top200subverses")).await
    }

    async fn get_frontpage(&self) -> Result<Value, AppError> {
        self.call(ApiRequest::get("frontpage")).await
    }

    async fn get_subverse_frontpage(&self, subverse: &str) -> Result<Value, AppError> {
        debug!("Getting frontpage of subverse: {}", subverse);
        self.call(ApiRequest::get("subversefrontpage").query("subverse", subverse))
            .await
    }

    async fn get_single_submission(&self, submission_id: u64) -> Result<Value, AppError> {
        self.call(ApiRequest::get("singlesubmission").query("id", submission_id))
            .await
    }

    async fn get_single_comment(&self, comment_id: u64) -> Result<Value, AppError> {
        self.call(ApiRequest::get("singlecomment").query("id", comment_id))
            .await
    }

    async fn get_subverse_info(&self, subverse_name: &str) -> Result<Value, AppError> {
        self.call(ApiRequest::get("subverseinfo").query("subverseName", subverse_name))
            .await
    }

    async fn get_user_info(&self, user_name: &str) -> Result<Value, AppError> {
        self.call(ApiRequest::get("userinfo").query("userName", user_name))
            .await
    }

    async fn get_badge_info(&self, badge_id: &str) -> Result<Value, AppError> {
        let badge_id = badge_id.trim().replace(' ', "_");
        self.call(ApiRequest::get("badgeinfo").query("badgeId", badge_id))
            .await
    }

    async fn get_submission_comments(&self, submission_id: u64) -> Result<Value, AppError> {
        self.call(ApiRequest::get("submissioncomments").query("submissionId", submission_id))
            .await
    }

    async fn get_top_100_images_by_date(&self) -> Result<Value, AppError> {
        self.call(ApiRequest::get("top100imagesbydate")).await
    }
}
