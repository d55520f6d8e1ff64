/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::client::VoatClient;
use crate::application::interfaces::comment::CommentService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::{CommentTarget, SearchOptions, value_body};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl CommentService for VoatClient {
    async fn get_comments(
        &self,
        subverse: &str,
        submission_id: u64,
        parent_id: Option<u64>,
        index: Option<u32>,
        options: Option<&SearchOptions>,
    ) -> Result<ApiResponse, AppError> {
        let path = match (parent_id, index) {
            (Some(parent), Some(index)) => {
                format!("v/{subverse}/{submission_id}/comments/{parent}/{index}")
            }
            (Some(parent), None) => format!("v/{subverse}/{submission_id}/comments/{parent}"),
            (None, _) => format!("v/{subverse}/{submission_id}/comments"),
        };
        let request = ApiRequest::get(path).search(options)?;
        self.call(request).await
    }

    async fn delete_comment(&self, comment_id: u64) -> Result<ApiResponse, AppError> {
        info!("Deleting comment: {}", comment_id);
        self.call(ApiRequest::delete(format!("comments/{comment_id}")))
            .await
    }

    async fn get_comment(&self, comment_id: u64) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get(format!("comments/{comment_id}")))
            .await
    }

    async fn post_comment(
        &self,
        target: &CommentTarget,
        value: &str,
    ) -> Result<ApiResponse, AppError> {
        let path = target.path();
        info!("Posting comment to: {}", path);
        self.call(ApiRequest::post(path).json(value_body(value))).await
    }

    async fn put_comment(&self, comment_id: u64, value: &str) -> Result<ApiResponse, AppError> {
        info!("Editing comment: {}", comment_id);
        let request = ApiRequest::put(format!("comments/{comment_id}")).json(value_body(value));
        self.call(request).await
    }

    async fn post_comments_save(&self, comment_id: u64) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::post(format!("comments/{comment_id}/save")))
            .await
    }

    async fn delete_comments_save(&self, comment_id: u64) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::delete(format!("comments/{comment_id}/save")))
            .await
    }
}
