/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::client::VoatClient;
use crate::application::interfaces::user::UserService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::SearchOptions;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl UserService for VoatClient {
    async fn post_user_block(&self, user: &str) -> Result<ApiResponse, AppError> {
        info!("Blocking user: {}", user);
        self.call(ApiRequest::post(format!("u/{user}/block"))).await
    }

    async fn delete_user_block(&self, user: &str) -> Result<ApiResponse, AppError> {
        info!("Unblocking user: {}", user);
        self.call(ApiRequest::delete(format!("u/{user}/block"))).await
    }

    async fn get_user_info(&self, user: &str) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get(format!("u/{user}/info"))).await
    }

    async fn get_user_comments(
        &self,
        user: &str,
        options: Option<&SearchOptions>,
    ) -> Result<ApiResponse, AppError> {
        let request = ApiRequest::get(format!("u/{user}/comments")).search(options)?;
        self.call(request).await
    }

    async fn get_user_submissions(
        &self,
        user: &str,
        options: Option<&SearchOptions>,
    ) -> Result<ApiResponse, AppError> {
        let request = ApiRequest::get(format!("u/{user}/submissions")).search(options)?;
        self.call(request).await
    }

    async fn get_user_subscriptions(&self, user: Option<&str>) -> Result<ApiResponse, AppError> {
        let path = match user {
            Some(user) => format!("u/{user}/subscriptions"),
            None => "u/subscriptions".to_string(),
        };
        self.call(ApiRequest::get(path)).await
    }

    async fn get_user_saved(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("u/saved")).await
    }

    async fn get_user_blocked_subverses(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("u/blocked/subverses")).await
    }

    async fn get_user_blocked_users(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("u/blocked/users")).await
    }

    async fn get_preferences(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("u/preferences")).await
    }

    async fn put_preferences(&self, preferences: &Value) -> Result<ApiResponse, AppError> {
        info!("Updating preferences");
        self.call(ApiRequest::put("u/preferences").json(preferences.clone()))
            .await
    }
}
