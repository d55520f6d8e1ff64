/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::client::VoatClient;
use crate::application::interfaces::subverse::SubverseService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

#[async_trait]
impl SubverseService for VoatClient {
    async fn get_subverse_info(&self, subverse: &str) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get(format!("v/{subverse}/info"))).await
    }

    async fn post_subverse_block(&self, subverse: &str) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::post(format!("v/{subverse}/block"))).await
    }

    async fn delete_subverse_block(&self, subverse: &str) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::delete(format!("v/{subverse}/block")))
            .await
    }

    async fn get_subverse_defaults(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("subverse/defaults")).await
    }

    async fn get_subverse_new(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("subverse/new")).await
    }

    async fn get_subverse_top(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("subverse/top")).await
    }

    async fn get_subverse_search(&self, phrase: &str) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("subverse/search").query("phrase", phrase))
            .await
    }
}
