/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::client::VoatClient;
use crate::application::interfaces::system::SystemService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

#[async_trait]
impl SystemService for VoatClient {
    async fn get_system_banned_domains(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("system/banned/domains")).await
    }

    async fn get_system_status(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("system/status")).await
    }

    async fn get_system_time(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("system/time")).await
    }
}
