/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::client::VoatClient;
use crate::application::interfaces::stream::StreamService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

#[async_trait]
impl StreamService for VoatClient {
    async fn get_stream_submissions(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("stream/submissions")).await
    }

    async fn get_stream_comments(&self) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get("stream/comments")).await
    }
}
