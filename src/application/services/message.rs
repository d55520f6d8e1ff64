/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::client::VoatClient;
use crate::application::interfaces::message::MessageService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::{MessageState, MessageType, NewMessage, value_body};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl MessageService for VoatClient {
    async fn post_messages_reply(
        &self,
        message_id: u64,
        value: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Replying to message: {}", message_id);
        let request =
            ApiRequest::post(format!("u/messages/reply/{message_id}")).json(value_body(value));
        self.call(request).await
    }

    async fn get_messages(
        &self,
        message_type: MessageType,
        state: MessageState,
    ) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get(format!("u/messages/{message_type}/{state}")))
            .await
    }

    async fn post_messages(&self, message: &NewMessage) -> Result<ApiResponse, AppError> {
        info!("Sending message to: {}", message.recipient);
        let body = serde_json::to_value(message)?;
        self.call(ApiRequest::post("u/messages").json(body)).await
    }
}
