/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{MessageState, MessageType, NewMessage};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the private message endpoints (authentication required)
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Replies to a message
    async fn post_messages_reply(
        &self,
        message_id: u64,
        value: &str,
    ) -> Result<ApiResponse, AppError>;

    /// Messages of the current user
    async fn get_messages(
        &self,
        message_type: MessageType,
        state: MessageState,
    ) -> Result<ApiResponse, AppError>;

    /// Sends a new private message
    async fn post_messages(&self, message: &NewMessage) -> Result<ApiResponse, AppError>;
}
