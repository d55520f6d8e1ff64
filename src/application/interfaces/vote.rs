/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{Vote, VoteType};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the vote endpoint (authentication required)
#[async_trait]
pub trait VoteService: Send + Sync {
    /// Votes on a comment or submission
    ///
    /// # Arguments
    /// * `revoke_on_revote` - `true` revokes on a duplicate vote, `false` ignores it;
    ///   the server defaults to `true`
    async fn post_vote(
        &self,
        vote_type: VoteType,
        id: u64,
        vote: Vote,
        revoke_on_revote: Option<bool>,
    ) -> Result<ApiResponse, AppError>;
}
