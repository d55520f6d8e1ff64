/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::client::VoatClient;
use crate::application::interfaces::vote::VoteService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::{Vote, VoteType};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl VoteService for VoatClient {
    async fn post_vote(
        &self,
        vote_type: VoteType,
        id: u64,
        vote: Vote,
        revoke_on_revote: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        debug!("Voting {} on {} {}", vote, vote_type, id);
        let mut request = ApiRequest::post(format!("vote/{vote_type}/{id}/{vote}"));
        if let Some(revoke) = revoke_on_revote {
            request = request.query("revokeOnRevote", revoke);
        }
        self.call(request).await
    }
}
