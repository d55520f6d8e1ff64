/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::client::VoatClient;
use crate::application::interfaces::submission::SubmissionService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::{NewSubmission, SearchOptions, SubmissionEdit};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use tracing::{debug, info};

fn submission_path(submission_id: u64, subverse: Option<&str>) -> String {
    match subverse {
        Some(subverse) => format!("v/{subverse}/{submission_id}"),
        None => format!("submissions/{submission_id}"),
    }
}

#[async_trait]
impl SubmissionService for VoatClient {
    async fn get_submissions(
        &self,
        subverse: &str,
        options: Option<&SearchOptions>,
    ) -> Result<ApiResponse, AppError> {
        debug!("Getting submissions of: {}", subverse);
        let request = ApiRequest::get(format!("v/{subverse}")).search(options)?;
        self.call(request).await
    }

    async fn post_submission(
        &self,
        subverse: &str,
        submission: &NewSubmission,
    ) -> Result<ApiResponse, AppError> {
        let title = self.prepare_title(&submission.title);
        if title.is_empty() {
            return Err(AppError::InvalidInput(
                "submission title is empty".to_string(),
            ));
        }
        info!("Posting submission to: {}", subverse);
        let request = ApiRequest::post(format!("v/{subverse}")).json(submission.to_body(&title));
        self.call(request).await
    }

    async fn delete_submission(
        &self,
        submission_id: u64,
        subverse: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        info!("Deleting submission: {}", submission_id);
        self.call(ApiRequest::delete(submission_path(submission_id, subverse)))
            .await
    }

    async fn get_submission(
        &self,
        submission_id: u64,
        subverse: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::get(submission_path(submission_id, subverse)))
            .await
    }

    async fn put_submission(
        &self,
        submission_id: u64,
        subverse: Option<&str>,
        edit: &SubmissionEdit,
    ) -> Result<ApiResponse, AppError> {
        let title = edit.title.as_deref().map(|t| self.prepare_title(t));
        info!("Editing submission: {}", submission_id);
        let request = ApiRequest::put(submission_path(submission_id, subverse))
            .json(edit.to_body(title.as_deref()));
        self.call(request).await
    }

    async fn post_submissions_save(&self, submission_id: u64) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::post(format!("submissions/{submission_id}/save")))
            .await
    }

    async fn delete_submissions_save(&self, submission_id: u64) -> Result<ApiResponse, AppError> {
        self.call(ApiRequest::delete(format!("submissions/{submission_id}/save")))
            .await
    }
}
