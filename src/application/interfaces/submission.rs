/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{NewSubmission, SearchOptions, SubmissionEdit};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the submission endpoints
///
/// Methods taking an optional `subverse` address the submission as
/// `v/{subverse}/{id}` when it is given, `submissions/{id}` otherwise.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Submissions of a subverse
    ///
    /// `_any` lists every public subverse ignoring block lists and minimum CCP,
    /// `_front` the frontpage of the current user.
    async fn get_submissions(
        &self,
        subverse: &str,
        options: Option<&SearchOptions>,
    ) -> Result<ApiResponse, AppError>;

    /// Posts a new submission
    ///
    /// The title is cleaned first when `autoclean_titles` is set.
    async fn post_submission(
        &self,
        subverse: &str,
        submission: &NewSubmission,
    ) -> Result<ApiResponse, AppError>;

    /// Deletes a submission
    async fn delete_submission(
        &self,
        submission_id: u64,
        subverse: Option<&str>,
    ) -> Result<ApiResponse, AppError>;

    /// Gets a single submission
    async fn get_submission(
        &self,
        submission_id: u64,
        subverse: Option<&str>,
    ) -> Result<ApiResponse, AppError>;

    /// Edits a submission
    async fn put_submission(
        &self,
        submission_id: u64,
        subverse: Option<&str>,
        edit: &SubmissionEdit,
    ) -> Result<ApiResponse, AppError>;

    /// Saves a submission to the saved items of the current user (authentication required)
    async fn post_submissions_save(&self, submission_id: u64) -> Result<ApiResponse, AppError>;

    /// Removes a submission from the saved items (authentication required)
    async fn delete_submissions_save(&self, submission_id: u64) -> Result<ApiResponse, AppError>;
}
