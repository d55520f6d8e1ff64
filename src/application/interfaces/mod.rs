/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Comment endpoints
pub mod comment;
/// Legacy read-only API
pub mod legacy;
/// Private message endpoints
pub mod message;
/// Stream endpoints
pub mod stream;
/// Submission endpoints, including saving
pub mod submission;
/// Subverse endpoints
pub mod subverse;
/// System endpoints
pub mod system;
/// User and preference endpoints
pub mod user;
/// Vote endpoint
pub mod vote;

pub use comment::CommentService;
pub use legacy::LegacyService;
pub use message::MessageService;
pub use stream::StreamService;
pub use submission::SubmissionService;
pub use subverse::SubverseService;
pub use system::SystemService;
pub use user::UserService;
pub use vote::VoteService;
