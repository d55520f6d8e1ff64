/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::MAX_SEARCH_COUNT;
use crate::error::AppError;
use chrono::{DateTime, SecondsFormat, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Value used in paths and query strings
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Time span of a search
    SearchSpan {
        /// No time restriction
        All => "all",
        /// Last hour
        Hour => "hour",
        /// Last day
        Day => "day",
        /// Last week
        Week => "week",
        /// Last month
        Month => "month",
        /// Last quarter
        Quarter => "quarter",
        /// Last year
        Year => "year",
    }
}

wire_enum! {
    /// Sorting algorithm of a search
    SearchSort {
        /// Newest first
        New => "new",
        /// Highest score
        Top => "top",
        /// Rank
        Rank => "rank",
        /// Relative rank
        RelativeRank => "relativerank",
        /// Most active
        Active => "active",
        /// Most viewed
        Viewed => "viewed",
        /// Most discussed
        Discussed => "discussed",
        /// Lowest score
        Bottom => "bottom",
        /// Intensity
        Intensity => "intensity",
    }
}

wire_enum! {
    /// Direction of a search
    SortDirection {
        /// Natural direction of the sort
        Default => "default",
        /// Reversed direction
        Reversed => "reversed",
    }
}

wire_enum! {
    /// Kind of item a vote targets
    VoteType {
        /// A comment
        Comment => "comment",
        /// A submission
        Submission => "submission",
    }
}

wire_enum! {
    /// Message folder
    MessageType {
        /// Received private messages
        Inbox => "inbox",
        /// Sent private messages
        Sent => "sent",
        /// Comment replies
        Comment => "comment",
        /// Submission replies
        Submission => "submission",
        /// Mentions
        Mention => "mention",
        /// Everything
        All => "all",
    }
}

wire_enum! {
    /// Message read state
    MessageState {
        /// Unread only
        Unread => "unread",
        /// Read only
        Read => "read",
        /// Both
        All => "all",
    }
}

/// Vote direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vote {
    /// `-1`
    Down,
    /// `0`, withdraws a previous vote
    Revoke,
    /// `1`
    Up,
}

impl Vote {
    /// Numeric value used in the vote path
    #[must_use]
    pub fn value(&self) -> i8 {
        match self {
            Vote::Down => -1,
            Vote::Revoke => 0,
            Vote::Up => 1,
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<i8> for Vote {
    type Error = AppError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Vote::Down),
            0 => Ok(Vote::Revoke),
            1 => Ok(Vote::Up),
            other => Err(AppError::InvalidInput(format!(
                "vote must be -1, 0 or 1, got {other}"
            ))),
        }
    }
}

/// Search and sort options accepted by the listing endpoints
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Time span
    pub span: Option<SearchSpan>,
    /// Sorting algorithm
    pub sort: Option<SearchSort>,
    /// Sort direction
    pub direction: Option<SortDirection>,
    /// Reference date
    pub date: Option<DateTime<Utc>>,
    /// Number of records requested, at most 50
    pub count: Option<u32>,
    /// Index to start from
    pub index: Option<u32>,
    /// Page to retrieve, overrides `index`
    pub page: Option<u32>,
    /// Value to match
    pub search: Option<String>,
}

impl SearchOptions {
    /// Empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the span
    #[must_use]
    pub fn with_span(mut self, span: SearchSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Set the sort
    #[must_use]
    pub fn with_sort(mut self, sort: SearchSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the direction
    #[must_use]
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the date
    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the count
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the index
    #[must_use]
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the page
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the search phrase
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Query parameters for the options that are set
    ///
    /// # Errors
    /// `InvalidInput` when `count` is 0 or above 50
    pub fn to_query(&self) -> Result<Vec<(String, String)>, AppError> {
        if let Some(count) = self.count.filter(|c| !(1..=MAX_SEARCH_COUNT).contains(c)) {
            return Err(AppError::InvalidInput(format!(
                "count must be between 1 and {MAX_SEARCH_COUNT}, got {count}"
            )));
        }

        let mut query = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                query.push((key.to_string(), value));
            }
        };
        push("span", self.span.map(|v| v.to_string()));
        push("sort", self.sort.map(|v| v.to_string()));
        push("direction", self.direction.map(|v| v.to_string()));
        push(
            "date",
            self.date
                .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
        push("count", self.count.map(|v| v.to_string()));
        push("index", self.index.map(|v| v.to_string()));
        push("page", self.page.map(|v| v.to_string()));
        push("search", self.search.clone());
        Ok(query)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Appends `url`, or `content` when there is no url, to a submission body
fn push_link_or_text(body: &mut Map<String, Value>, url: &Option<String>, content: &Option<String>) {
    if let Some(url) = non_empty(url) {
        body.insert("url".to_string(), json!(url));
    } else if let Some(content) = non_empty(content) {
        body.insert("content".to_string(), json!(content));
    }
}

/// A new submission
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    /// Title
    pub title: String,
    /// Self text, ignored when `url` is set
    pub content: Option<String>,
    /// Link
    pub url: Option<String>,
    /// Not safe for work
    pub is_adult: bool,
    /// Hide the author
    pub is_anonymized: bool,
}

impl NewSubmission {
    /// Link submission
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Self (text) submission
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Set the adult flag
    #[must_use]
    pub fn with_adult(mut self, is_adult: bool) -> Self {
        self.is_adult = is_adult;
        self
    }

    /// Set the anonymized flag
    #[must_use]
    pub fn with_anonymized(mut self, is_anonymized: bool) -> Self {
        self.is_anonymized = is_anonymized;
        self
    }

    /// JSON body with `title` replacing the stored title
    #[must_use]
    pub fn to_body(&self, title: &str) -> Value {
        let mut body = Map::new();
        body.insert("title".to_string(), json!(title));
        body.insert("isAdult".to_string(), json!(self.is_adult));
        body.insert("isAnonymized".to_string(), json!(self.is_anonymized));
        push_link_or_text(&mut body, &self.url, &self.content);
        Value::Object(body)
    }
}

/// Changes to an existing submission
///
/// Title changes are only accepted during the first 10 minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEdit {
    /// New title
    pub title: Option<String>,
    /// New self text, ignored when `url` is set
    pub content: Option<String>,
    /// New link
    pub url: Option<String>,
    /// Not safe for work
    pub is_adult: bool,
    /// Hide the author
    pub is_anonymized: bool,
}

impl SubmissionEdit {
    /// Empty edit, only resets the flags
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the content
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the url
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the adult flag
    #[must_use]
    pub fn with_adult(mut self, is_adult: bool) -> Self {
        self.is_adult = is_adult;
        self
    }

    /// Set the anonymized flag
    #[must_use]
    pub fn with_anonymized(mut self, is_anonymized: bool) -> Self {
        self.is_anonymized = is_anonymized;
        self
    }

    /// JSON body, `title` being the already prepared title if any
    #[must_use]
    pub fn to_body(&self, title: Option<&str>) -> Value {
        let mut body = Map::new();
        body.insert("isAdult".to_string(), json!(self.is_adult));
        body.insert("isAnonymized".to_string(), json!(self.is_anonymized));
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            body.insert("title".to_string(), json!(title));
        }
        push_link_or_text(&mut body, &self.url, &self.content);
        Value::Object(body)
    }
}

/// What a new comment replies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    /// Top level comment on a submission
    Submission {
        /// Subverse of the submission
        subverse: String,
        /// Submission id
        submission_id: u64,
    },
    /// Reply to a comment, addressed through its submission
    Reply {
        /// Subverse of the submission
        subverse: String,
        /// Submission id
        submission_id: u64,
        /// Comment id
        comment_id: u64,
    },
    /// Reply to a comment by id only
    Comment(u64),
}

impl CommentTarget {
    /// Path of the endpoint receiving the comment
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            CommentTarget::Submission {
                subverse,
                submission_id,
            } => format!("v/{subverse}/{submission_id}/comment"),
            CommentTarget::Reply {
                subverse,
                submission_id,
                comment_id,
            } => format!("v/{subverse}/{submission_id}/comment/{comment_id}"),
            CommentTarget::Comment(comment_id) => format!("comments/{comment_id}"),
        }
    }
}

/// Body of the endpoints taking a single text value (comments, message replies)
#[must_use]
pub fn value_body(value: &str) -> Value {
    json!({ "value": value })
}

/// A new private message
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct NewMessage {
    /// Message text
    pub message: String,
    /// Recipient user name
    pub recipient: String,
    /// Subject
    pub subject: String,
}

impl NewMessage {
    /// Creates a message
    pub fn new(
        message: impl Into<String>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            recipient: recipient.into(),
            subject: subject.into(),
        }
    }
}
