//! Data models for issues and pull requests returned by listing endpoints.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into the public domain types handed to page handlers.

use serde::Deserialize;

use super::options::StateReason;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// An issue as returned by the repository issue listing or issue search.
///
/// GitHub reports pull requests through the same endpoints;
/// [`Issue::is_pull_request`] tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    /// Issue number within its repository.
    pub number: u64,
    /// Title of the issue.
    pub title: Option<String>,
    /// State (e.g. open, closed).
    pub state: Option<String>,
    /// Why the issue was closed or reopened, when GitHub reports it.
    pub state_reason: Option<StateReason>,
    /// Author login if present.
    pub author: Option<String>,
    /// Label names in server order.
    pub labels: Vec<String>,
    /// Assignee logins.
    pub assignees: Vec<String>,
    /// Number of comments.
    pub comments: u64,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_at: Option<String>,
    /// Close timestamp (ISO 8601 format).
    pub closed_at: Option<String>,
    /// Whether this entry is a pull request.
    pub is_pull_request: bool,
}

/// Lightweight pull request summary for listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// State (e.g. open, closed).
    pub state: Option<String>,
    /// Author login if present.
    pub author: Option<String>,
    /// Whether the pull request is a draft.
    pub draft: bool,
    /// Source branch name.
    pub head_ref: Option<String>,
    /// Target branch name.
    pub base_ref: Option<String>,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    pub(crate) name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiBranch {
    #[serde(rename = "ref")]
    pub(crate) ref_name: Option<String>,
}

/// API response type shared by issue listing and issue search.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssue {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) state_reason: Option<String>,
    pub(crate) user: Option<ApiUser>,
    #[serde(default)]
    pub(crate) labels: Vec<ApiLabel>,
    #[serde(default)]
    pub(crate) assignees: Vec<ApiUser>,
    pub(crate) comments: Option<u64>,
    pub(crate) html_url: Option<String>,
    pub(crate) created_at: Option<String>,
    pub(crate) updated_at: Option<String>,
    pub(crate) closed_at: Option<String>,
    pub(crate) pull_request: Option<serde_json::Value>,
}

/// API response type for pull request listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequestSummary {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) user: Option<ApiUser>,
    pub(crate) draft: Option<bool>,
    pub(crate) head: Option<ApiBranch>,
    pub(crate) base: Option<ApiBranch>,
    pub(crate) html_url: Option<String>,
    pub(crate) created_at: Option<String>,
    pub(crate) updated_at: Option<String>,
}

impl From<ApiIssue> for Issue {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            title: value.title,
            state: value.state,
            state_reason: value.state_reason.as_deref().and_then(StateReason::parse),
            author: value.user.and_then(|user| user.login),
            labels: value.labels.into_iter().filter_map(|label| label.name).collect(),
            assignees: value
                .assignees
                .into_iter()
                .filter_map(|user| user.login)
                .collect(),
            comments: value.comments.unwrap_or(0),
            html_url: value.html_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
            closed_at: value.closed_at,
            is_pull_request: value.pull_request.is_some_and(|link| !link.is_null()),
        }
    }
}

impl From<ApiPullRequestSummary> for PullRequestSummary {
    fn from(value: ApiPullRequestSummary) -> Self {
        Self {
            number: value.number,
            title: value.title,
            state: value.state,
            author: value.user.and_then(|user| user.login),
            draft: value.draft.unwrap_or(false),
            head_ref: value.head.and_then(|branch| branch.ref_name),
            base_ref: value.base.and_then(|branch| branch.ref_name),
            html_url: value.html_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
