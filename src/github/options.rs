//! Filter and sort options for the listing and search endpoints.
//!
//! Each options type embeds [`ListOptions`] and implements [`PageCursor`], so
//! it can be handed to [`map_pages`] which advances its page in place.
//!
//! [`map_pages`]: super::pagination::map_pages

use super::pagination::{ListOptions, PageCursor};

/// Issue state filter for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueState {
    /// Only open issues.
    #[default]
    Open,
    /// Only closed issues.
    Closed,
    /// All issues regardless of state.
    All,
}

impl IssueState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

/// Pull request state filter for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestState {
    /// Only open pull requests.
    #[default]
    Open,
    /// Only closed pull requests.
    Closed,
    /// All pull requests regardless of state.
    All,
}

impl PullRequestState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

/// Reason attached to an issue's most recent state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateReason {
    /// Closed because the work was done.
    Completed,
    /// Closed without being worked on.
    NotPlanned,
    /// Reopened after being closed.
    Reopened,
}

impl StateReason {
    /// Returns the API value for this reason.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::NotPlanned => "not_planned",
            Self::Reopened => "reopened",
        }
    }

    /// Parses an API value, returning `None` for reasons this crate does not model.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "completed" => Some(Self::Completed),
            "not_planned" => Some(Self::NotPlanned),
            "reopened" => Some(Self::Reopened),
            _ => None,
        }
    }
}

/// Sort direction for listing and search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the API parameter value for this direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query parameter pairs sent with a listing request.
pub(crate) type QueryPairs = Vec<(&'static str, String)>;

fn push_optional(pairs: &mut QueryPairs, key: &'static str, value: Option<&str>) {
    if let Some(present) = value {
        pairs.push((key, present.to_owned()));
    }
}

fn push_list(pairs: &mut QueryPairs, list: &ListOptions) {
    pairs.push(("page", list.page.to_string()));
    pairs.push(("per_page", list.per_page.to_string()));
}

/// Options for listing the issues of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueListOptions {
    /// Filter by state. Defaults to open.
    pub state: IssueState,
    /// Only issues carrying every one of these labels.
    pub labels: Vec<String>,
    /// Milestone number, `*` for any or `none` for no milestone.
    pub milestone: Option<String>,
    /// Assignee login, `*` for any or `none` for unassigned.
    pub assignee: Option<String>,
    /// Author login.
    pub creator: Option<String>,
    /// Login of a user mentioned in the issue.
    pub mentioned: Option<String>,
    /// Sort key: `created`, `updated` or `comments`.
    pub sort: Option<String>,
    /// Sort direction.
    pub direction: Option<SortDirection>,
    /// Only issues updated at or after this ISO 8601 timestamp.
    pub since: Option<String>,
    /// Page cursor.
    pub list: ListOptions,
}

impl IssueListOptions {
    pub(crate) fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("state", self.state.as_str().to_owned())];
        if !self.labels.is_empty() {
            pairs.push(("labels", self.labels.join(",")));
        }
        push_optional(&mut pairs, "milestone", self.milestone.as_deref());
        push_optional(&mut pairs, "assignee", self.assignee.as_deref());
        push_optional(&mut pairs, "creator", self.creator.as_deref());
        push_optional(&mut pairs, "mentioned", self.mentioned.as_deref());
        push_optional(&mut pairs, "sort", self.sort.as_deref());
        push_optional(
            &mut pairs,
            "direction",
            self.direction.as_ref().map(SortDirection::as_str),
        );
        push_optional(&mut pairs, "since", self.since.as_deref());
        push_list(&mut pairs, &self.list);
        pairs
    }
}

impl PageCursor for IssueListOptions {
    fn list_options(&self) -> &ListOptions {
        &self.list
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

/// Options for listing the pull requests of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestListOptions {
    /// Filter by state. Defaults to open.
    pub state: PullRequestState,
    /// Source branch as `user:ref-name`.
    pub head: Option<String>,
    /// Target branch name.
    pub base: Option<String>,
    /// Sort key: `created`, `updated`, `popularity` or `long-running`.
    pub sort: Option<String>,
    /// Sort direction.
    pub direction: Option<SortDirection>,
    /// Page cursor.
    pub list: ListOptions,
}

impl PullRequestListOptions {
    pub(crate) fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("state", self.state.as_str().to_owned())];
        push_optional(&mut pairs, "head", self.head.as_deref());
        push_optional(&mut pairs, "base", self.base.as_deref());
        push_optional(&mut pairs, "sort", self.sort.as_deref());
        push_optional(
            &mut pairs,
            "direction",
            self.direction.as_ref().map(SortDirection::as_str),
        );
        push_list(&mut pairs, &self.list);
        pairs
    }
}

impl PageCursor for PullRequestListOptions {
    fn list_options(&self) -> &ListOptions {
        &self.list
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

/// Options for the search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Sort key, e.g. `comments`, `created` or `updated`. Best match when unset.
    pub sort: Option<String>,
    /// Sort order; ignored by GitHub unless `sort` is set.
    pub order: Option<SortDirection>,
    /// Page cursor.
    pub list: ListOptions,
}

impl SearchOptions {
    /// Options requesting a single result.
    #[must_use]
    pub fn single_result() -> Self {
        Self {
            list: ListOptions::with_per_page(1),
            ..Self::default()
        }
    }

    pub(crate) fn query_pairs(&self, query: &str) -> QueryPairs {
        let mut pairs = vec![("q", query.to_owned())];
        push_optional(&mut pairs, "sort", self.sort.as_deref());
        push_optional(
            &mut pairs,
            "order",
            self.order.as_ref().map(SortDirection::as_str),
        );
        push_list(&mut pairs, &self.list);
        pairs
    }
}

impl PageCursor for SearchOptions {
    fn list_options(&self) -> &ListOptions {
        &self.list
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}
