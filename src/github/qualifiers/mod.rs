//! Search qualifiers for the issue and pull request search endpoint.
//!
//! A [`SearchQualifier`] is one fragment of a search query: a fixed
//! qualifier such as [`IS_OPEN`], a keyed qualifier rendered as `key:"value"`
//! by one of the constructor functions, or free text from [`has_text`].
//! [`SearchQualifiers`] renders a sequence of them into the `q` parameter by
//! joining with single spaces, in order, without deduplication.
//!
//! Values are wrapped in double quotes verbatim. Embedded quotes are not
//! escaped, and range or comparison operands such as `>5`, `5..10` or
//! `2006-01-02..2006-02-03` are passed through for GitHub to interpret.
//!
//! See <https://docs.github.com/en/search-github/searching-on-github/searching-issues-and-pull-requests>.
//!
//! # Example
//!
//! ```
//! use ghx::github::qualifiers::{self, SearchQualifiers};
//!
//! let query: SearchQualifiers = [
//!     qualifiers::IS_ISSUE,
//!     qualifiers::IS_OPEN,
//!     qualifiers::in_repo("octo", "repo"),
//!     qualifiers::with_label("bug"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(
//!     query.render(),
//!     r#"type:issue state:open repo:"octo/repo" label:"bug""#
//! );
//! ```

use std::borrow::Cow;
use std::fmt;

/// A single fragment of a search query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQualifier(Cow<'static, str>);

impl SearchQualifier {
    /// Wraps a literal qualifier such as `is:locked`.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Wraps an already rendered qualifier.
    #[must_use]
    pub fn raw(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    /// Builds `key:"value"` without escaping `value`.
    #[must_use]
    pub fn keyed(key: &str, value: &str) -> Self {
        Self::raw(format!("{key}:\"{value}\""))
    }

    /// Borrow the rendered qualifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQualifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl AsRef<str> for SearchQualifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// An ordered sequence of qualifiers forming one search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQualifiers(Vec<SearchQualifier>);

impl SearchQualifiers {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a qualifier.
    pub fn push(&mut self, qualifier: SearchQualifier) {
        self.0.push(qualifier);
    }

    /// Appends a qualifier, builder style.
    #[must_use]
    pub fn with(mut self, qualifier: SearchQualifier) -> Self {
        self.push(qualifier);
        self
    }

    /// Number of qualifiers, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there are no qualifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the qualifiers in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchQualifier> {
        self.0.iter()
    }

    /// Renders the query string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchQualifiers {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, qualifier) in self.0.iter().enumerate() {
            if index != 0 {
                formatter.write_str(" ")?;
            }
            formatter.write_str(qualifier.as_str())?;
        }
        Ok(())
    }
}

impl From<Vec<SearchQualifier>> for SearchQualifiers {
    fn from(qualifiers: Vec<SearchQualifier>) -> Self {
        Self(qualifiers)
    }
}

impl From<SearchQualifiers> for String {
    fn from(qualifiers: SearchQualifiers) -> Self {
        qualifiers.render()
    }
}

impl FromIterator<SearchQualifier> for SearchQualifiers {
    fn from_iter<I: IntoIterator<Item = SearchQualifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<SearchQualifier> for SearchQualifiers {
    fn extend<I: IntoIterator<Item = SearchQualifier>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for SearchQualifiers {
    type Item = SearchQualifier;
    type IntoIter = std::vec::IntoIter<SearchQualifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchQualifiers {
    type Item = &'a SearchQualifier;
    type IntoIter = std::slice::Iter<'a, SearchQualifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Only issues.
pub const IS_ISSUE: SearchQualifier = SearchQualifier::from_static("type:issue");
/// Only pull requests.
pub const IS_PR: SearchQualifier = SearchQualifier::from_static("type:pr");

/// Match free text against titles only.
pub const IN_TITLE: SearchQualifier = SearchQualifier::from_static("in:title");
/// Match free text against bodies only.
pub const IN_BODY: SearchQualifier = SearchQualifier::from_static("in:body");
/// Match free text against comments only.
pub const IN_COMMENTS: SearchQualifier = SearchQualifier::from_static("in:comments");

/// Open issues and pull requests.
pub const IS_OPEN: SearchQualifier = SearchQualifier::from_static("state:open");
/// Closed issues and pull requests.
pub const IS_CLOSED: SearchQualifier = SearchQualifier::from_static("state:closed");

/// Issues closed as completed.
pub const IS_CLOSED_AS_COMPLETED: SearchQualifier =
    SearchQualifier::from_static("reason:completed");
/// Issues closed as not planned.
pub const IS_CLOSED_AS_NOT_PLANNED: SearchQualifier =
    SearchQualifier::from_static("reason:\"not planned\"");

/// Pull requests queued to merge.
pub const IS_QUEUED: SearchQualifier = SearchQualifier::from_static("is:queued");
/// Items in public repositories.
pub const IS_PUBLIC: SearchQualifier = SearchQualifier::from_static("is:public");
/// Items in private repositories.
pub const IS_PRIVATE: SearchQualifier = SearchQualifier::from_static("is:private");
/// Merged pull requests.
pub const IS_MERGED: SearchQualifier = SearchQualifier::from_static("is:merged");
/// Pull requests closed without merging or still open.
pub const IS_UNMERGED: SearchQualifier = SearchQualifier::from_static("is:unmerged");
/// Conversations that are locked.
pub const IS_LOCKED: SearchQualifier = SearchQualifier::from_static("is:locked");
/// Conversations that are not locked.
pub const IS_UNLOCKED: SearchQualifier = SearchQualifier::from_static("is:unlocked");

/// Issues linked to a pull request that closes them.
pub const HAS_LINKED_PR: SearchQualifier = SearchQualifier::from_static("linked:pr");
/// Pull requests linked to an issue they may close.
pub const HAS_LINKED_ISSUE: SearchQualifier = SearchQualifier::from_static("linked:issue");
/// Issues not linked to a closing pull request.
pub const HAS_NO_LINKED_PR: SearchQualifier = SearchQualifier::from_static("-linked:pr");
/// Pull requests not linked to an issue.
pub const HAS_NO_LINKED_ISSUE: SearchQualifier = SearchQualifier::from_static("-linked:issue");

/// Pull requests whose commit status is pending.
pub const HAS_STATUS_PENDING: SearchQualifier = SearchQualifier::from_static("status:pending");
/// Pull requests whose commit status is success.
pub const HAS_STATUS_SUCCESS: SearchQualifier = SearchQualifier::from_static("status:success");
/// Pull requests whose commit status is failure.
pub const HAS_STATUS_FAILING: SearchQualifier = SearchQualifier::from_static("status:failure");

/// Draft pull requests.
pub const IS_DRAFT: SearchQualifier = SearchQualifier::from_static("draft:true");
/// Pull requests ready for review.
pub const IS_NOT_DRAFT: SearchQualifier = SearchQualifier::from_static("draft:false");

/// Pull requests without reviews.
pub const HAS_NO_REVIEWS: SearchQualifier = SearchQualifier::from_static("review:none");
/// Pull requests that require a review before merging.
pub const REQUIRES_REVIEW: SearchQualifier = SearchQualifier::from_static("review:required");
/// Pull requests a reviewer approved.
pub const IS_APPROVED: SearchQualifier = SearchQualifier::from_static("review:approved");
/// Pull requests with requested changes.
pub const HAS_CHANGES_REQUESTED: SearchQualifier =
    SearchQualifier::from_static("review:changes_requested");

/// Items in archived repositories.
pub const IS_ARCHIVED: SearchQualifier = SearchQualifier::from_static("archived:true");
/// Items in repositories that are not archived.
pub const IS_NOT_ARCHIVED: SearchQualifier = SearchQualifier::from_static("archived:false");

/// Items without labels.
pub const HAS_NO_LABELS: SearchQualifier = SearchQualifier::from_static("no:label");
/// Items without a milestone.
pub const HAS_NO_MILESTONE: SearchQualifier = SearchQualifier::from_static("no:milestone");
/// Items without an assignee.
pub const HAS_NO_ASSIGNEE: SearchQualifier = SearchQualifier::from_static("no:assignee");
/// Items not in any project.
pub const HAS_NO_PROJECT: SearchQualifier = SearchQualifier::from_static("no:project");

/// Items authored by the authenticated user.
pub const IS_AUTHORED_BY_SELF: SearchQualifier = SearchQualifier::from_static("author:@me");

/// Pull requests reviewed by `user`.
#[must_use]
pub fn reviewed_by(user: &str) -> SearchQualifier {
    SearchQualifier::keyed("reviewed-by", user)
}

/// Pull requests with a review requested from `user` or a team they are on.
#[must_use]
pub fn review_requested_from_user(user: &str) -> SearchQualifier {
    SearchQualifier::keyed("review-requested", user)
}

/// Pull requests with a review requested from `user` personally.
#[must_use]
pub fn review_requested_directly_from_user(user: &str) -> SearchQualifier {
    SearchQualifier::keyed("user-review-requested", user)
}

/// Pull requests with a review requested from `team` (`org/team`).
#[must_use]
pub fn review_requested_from_team(team: &str) -> SearchQualifier {
    SearchQualifier::keyed("team-review-requested", team)
}

/// Items in repositories owned by `user`.
#[must_use]
pub fn in_repos_owned_by_user(user: &str) -> SearchQualifier {
    SearchQualifier::keyed("user", user)
}

/// Items in repositories owned by `org`.
#[must_use]
pub fn in_repos_owned_by_org(org: &str) -> SearchQualifier {
    SearchQualifier::keyed("org", org)
}

/// Items in `owner/repo`.
#[must_use]
pub fn in_repo(owner: &str, repo: &str) -> SearchQualifier {
    SearchQualifier::keyed("repo", &format!("{owner}/{repo}"))
}

/// Items created by `user`.
#[must_use]
pub fn authored_by(user: &str) -> SearchQualifier {
    SearchQualifier::keyed("author", user)
}

/// Items not created by `user`.
#[must_use]
pub fn not_authored_by(user: &str) -> SearchQualifier {
    SearchQualifier::keyed("-author", user)
}

/// Items assigned to `assignee`.
#[must_use]
pub fn assigned_to(assignee: &str) -> SearchQualifier {
    SearchQualifier::keyed("assignee", assignee)
}

/// Items that mention `user`.
#[must_use]
pub fn mentions_user(user: &str) -> SearchQualifier {
    SearchQualifier::keyed("mentions", user)
}

/// Items that mention `team`.
#[must_use]
pub fn mentions_team(team: &str) -> SearchQualifier {
    SearchQualifier::keyed("team", team)
}

/// Items with a comment from `user`.
#[must_use]
pub fn commented_by(user: &str) -> SearchQualifier {
    SearchQualifier::keyed("commenter", user)
}

/// Items `user` authored, was assigned, was mentioned in or commented on.
#[must_use]
pub fn involves(user: &str) -> SearchQualifier {
    SearchQualifier::keyed("involves", user)
}

/// Items labelled `label`.
#[must_use]
pub fn with_label(label: &str) -> SearchQualifier {
    SearchQualifier::keyed("label", label)
}

/// Items labelled with any of `labels`.
#[must_use]
pub fn with_labels(labels: &[&str]) -> SearchQualifier {
    with_label(&labels.join(","))
}

/// Items not labelled `label`.
#[must_use]
pub fn without_label(label: &str) -> SearchQualifier {
    SearchQualifier::keyed("-label", label)
}

/// Items labelled with none of `labels`.
#[must_use]
pub fn without_labels(labels: &[&str]) -> SearchQualifier {
    without_label(&labels.join(","))
}

/// Items in `milestone`.
#[must_use]
pub fn in_milestone(milestone: &str) -> SearchQualifier {
    SearchQualifier::keyed("milestone", milestone)
}

/// Items in project board `project`.
#[must_use]
pub fn in_project(project: &str) -> SearchQualifier {
    SearchQualifier::keyed("project", project)
}

/// Pull requests merging from `branch`.
#[must_use]
pub fn with_head_branch(branch: &str) -> SearchQualifier {
    SearchQualifier::keyed("head", branch)
}

/// Pull requests merging into `branch`.
#[must_use]
pub fn with_base_branch(branch: &str) -> SearchQualifier {
    SearchQualifier::keyed("base", branch)
}

/// Items in repositories written in `language`.
#[must_use]
pub fn written_in(language: &str) -> SearchQualifier {
    SearchQualifier::keyed("language", language)
}

/// Items whose comment count matches `quantity`, e.g. `0`, `>100`, `500..1000`.
#[must_use]
pub fn with_comments(quantity: &str) -> SearchQualifier {
    SearchQualifier::keyed("comments", quantity)
}

/// Items whose reaction plus comment count matches `quantity`.
#[must_use]
pub fn with_interactions(quantity: &str) -> SearchQualifier {
    SearchQualifier::keyed("interactions", quantity)
}

/// Items whose reaction count matches `quantity`.
#[must_use]
pub fn with_reactions(quantity: &str) -> SearchQualifier {
    SearchQualifier::keyed("reactions", quantity)
}

/// Items created on `date`, e.g. `YYYY-MM-DD`, `>=YYYY-MM-DD`, `*..YYYY-MM-DD`.
#[must_use]
pub fn created(date: &str) -> SearchQualifier {
    SearchQualifier::keyed("created", date)
}

/// Items updated on `date`.
#[must_use]
pub fn updated(date: &str) -> SearchQualifier {
    SearchQualifier::keyed("updated", date)
}

/// Items closed on `date`.
#[must_use]
pub fn closed(date: &str) -> SearchQualifier {
    SearchQualifier::keyed("closed", date)
}

/// Pull requests merged on `date`.
#[must_use]
pub fn merged(date: &str) -> SearchQualifier {
    SearchQualifier::keyed("merged", date)
}

/// Free text, quoted as a single phrase.
#[must_use]
pub fn has_text(text: &str) -> SearchQualifier {
    SearchQualifier::raw(format!("\"{text}\""))
}

#[cfg(test)]
mod tests;
