//! Typed GitHub REST access over Octocrab.
//!
//! Listing and search endpoints are reached through narrow gateway traits,
//! one per capability, and walked page by page with
//! [`pagination::map_pages`]. Search queries are assembled from
//! [`qualifiers`]. Octocrab failures are mapped into [`ClientError`] so
//! callers can match on precise failures without depending on Octocrab.

pub mod client;
pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod options;
pub mod pagination;
pub mod qualifiers;
pub mod rate_limit;
pub mod services;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use client::Client;
pub use error::ClientError;
pub use gateway::{IssueSearcher, OctocrabGateway, RepoIssueLister, RepoPullRequestLister};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{Issue, PullRequestSummary};
pub use pagination::{FetchedPage, PageInfo, PageSource, map_pages};
pub use qualifiers::{SearchQualifier, SearchQualifiers};
pub use services::{IssuesService, PullRequestsService, SearchService};

#[cfg(test)]
pub use gateway::{MockIssueSearcher, MockRepoIssueLister, MockRepoPullRequestLister};
