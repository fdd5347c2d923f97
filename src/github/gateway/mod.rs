//! Gateways for fetching single pages of issues and pull requests.
//!
//! Each trait covers one listing endpoint and returns exactly one page, so
//! services can drive them through [`map_pages`] and tests can substitute
//! mocks. [`OctocrabGateway`] implements all of them over HTTP.
//!
//! [`map_pages`]: crate::github::pagination::map_pages

mod error_mapping;
mod octocrab_gateway;

pub use octocrab_gateway::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::ClientError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{Issue, PullRequestSummary};
use crate::github::options::{IssueListOptions, PullRequestListOptions, SearchOptions};
use crate::github::pagination::FetchedPage;

/// Gateway that lists the issues of a repository one page at a time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoIssueLister: Send + Sync {
    /// Fetch the page of issues selected by `options`.
    async fn list_issues_by_repo(
        &self,
        locator: &RepositoryLocator,
        options: &IssueListOptions,
    ) -> Result<FetchedPage<Issue>, ClientError>;
}

/// Gateway that lists the pull requests of a repository one page at a time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoPullRequestLister: Send + Sync {
    /// Fetch the page of pull requests selected by `options`.
    async fn list_pull_requests_by_repo(
        &self,
        locator: &RepositoryLocator,
        options: &PullRequestListOptions,
    ) -> Result<FetchedPage<PullRequestSummary>, ClientError>;
}

/// Gateway for the issue and pull request search endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueSearcher: Send + Sync {
    /// Fetch the page of search results for `query` selected by `options`.
    async fn search_issues(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<FetchedPage<Issue>, ClientError>;
}
