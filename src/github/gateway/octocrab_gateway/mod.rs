//! Octocrab-backed implementation of the listing and search gateways.

use std::fmt;

use async_trait::async_trait;
use http::Uri;
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;

use crate::github::error::ClientError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{ApiIssue, ApiPullRequestSummary, Issue, PullRequestSummary};
use crate::github::options::{
    IssueListOptions, PullRequestListOptions, QueryPairs, SearchOptions,
};
use crate::github::pagination::{FetchedPage, ListOptions, PageInfo};
use crate::github::rate_limit::RateLimitInfo;

use super::error_mapping::{is_rate_limit_error, map_octocrab_error, validate_pagination_params};
use super::{IssueSearcher, RepoIssueLister, RepoPullRequestLister};

const SEARCH_ISSUES_PATH: &str = "/search/issues";

/// Gateway issuing REST calls through an authenticated Octocrab client.
///
/// Cloning is cheap; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct OctocrabGateway {
    client: Octocrab,
}

impl fmt::Debug for OctocrabGateway {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("OctocrabGateway").finish_non_exhaustive()
    }
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Creates a gateway authenticated with `token` that sends every request
    /// below `api_base`, e.g. `https://api.github.com` or a GitHub Enterprise
    /// `https://<host>/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` when `api_base` is not a valid URI
    /// and `ClientError::Api` when Octocrab rejects the configuration.
    pub fn for_token(token: &PersonalAccessToken, api_base: &str) -> Result<Self, ClientError> {
        let base_uri = api_base
            .parse::<Uri>()
            .map_err(|error| ClientError::InvalidUrl(format!("{api_base}: {error}")))?;

        let client = Octocrab::builder()
            .personal_token(token.value())
            .base_uri(base_uri)
            .map_err(|error| ClientError::Api {
                message: format!("configure client failed: {error}"),
            })?
            .build()
            .map_err(|error| map_octocrab_error("configure client", &error))?;

        Ok(Self::new(client))
    }

    async fn fetch_page<A, T>(
        &self,
        operation: &str,
        path: &str,
        list: ListOptions,
        query: &QueryPairs,
    ) -> Result<FetchedPage<T>, ClientError>
    where
        A: DeserializeOwned,
        T: From<A>,
    {
        validate_pagination_params(list.page, list.per_page)?;
        tracing::debug!(
            operation,
            path,
            page = list.page,
            per_page = list.per_page,
            "requesting page"
        );

        let page: Page<A> = match self.client.get(path, Some(query)).await {
            Ok(page) => page,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit(operation, &error)
                    .await);
            }
        };

        let page_info = PageInfo::from_links(
            list.page,
            list.per_page,
            page.next.as_ref(),
            page.last.as_ref(),
        );
        tracing::debug!(
            operation,
            items = page.items.len(),
            next_page = page_info.next_page(),
            "received page"
        );

        Ok(FetchedPage {
            items: page.items.into_iter().map(T::from).collect(),
            page_info,
            total_count: page.total_count,
        })
    }

    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> ClientError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!("{base_message} ({info})"),
                    None => base_message,
                };
                tracing::warn!(operation, %message, "GitHub rate limit exceeded");

                ClientError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

#[async_trait]
impl RepoIssueLister for OctocrabGateway {
    async fn list_issues_by_repo(
        &self,
        locator: &RepositoryLocator,
        options: &IssueListOptions,
    ) -> Result<FetchedPage<Issue>, ClientError> {
        self.fetch_page::<ApiIssue, Issue>(
            "list issues",
            &locator.issues_path(),
            options.list,
            &options.query_pairs(),
        )
        .await
    }
}

#[async_trait]
impl RepoPullRequestLister for OctocrabGateway {
    async fn list_pull_requests_by_repo(
        &self,
        locator: &RepositoryLocator,
        options: &PullRequestListOptions,
    ) -> Result<FetchedPage<PullRequestSummary>, ClientError> {
        self.fetch_page::<ApiPullRequestSummary, PullRequestSummary>(
            "list pulls",
            &locator.pulls_path(),
            options.list,
            &options.query_pairs(),
        )
        .await
    }
}

#[async_trait]
impl IssueSearcher for OctocrabGateway {
    async fn search_issues(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<FetchedPage<Issue>, ClientError> {
        self.fetch_page::<ApiIssue, Issue>(
            "search issues",
            SEARCH_ISSUES_PATH,
            options.list,
            &options.query_pairs(query),
        )
        .await
    }
}
