//! Repository pull request listing.

use async_trait::async_trait;

use crate::github::error::ClientError;
use crate::github::gateway::RepoPullRequestLister;
use crate::github::locator::RepositoryLocator;
use crate::github::models::PullRequestSummary;
use crate::github::options::PullRequestListOptions;
use crate::github::pagination::{FetchedPage, PageSource, map_pages};

/// Lists and walks the pull requests of a repository.
#[derive(Debug, Clone)]
pub struct PullRequestsService<L> {
    lister: L,
}

impl<L: RepoPullRequestLister> PullRequestsService<L> {
    /// Creates a service over `lister`.
    #[must_use]
    pub const fn new(lister: L) -> Self {
        Self { lister }
    }

    /// Fetches the single page of pull requests selected by `options`.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error unchanged.
    pub async fn list_by_repo(
        &self,
        locator: &RepositoryLocator,
        options: &PullRequestListOptions,
    ) -> Result<FetchedPage<PullRequestSummary>, ClientError> {
        self.lister.list_pull_requests_by_repo(locator, options).await
    }

    /// Passes every pull request of the repository to `handle`, page by page.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or handler error.
    pub async fn map_pull_requests_of_repo<H, E>(
        &self,
        locator: &RepositoryLocator,
        options: &mut PullRequestListOptions,
        handle: H,
    ) -> Result<(), E>
    where
        H: FnMut(PullRequestSummary) -> Result<(), E>,
        E: From<ClientError>,
    {
        let source = RepoPullRequestPages {
            lister: &self.lister,
            locator,
        };
        map_pages(&source, options, handle).await
    }
}

struct RepoPullRequestPages<'a, L> {
    lister: &'a L,
    locator: &'a RepositoryLocator,
}

#[async_trait]
impl<'a, L: RepoPullRequestLister> PageSource for RepoPullRequestPages<'a, L> {
    type Item = PullRequestSummary;
    type Options = PullRequestListOptions;
    type Error = ClientError;

    async fn fetch_page(
        &self,
        options: &PullRequestListOptions,
    ) -> Result<FetchedPage<PullRequestSummary>, ClientError> {
        self.lister
            .list_pull_requests_by_repo(self.locator, options)
            .await
    }
}
