//! Repository issue listing.

use async_trait::async_trait;

use crate::github::error::ClientError;
use crate::github::gateway::RepoIssueLister;
use crate::github::locator::RepositoryLocator;
use crate::github::models::Issue;
use crate::github::options::IssueListOptions;
use crate::github::pagination::{FetchedPage, PageSource, map_pages};

/// Lists and walks the issues of a repository.
#[derive(Debug, Clone)]
pub struct IssuesService<L> {
    lister: L,
}

impl<L: RepoIssueLister> IssuesService<L> {
    /// Creates a service over `lister`.
    #[must_use]
    pub const fn new(lister: L) -> Self {
        Self { lister }
    }

    /// Fetches the single page of issues selected by `options`.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error unchanged.
    pub async fn list_by_repo(
        &self,
        locator: &RepositoryLocator,
        options: &IssueListOptions,
    ) -> Result<FetchedPage<Issue>, ClientError> {
        self.lister.list_issues_by_repo(locator, options).await
    }

    /// Passes every issue of the repository to `handle`, page by page.
    ///
    /// Starts at the page in `options` and leaves `options` on the last page
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or handler error; see
    /// [`map_pages`](crate::github::pagination::map_pages).
    pub async fn map_issues_of_repo<H, E>(
        &self,
        locator: &RepositoryLocator,
        options: &mut IssueListOptions,
        handle: H,
    ) -> Result<(), E>
    where
        H: FnMut(Issue) -> Result<(), E>,
        E: From<ClientError>,
    {
        let source = RepoIssuePages {
            lister: &self.lister,
            locator,
        };
        map_pages(&source, options, handle).await
    }
}

struct RepoIssuePages<'a, L> {
    lister: &'a L,
    locator: &'a RepositoryLocator,
}

#[async_trait]
impl<'a, L: RepoIssueLister> PageSource for RepoIssuePages<'a, L> {
    type Item = Issue;
    type Options = IssueListOptions;
    type Error = ClientError;

    async fn fetch_page(
        &self,
        options: &IssueListOptions,
    ) -> Result<FetchedPage<Issue>, ClientError> {
        self.lister.list_issues_by_repo(self.locator, options).await
    }
}
