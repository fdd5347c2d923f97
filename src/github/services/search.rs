//! Issue and pull request search.

use async_trait::async_trait;

use crate::github::error::ClientError;
use crate::github::gateway::IssueSearcher;
use crate::github::models::Issue;
use crate::github::options::SearchOptions;
use crate::github::pagination::{FetchedPage, PageSource, map_pages};

/// Runs search queries, usually rendered from
/// [`SearchQualifiers`](crate::github::qualifiers::SearchQualifiers).
#[derive(Debug, Clone)]
pub struct SearchService<S> {
    searcher: S,
}

impl<S: IssueSearcher> SearchService<S> {
    /// Creates a service over `searcher`.
    #[must_use]
    pub const fn new(searcher: S) -> Self {
        Self { searcher }
    }

    /// Fetches the single page of results selected by `options`.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error unchanged.
    pub async fn issues(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<FetchedPage<Issue>, ClientError> {
        self.searcher.search_issues(query, options).await
    }

    /// Passes every search hit to `handle`, page by page.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or handler error.
    pub async fn map_issues<H, E>(
        &self,
        query: &str,
        options: &mut SearchOptions,
        handle: H,
    ) -> Result<(), E>
    where
        H: FnMut(Issue) -> Result<(), E>,
        E: From<ClientError>,
    {
        let source = SearchPages {
            searcher: &self.searcher,
            query,
        };
        map_pages(&source, options, handle).await
    }

    /// Returns the first hit for `query`, or `None` when nothing matches.
    ///
    /// Issues a single request for one result.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error unchanged.
    pub async fn first_issue(&self, query: &str) -> Result<Option<Issue>, ClientError> {
        let page = self
            .searcher
            .search_issues(query, &SearchOptions::single_result())
            .await?;
        Ok(page.items.into_iter().next())
    }
}

struct SearchPages<'a, S> {
    searcher: &'a S,
    query: &'a str,
}

#[async_trait]
impl<'a, S: IssueSearcher> PageSource for SearchPages<'a, S> {
    type Item = Issue;
    type Options = SearchOptions;
    type Error = ClientError;

    async fn fetch_page(&self, options: &SearchOptions) -> Result<FetchedPage<Issue>, ClientError> {
        self.searcher.search_issues(self.query, options).await
    }
}
