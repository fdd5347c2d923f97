//! Scripted page sources and gateway doubles for exercising pagination.
//!
//! Each double replays a fixed list of page responses in order and panics
//! when asked for more pages than were scripted, so an over-eager caller
//! fails the test instead of looping.
//!
//! # Examples
//!
//! ```
//! use ghx::github::test_support::scripted_issue_pages;
//!
//! let pages = scripted_issue_pages(None, &[2, 1]);
//! assert_eq!(pages.len(), 2);
//! let first = pages[0].as_ref().expect("first page should succeed");
//! assert_eq!(first.page_info.next_page(), Some(2));
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::error::ClientError;
use super::gateway::{IssueSearcher, RepoIssueLister};
use super::locator::RepositoryLocator;
use super::models::Issue;
use super::models::test_support::empty_issues;
use super::options::{IssueListOptions, SearchOptions};
use super::pagination::{DEFAULT_PER_PAGE, FetchedPage, ListOptions, PageInfo, PageSource};

/// Response returned for one scripted call.
pub type ScriptedResponse<T> = Result<FetchedPage<T>, ClientError>;

/// Builds scripted issue pages with `page_sizes[i]` issues on page `i + 1`.
///
/// Every page but the last points at the following page. The last page has
/// no successor and, when `last_page_error` is set, fails with that error
/// instead of returning items. With no sizes and an error, a single failing
/// page is produced.
#[must_use]
pub fn scripted_issue_pages(
    last_page_error: Option<ClientError>,
    page_sizes: &[usize],
) -> Vec<ScriptedResponse<Issue>> {
    let sizes: &[usize] = if page_sizes.is_empty() && last_page_error.is_some() {
        &[0]
    } else {
        page_sizes
    };
    let last_index = sizes.len().saturating_sub(1);

    let mut pages: Vec<ScriptedResponse<Issue>> = sizes
        .iter()
        .enumerate()
        .map(|(index, size)| {
            let current = page_number(index + 1);
            let next = if index == last_index {
                0
            } else {
                page_number(index + 2)
            };
            let info = PageInfo::new(current, DEFAULT_PER_PAGE).with_next_page(next);
            Ok(FetchedPage::new(empty_issues(*size), info))
        })
        .collect();

    if let Some(error) = last_page_error
        && let Some(last) = pages.last_mut()
    {
        *last = Err(error);
    }
    pages
}

fn page_number(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}

#[derive(Debug)]
struct Script<T> {
    responses: Mutex<VecDeque<ScriptedResponse<T>>>,
    requested: Mutex<Vec<u32>>,
}

impl<T> Script<T> {
    fn new(responses: impl IntoIterator<Item = ScriptedResponse<T>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn next(&self, page: u32) -> ScriptedResponse<T> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(page);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| panic!("page {page} requested after the script was exhausted"))
    }

    fn requested(&self) -> Vec<u32> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn remaining(&self) -> usize {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// A [`PageSource`] that replays scripted responses.
#[derive(Debug)]
pub struct ScriptedPages<T> {
    script: Script<T>,
}

impl<T> ScriptedPages<T> {
    /// Creates a source answering successive fetches with `responses`.
    #[must_use]
    pub fn new(responses: impl IntoIterator<Item = ScriptedResponse<T>>) -> Self {
        Self {
            script: Script::new(responses),
        }
    }

    /// Page numbers requested so far, in call order.
    #[must_use]
    pub fn requested_pages(&self) -> Vec<u32> {
        self.script.requested()
    }

    /// Number of scripted responses not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.remaining()
    }
}

#[async_trait]
impl<T: Send> PageSource for ScriptedPages<T> {
    type Item = T;
    type Options = ListOptions;
    type Error = ClientError;

    async fn fetch_page(&self, options: &ListOptions) -> ScriptedResponse<T> {
        self.script.next(options.page)
    }
}

/// Repository issue lister replaying scripted pages.
#[derive(Debug)]
pub struct ScriptedIssueLister {
    script: Script<Issue>,
}

impl ScriptedIssueLister {
    /// Creates a lister answering successive calls with `responses`.
    #[must_use]
    pub fn new(responses: impl IntoIterator<Item = ScriptedResponse<Issue>>) -> Self {
        Self {
            script: Script::new(responses),
        }
    }

    /// Page numbers requested so far, in call order.
    #[must_use]
    pub fn requested_pages(&self) -> Vec<u32> {
        self.script.requested()
    }
}

#[async_trait]
impl RepoIssueLister for ScriptedIssueLister {
    async fn list_issues_by_repo(
        &self,
        _locator: &RepositoryLocator,
        options: &IssueListOptions,
    ) -> ScriptedResponse<Issue> {
        self.script.next(options.list.page)
    }
}

/// Issue searcher replaying scripted pages and recording queries.
#[derive(Debug)]
pub struct ScriptedIssueSearcher {
    script: Script<Issue>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedIssueSearcher {
    /// Creates a searcher answering successive calls with `responses`.
    #[must_use]
    pub fn new(responses: impl IntoIterator<Item = ScriptedResponse<Issue>>) -> Self {
        Self {
            script: Script::new(responses),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Page numbers requested so far, in call order.
    #[must_use]
    pub fn requested_pages(&self) -> Vec<u32> {
        self.script.requested()
    }

    /// Queries received so far, in call order.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl IssueSearcher for ScriptedIssueSearcher {
    async fn search_issues(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> ScriptedResponse<Issue> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.to_owned());
        self.script.next(options.list.page)
    }
}
