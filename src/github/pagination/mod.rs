//! Page-by-page mapping over paginated GitHub endpoints.
//!
//! A [`PageSource`] fetches one page for a set of options. [`map_pages`]
//! drives a source to exhaustion, handing every item to a caller-supplied
//! handler and following the server's next-page signal carried in
//! [`PageInfo`].

use async_trait::async_trait;
use http::Uri;

/// Largest page size the GitHub REST API accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Page size GitHub uses when none is requested.
pub const DEFAULT_PER_PAGE: u8 = 30;

/// Pagination state reported alongside a fetched page.
///
/// `next_page` is the only value [`map_pages`] consults: `None` ends the
/// walk no matter how many items the page carried.
///
/// # Example
///
/// ```
/// use ghx::github::pagination::PageInfo;
///
/// let info = PageInfo::new(2, 50).with_next_page(3).with_last_page(Some(5));
/// assert_eq!(info.next_page(), Some(3));
/// assert!(!info.is_last_page());
///
/// let terminal = PageInfo::new(5, 50).with_next_page(0);
/// assert!(terminal.is_last_page());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Page number that was fetched (1-based).
    current_page: u32,
    per_page: u8,
    next_page: Option<u32>,
    last_page: Option<u32>,
}

impl PageInfo {
    /// Creates page info for a page with no successor.
    #[must_use]
    pub const fn new(current_page: u32, per_page: u8) -> Self {
        Self {
            current_page,
            per_page,
            next_page: None,
            last_page: None,
        }
    }

    /// Sets the next page number; 0 means there is none.
    #[must_use]
    pub const fn with_next_page(mut self, next_page: u32) -> Self {
        self.next_page = if next_page == 0 { None } else { Some(next_page) };
        self
    }

    /// Sets the last page number if the server reported one.
    #[must_use]
    pub const fn with_last_page(mut self, last_page: Option<u32>) -> Self {
        self.last_page = last_page;
        self
    }

    /// Builds page info from the `next` and `last` links of a response.
    #[must_use]
    pub fn from_links(
        current_page: u32,
        per_page: u8,
        next: Option<&Uri>,
        last: Option<&Uri>,
    ) -> Self {
        Self::new(current_page, per_page)
            .with_next_page(next.and_then(page_from_uri).unwrap_or(0))
            .with_last_page(last.and_then(page_from_uri))
    }

    /// Returns the page number that was fetched.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the page to request next, or `None` on the last page.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        self.next_page
    }

    /// Returns the number of the final page if known.
    #[must_use]
    pub const fn last_page(&self) -> Option<u32> {
        self.last_page
    }

    /// Returns true when no further pages follow.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.next_page.is_none()
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// Extracts the `page` query parameter from a pagination link.
fn page_from_uri(uri: &Uri) -> Option<u32> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

/// Page number and size shared by every listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Page to fetch (1-based).
    pub page: u32,
    /// Items per page (max 100).
    pub per_page: u8,
}

impl ListOptions {
    /// Options for the first page with the given page size.
    #[must_use]
    pub const fn with_per_page(per_page: u8) -> Self {
        Self { page: 1, per_page }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::with_per_page(DEFAULT_PER_PAGE)
    }
}

/// Options that carry a mutable page cursor.
///
/// [`map_pages`] moves the cursor forward through [`PageCursor::set_page`]
/// after each fully handled, non-terminal page.
pub trait PageCursor {
    /// Borrow the embedded list options.
    fn list_options(&self) -> &ListOptions;

    /// Mutably borrow the embedded list options.
    fn list_options_mut(&mut self) -> &mut ListOptions;

    /// Current page number.
    fn page(&self) -> u32 {
        self.list_options().page
    }

    /// Moves the cursor to `page`.
    fn set_page(&mut self, page: u32) {
        self.list_options_mut().page = page;
    }
}

impl PageCursor for ListOptions {
    fn list_options(&self) -> &ListOptions {
        self
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        self
    }
}

/// One page of items plus its pagination state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage<T> {
    /// Items on this page, in server order.
    pub items: Vec<T>,
    /// Pagination state for this page.
    pub page_info: PageInfo,
    /// Total number of matches, reported by search endpoints.
    pub total_count: Option<u64>,
}

impl<T> FetchedPage<T> {
    /// Creates a page without a total count.
    #[must_use]
    pub const fn new(items: Vec<T>, page_info: PageInfo) -> Self {
        Self {
            items,
            page_info,
            total_count: None,
        }
    }
}

/// Something that can fetch a single page for a set of options.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Item type yielded by each page.
    type Item: Send;
    /// Options type holding the page cursor.
    type Options: PageCursor + Send + Sync;
    /// Error returned when a page cannot be fetched.
    type Error: Send;

    /// Fetches the page selected by `options`.
    async fn fetch_page(
        &self,
        options: &Self::Options,
    ) -> Result<FetchedPage<Self::Item>, Self::Error>;
}

/// Walks every page of `source`, passing each item to `handle`.
///
/// Pages are fetched one at a time starting from the page selected by
/// `options`. Items are handled in page order, then in server order within a
/// page. The walk stops once a page reports no next page; an empty page with
/// a next page does not stop it. Before each further fetch the cursor in
/// `options` is moved to the page the server announced, so `options` reflects
/// the last page requested when this returns.
///
/// # Errors
///
/// Returns the first error encountered: a fetch error (no item of that page
/// is handled) or a handler error (no later item or page is touched). Fetch
/// errors are converted with `From`, which leaves them unchanged when `E` is
/// the source's own error type.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use ghx::github::pagination::{FetchedPage, ListOptions, PageInfo, PageSource, map_pages};
///
/// struct Numbers;
///
/// #[async_trait]
/// impl PageSource for Numbers {
///     type Item = u32;
///     type Options = ListOptions;
///     type Error = String;
///
///     async fn fetch_page(&self, options: &ListOptions) -> Result<FetchedPage<u32>, String> {
///         let next = if options.page < 3 { options.page + 1 } else { 0 };
///         let info = PageInfo::new(options.page, options.per_page).with_next_page(next);
///         Ok(FetchedPage::new(vec![options.page * 10], info))
///     }
/// }
///
/// # tokio_test_block_on(async {
/// let mut seen = Vec::new();
/// let mut options = ListOptions::default();
/// map_pages(&Numbers, &mut options, |item| {
///     seen.push(item);
///     Ok::<(), String>(())
/// })
/// .await
/// .expect("walk should succeed");
/// assert_eq!(seen, vec![10, 20, 30]);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(future: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().expect("runtime").block_on(future)
/// # }
/// ```
pub async fn map_pages<S, H, E>(
    source: &S,
    options: &mut S::Options,
    mut handle: H,
) -> Result<(), E>
where
    S: PageSource + ?Sized,
    H: FnMut(S::Item) -> Result<(), E>,
    E: From<S::Error>,
{
    loop {
        let page = source.fetch_page(options).await?;
        for item in page.items {
            handle(item)?;
        }
        let Some(next_page) = page.page_info.next_page() else {
            return Ok(());
        };
        tracing::trace!(from = options.page(), to = next_page, "advancing page cursor");
        options.set_page(next_page);
    }
}
