//! Per-domain services binding gateway capabilities to the page mapper.
//!
//! Each service owns one capability and exposes a pass-through for a single
//! page alongside a `map_*` operation that walks every page through
//! [`map_pages`](crate::github::pagination::map_pages).

mod issues;
mod pull_requests;
mod search;

pub use issues::IssuesService;
pub use pull_requests::PullRequestsService;
pub use search::SearchService;
