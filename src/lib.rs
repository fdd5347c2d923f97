//! Typed wrapper over the GitHub REST API.
//!
//! The crate wraps Octocrab with per-domain services for issues, pull
//! requests, and search. Paginated endpoints are consumed with
//! [`map_pages`], which fetches one page at a time and hands each item to a
//! caller-supplied handler until the server reports no further page or an
//! error occurs. Search queries are composed from typed
//! [`SearchQualifiers`].

pub mod config;
pub mod github;

pub use config::GhxConfig;
pub use github::{
    Client, ClientError, Issue, OctocrabGateway, PersonalAccessToken, PullRequestSummary,
    RepositoryLocator, SearchQualifier, SearchQualifiers, map_pages,
};
