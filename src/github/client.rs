//! Root client composing the per-domain services over one gateway.

use crate::config::GhxConfig;

use super::error::ClientError;
use super::gateway::{IssueSearcher, OctocrabGateway, RepoIssueLister, RepoPullRequestLister};
use super::locator::PersonalAccessToken;
use super::services::{IssuesService, PullRequestsService, SearchService};

/// Typed entry point to the issue, pull request, and search services.
///
/// Every service holds its own clone of the gateway; with the default
/// [`OctocrabGateway`] the clones share one HTTP client.
///
/// # Example
///
/// ```no_run
/// use ghx::{Client, ClientError, PersonalAccessToken, RepositoryLocator};
/// use ghx::github::options::IssueListOptions;
///
/// # async fn run() -> Result<(), ClientError> {
/// let token = PersonalAccessToken::new("ghp_example")?;
/// let client = Client::for_token(&token, "https://api.github.com")?;
/// let locator = RepositoryLocator::from_owner_repo("octo", "repo")?;
///
/// let mut titles = Vec::new();
/// let mut options = IssueListOptions::default();
/// client
///     .issues
///     .map_issues_of_repo(&locator, &mut options, |issue| {
///         titles.push(issue.title.unwrap_or_default());
///         Ok::<(), ClientError>(())
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<G = OctocrabGateway> {
    /// Repository issue listing.
    pub issues: IssuesService<G>,
    /// Repository pull request listing.
    pub pulls: PullRequestsService<G>,
    /// Issue and pull request search.
    pub search: SearchService<G>,
}

impl Client {
    /// Builds a client authenticated with `token` against `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` when `api_base` cannot be parsed or
    /// `ClientError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &str) -> Result<Self, ClientError> {
        let gateway = OctocrabGateway::for_token(token, api_base)?;
        tracing::debug!(api_base, "built GitHub client");
        Ok(Self::with_gateway(gateway))
    }

    /// Builds a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingToken` when no token is configured, or
    /// the errors of [`Client::for_token`].
    pub fn from_config(config: &GhxConfig) -> Result<Self, ClientError> {
        let token = config.resolve_token()?;
        Self::for_token(&token, config.api_base())
    }
}

impl<G> Client<G>
where
    G: RepoIssueLister + RepoPullRequestLister + IssueSearcher + Clone,
{
    /// Wires every service to a clone of `gateway`.
    #[must_use]
    pub fn with_gateway(gateway: G) -> Self {
        Self {
            issues: IssuesService::new(gateway.clone()),
            pulls: PullRequestsService::new(gateway.clone()),
            search: SearchService::new(gateway),
        }
    }
}
