//! Repository identity wrappers and token validation.

use std::fmt;
use std::str::FromStr;

use super::error::ClientError;

/// Public GitHub REST API base.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ClientError> {
        if value.is_empty() {
            return Err(ClientError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ClientError> {
        let trimmed = value.strip_suffix(".git").unwrap_or(value);
        if trimmed.is_empty() {
            return Err(ClientError::MissingPathSegments);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ClientError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ClientError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// A repository addressed by owner and name.
///
/// The locator carries no host. Requests go to whichever API base the
/// gateway was built for.
///
/// # Example
///
/// ```
/// use ghx::RepositoryLocator;
///
/// let locator: RepositoryLocator = "octo/repo.git".parse().expect("should parse owner/repo");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// assert_eq!(locator.full_name(), "octo/repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a repository locator from owner and name.
    ///
    /// A trailing `.git` on the name is dropped.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingPathSegments` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, ClientError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repo)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// `owner/repo`, as used by the `repo:` search qualifier.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.repository.as_str())
    }

    pub(crate) fn issues_path(&self) -> String {
        format!("/repos/{}/issues", self.full_name())
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!("/repos/{}/pulls", self.full_name())
    }
}

impl FromStr for RepositoryLocator {
    type Err = ClientError;

    /// Parses `owner/repo`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (owner, repo) = input
            .split_once('/')
            .ok_or(ClientError::MissingPathSegments)?;
        if repo.contains('/') {
            return Err(ClientError::MissingPathSegments);
        }
        Self::from_owner_repo(owner, repo)
    }
}
