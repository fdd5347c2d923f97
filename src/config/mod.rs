//! Client configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in defaults
//! 2. **Configuration file** – `.ghx.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GHX_TOKEN`, `GHX_API_BASE`, `GHX_PER_PAGE`
//! 4. **Command-line arguments** – `--token`/`-t`, `--api-base`, `--per-page`
//!
//! When no layer supplies a token, [`GhxConfig::resolve_token`] falls back
//! to `GITHUB_TOKEN`.
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! api_base = "https://github.example.com/api/v3"
//! per_page = 100
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ClientError;
use crate::github::locator::{GITHUB_API_BASE, PersonalAccessToken};
use crate::github::pagination::{DEFAULT_PER_PAGE, ListOptions, MAX_PER_PAGE};

/// Settings needed to build a [`Client`](crate::Client).
///
/// # Example
///
/// ```no_run
/// use ghx::GhxConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = GhxConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// println!("{}", config.api_base());
/// # let _ = token;
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GHX",
    discovery(
        dotfile_name = ".ghx.toml",
        config_file_name = "ghx.toml",
        app_name = "ghx"
    )
)]
pub struct GhxConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GHX_TOKEN` or `GITHUB_TOKEN` (fallback)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// REST API base URL, for GitHub Enterprise Server installations.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Page size for listing and search requests (1 to 100).
    #[ortho_config()]
    pub per_page: Option<u8>,
}

impl GhxConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, ClientError> {
        let raw = self
            .token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(ClientError::MissingToken)?;
        PersonalAccessToken::new(raw)
    }

    /// REST API base URL, falling back to the public GitHub API.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(GITHUB_API_BASE)
    }

    /// First-page list options using the configured page size, clamped to
    /// what GitHub accepts.
    #[must_use]
    pub fn list_options(&self) -> ListOptions {
        let per_page = self
            .per_page
            .map_or(DEFAULT_PER_PAGE, |size| size.clamp(1, MAX_PER_PAGE));
        ListOptions::with_per_page(per_page)
    }
}

#[cfg(test)]
mod tests;
