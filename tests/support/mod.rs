//! Shared test utilities.

mod issues;

pub use issues::issue_bodies;

use ghx::{Client, PersonalAccessToken};
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// A runtime with a mock GitHub API and a client pointed at it.
pub struct MockGitHub {
    pub server: MockServer,
    pub client: Client,
    pub runtime: Runtime,
}

impl MockGitHub {
    /// Starts a mock server and builds a client against its `/api/v3` base.
    ///
    /// # Panics
    ///
    /// Panics if the runtime, token, or client cannot be created.
    pub fn start() -> Self {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        let server = runtime.block_on(MockServer::start());
        let token = PersonalAccessToken::new("test-token")
            .unwrap_or_else(|error| panic!("token should be valid: {error}"));
        let client = {
            let _guard = runtime.enter();
            Client::for_token(&token, &Self::api_base_for(&server))
                .unwrap_or_else(|error| panic!("client should build: {error}"))
        };

        Self {
            server,
            client,
            runtime,
        }
    }

    fn api_base_for(server: &MockServer) -> String {
        format!("{}/api/v3", server.uri())
    }
}
