//! Scenario state for the issue pagination BDD tests.

use ghx::github::options::IssueListOptions;
use ghx::github::pagination::ListOptions;
use ghx::{Client, ClientError, PersonalAccessToken, RepositoryLocator};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::{Mock, MockServer};

use super::domain::{IssueNumber, PageSize};
use super::harness::handler_rejection;
use super::runtime::{SharedRuntime, ensure_runtime_and_server};

#[derive(ScenarioState, Default)]
pub(crate) struct PaginationState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) rejected_issue: Slot<IssueNumber>,
    pub(crate) handled: Slot<Vec<u64>>,
    pub(crate) final_page: Slot<u32>,
    pub(crate) outcome: Slot<Result<(), ClientError>>,
}

impl PaginationState {
    /// Starts the runtime and mock server if a previous step has not.
    pub(crate) fn runtime(&self) -> SharedRuntime {
        ensure_runtime_and_server(&self.runtime, &self.server)
            .unwrap_or_else(|error| panic!("failed to start mock GitHub API: {error}"))
    }

    pub(crate) fn server_uri(&self) -> String {
        self.server
            .with_ref(MockServer::uri)
            .unwrap_or_else(|| panic!("mock server not initialised"))
    }

    pub(crate) fn mount(&self, mock: Mock) {
        let runtime = self.runtime();
        self.server
            .with_ref(|server| runtime.block_on(mock.mount(server)))
            .unwrap_or_else(|| panic!("mock server not initialised"));
    }

    /// Query `page` values of every request the mock server received.
    pub(crate) fn requested_pages(&self) -> Vec<String> {
        let runtime = self.runtime();
        let requests = self
            .server
            .with_ref(|server| runtime.block_on(server.received_requests()))
            .flatten()
            .unwrap_or_default();

        requests
            .iter()
            .filter_map(|request| {
                request
                    .url
                    .query_pairs()
                    .find(|(key, _)| key == "page")
                    .map(|(_, value)| value.into_owned())
            })
            .collect()
    }
}

/// Maps the issues of `owner/repo` through a real client against the mock
/// server, recording handled issue numbers, the final page and the outcome.
pub(crate) fn run_issue_mapping(pagination_state: &PaginationState, per_page: PageSize) {
    let runtime = pagination_state.runtime();
    let api_base = format!("{}/api/v3", pagination_state.server_uri());
    let rejected = pagination_state.rejected_issue.get();
    let mut handled = Vec::new();
    let mut options = IssueListOptions {
        list: ListOptions::with_per_page(per_page.value()),
        ..IssueListOptions::default()
    };

    let outcome = runtime.block_on(async {
        let token = PersonalAccessToken::new("test-token")?;
        let client = Client::for_token(&token, &api_base)?;
        let locator = RepositoryLocator::from_owner_repo("owner", "repo")?;

        client
            .issues
            .map_issues_of_repo(&locator, &mut options, |issue| {
                handled.push(issue.number);
                match rejected {
                    Some(number) if number.value() == issue.number => {
                        Err(handler_rejection(number))
                    }
                    _ => Ok(()),
                }
            })
            .await
    });

    pagination_state.handled.set(handled);
    pagination_state.final_page.set(options.list.page);
    pagination_state.outcome.set(outcome);
}
