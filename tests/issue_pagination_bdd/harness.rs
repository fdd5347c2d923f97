//! Mock page builders for the issue pagination BDD tests.

use ghx::ClientError;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use super::domain::{IssueNumber, PageNumber};
use super::issues::issue_bodies;

pub(crate) const ISSUES_PATH: &str = "/api/v3/repos/owner/repo/issues";

/// Issues `first..=last`, or none when `last` precedes `first`.
pub(crate) fn issue_range(first: IssueNumber, last: IssueNumber) -> serde_json::Value {
    let count = (last.value() + 1).saturating_sub(first.value());
    issue_bodies(first.value(), count)
}

/// A `GET` on the issues endpoint for `page` answering with `bodies`, linking
/// to `next` when given.
pub(crate) fn issue_page_mock(
    server_uri: &str,
    page: PageNumber,
    bodies: serde_json::Value,
    next: Option<PageNumber>,
) -> Mock {
    let mut response = ResponseTemplate::new(200).set_body_json(bodies);
    if let Some(next_page) = next {
        response = response.insert_header(
            "Link",
            format!("<{server_uri}{ISSUES_PATH}?state=open&page={next_page}>; rel=\"next\""),
        );
    }

    Mock::given(method("GET"))
        .and(path(ISSUES_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(response)
}

/// A `GET` on the issues endpoint for `page` answering with a 500.
pub(crate) fn failing_page_mock(page: PageNumber) -> Mock {
    Mock::given(method("GET"))
        .and(path(ISSUES_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "Server Error" })))
}

/// The error the scenario handler returns for a rejected issue.
pub(crate) fn handler_rejection(number: IssueNumber) -> ClientError {
    ClientError::Api {
        message: format!("handler rejected issue {number}"),
    }
}
