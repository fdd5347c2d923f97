//! Support modules for the issue pagination BDD tests.

pub(crate) mod domain;
pub(crate) mod harness;
#[path = "../support/issues.rs"]
pub(crate) mod issues;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use domain::{IssueNumber, PageNumber, PageSize};
pub(crate) use harness::{failing_page_mock, handler_rejection, issue_page_mock, issue_range};
pub(crate) use state::{PaginationState, run_issue_mapping};
