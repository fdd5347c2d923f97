//! Builders for issue and pull request fixtures.
//!
//! # Examples
//!
//! ```
//! use ghx::github::models::test_support::empty_issues;
//!
//! let issues = empty_issues(3);
//! let numbers: Vec<u64> = issues.iter().map(|issue| issue.number).collect();
//! assert_eq!(numbers, vec![1, 2, 3]);
//! ```

use super::{Issue, PullRequestSummary};

/// Constructs an issue with only its number and title set.
#[must_use]
pub fn minimal_issue(number: u64, title: &str) -> Issue {
    Issue {
        number,
        title: Some(title.to_owned()),
        ..Default::default()
    }
}

/// Creates `count` issues numbered from 1 with every other field defaulted.
#[must_use]
pub fn empty_issues(count: usize) -> Vec<Issue> {
    (1..=count as u64)
        .map(|number| Issue {
            number,
            ..Default::default()
        })
        .collect()
}

/// Creates `count` pull request summaries numbered from 1.
#[must_use]
pub fn empty_pull_requests(count: usize) -> Vec<PullRequestSummary> {
    (1..=count as u64)
        .map(|number| PullRequestSummary {
            number,
            ..Default::default()
        })
        .collect()
}
