//! Issue payloads as served by the GitHub REST API.

use serde_json::{Value, json};

/// JSON bodies for `count` issues numbered from `first`.
pub fn issue_bodies(first: u64, count: u64) -> Value {
    Value::Array(
        (first..first + count)
            .map(|number| {
                json!({
                    "number": number,
                    "title": format!("Issue {number}"),
                    "state": "open",
                    "user": { "login": "octocat" }
                })
            })
            .collect(),
    )
}
