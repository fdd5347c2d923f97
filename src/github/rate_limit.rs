//! Quota snapshot attached to rate-limit errors.
//!
//! [`ClientError::RateLimitExceeded`] carries a `RateLimitInfo` when the
//! gateway manages to query `/rate_limit` after a rejected request.
//!
//! [`ClientError::RateLimitExceeded`]: super::error::ClientError::RateLimitExceeded

use std::fmt;

/// Request quota reported by the `/rate_limit` endpoint.
///
/// Its `Display` form is the suffix appended to rate-limit error messages.
///
/// # Example
///
/// ```
/// use ghx::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 0, 1700000000);
/// assert_eq!(info.to_string(), "0 of 5000 requests left, resets at 1700000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Captures a quota of `limit` requests with `remaining` left until the
    /// Unix timestamp `reset_at`.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Unix timestamp at which the quota resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }
}

impl fmt::Display for RateLimitInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{remaining} of {limit} requests left, resets at {reset_at}",
            remaining = self.remaining,
            limit = self.limit,
            reset_at = self.reset_at
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::RateLimitInfo;

    #[rstest]
    #[case::exhausted(RateLimitInfo::new(5000, 0, 1_700_000_000), "0 of 5000 requests left, resets at 1700000000")]
    #[case::search_quota(RateLimitInfo::new(30, 12, 42), "12 of 30 requests left, resets at 42")]
    fn display_reports_quota_and_reset(#[case] info: RateLimitInfo, #[case] expected: &str) {
        assert_eq!(info.to_string(), expected);
    }
}
