//! Step argument types for the issue pagination BDD tests.

use std::fmt;
use std::str::FromStr;

/// One-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageNumber(u32);

impl PageNumber {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for PageNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u32>().map_err(|error| error.to_string())?;
        if value == 0 {
            return Err("PageNumber must be >= 1".to_owned());
        }

        Ok(Self(value))
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issue number as served by the mock API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IssueNumber(u64);

impl IssueNumber {
    pub(crate) const fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for IssueNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Requested items per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageSize(u8);

impl PageSize {
    pub(crate) const fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u8>().map_err(|error| error.to_string())?;
        if !(1..=100).contains(&value) {
            return Err("PageSize must be within 1..=100".to_owned());
        }

        Ok(Self(value))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
