//! Error taxonomy for a documentation run.

use std::fmt;
use thiserror::Error;

/// Terminal faults that abort a run.
///
/// Row-level problems are [`RowFault`] values and never abort, an empty site
/// is reported through [`crate::processing::BuildOutcome::NoData`], and a
/// failure to persist the artifact degrades to a fallback location instead of
/// erroring.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Missing required dependency: {0}")]
    MissingDependency(String),

    #[error("No prefixes or VLANs found for site '{0}'")]
    NoData(String),

    #[error("Unknown site '{0}'")]
    UnknownSite(String),

    #[error("Unknown branch '{0}'")]
    UnknownBranch(String),

    #[error("Inventory error: {0}")]
    Inventory(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Which kind of record a [`RowFault`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowScope {
    Prefix,
    Vlan,
    Address,
}

impl fmt::Display for RowScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RowScope::Prefix => "prefix",
            RowScope::Vlan => "VLAN",
            RowScope::Address => "IP",
        };
        write!(f, "{s}")
    }
}

/// A single record that could not be interpreted; its row or section is
/// skipped and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFault {
    pub scope: RowScope,
    /// Display form of the record, e.g. the address.
    pub subject: String,
    pub reason: String,
}

impl RowFault {
    pub fn new(scope: RowScope, subject: impl ToString, reason: impl ToString) -> RowFault {
        RowFault {
            scope,
            subject: subject.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for RowFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error processing {} {}: {}", self.scope, self.subject, self.reason)
    }
}

impl std::error::Error for RowFault {}

/// Result of interpreting one row.
pub type RowResult<T> = Result<T, RowFault>;
