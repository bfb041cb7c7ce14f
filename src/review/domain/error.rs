//! Error types for review domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain module values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewDomainError {
    /// The module name is empty.
    #[error("module name must not be empty")]
    EmptyModuleName,

    /// The kernel version tag is empty after trimming.
    #[error("kernel version must not be empty")]
    EmptyKernelVersion,

    /// The branch prefix is empty or contains whitespace.
    #[error("invalid branch prefix '{0}'")]
    InvalidBranchPrefix(String),
}

/// Error returned while parsing a module status label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown module status: {0}")]
pub struct ParseModuleStatusError(pub String);

/// Error returned while parsing a triage assessment label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown triage assessment '{0}', expected 'Pass' or 'Fail'")]
pub struct ParseTriageAssessmentError(pub String);

/// Error returned while parsing a solution-architect decision label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
    "unknown SA decision '{0}', expected 'SA Approved (Ready for Dev Merge)' or 'SA Revision Requested'"
)]
pub struct ParseSaDecisionError(pub String);
