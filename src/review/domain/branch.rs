//! Feature branch naming for modules.

use super::{ModuleName, ReviewDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Git branch name derived from a module name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchName(String);

impl BranchName {
    /// Prefix used when no other prefix is configured.
    pub const DEFAULT_PREFIX: &'static str = "feature/";

    /// Derives `feature/<name>` for a module.
    #[must_use]
    pub fn for_module(name: &ModuleName) -> Self {
        Self(format!("{}{name}", Self::DEFAULT_PREFIX))
    }

    /// Derives `<prefix><name>` for a module.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDomainError::InvalidBranchPrefix`] when the prefix is
    /// empty or contains whitespace.
    pub fn with_prefix(prefix: &str, name: &ModuleName) -> Result<Self, ReviewDomainError> {
        Self::validate_prefix(prefix)?;
        Ok(Self(format!("{prefix}{name}")))
    }

    /// Checks that a prefix can be used for branch derivation.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDomainError::InvalidBranchPrefix`] when the prefix is
    /// empty or contains whitespace.
    pub fn validate_prefix(prefix: &str) -> Result<(), ReviewDomainError> {
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(ReviewDomainError::InvalidBranchPrefix(prefix.to_owned()));
        }
        Ok(())
    }

    /// Returns the branch name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
