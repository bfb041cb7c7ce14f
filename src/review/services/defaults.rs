//! Defaults applied when registering modules.

use crate::review::domain::{BranchName, KernelVersion, ReviewDomainError};

/// Kernel version assumed when a registration request names none.
pub const DEFAULT_KERNEL_VERSION: &str = "v1.0.0";

/// Registration defaults shared by every `create_module` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDefaults {
    branch_prefix: String,
    kernel_version: KernelVersion,
}

impl ModuleDefaults {
    /// Creates validated registration defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDomainError`] when the branch prefix or kernel
    /// version is invalid.
    pub fn new(
        branch_prefix: impl Into<String>,
        kernel_version: impl Into<String>,
    ) -> Result<Self, ReviewDomainError> {
        let prefix = branch_prefix.into();
        BranchName::validate_prefix(&prefix)?;
        Ok(Self {
            branch_prefix: prefix,
            kernel_version: KernelVersion::new(kernel_version)?,
        })
    }

    /// Returns the branch prefix.
    #[must_use]
    pub fn branch_prefix(&self) -> &str {
        &self.branch_prefix
    }

    /// Returns the fallback kernel version.
    #[must_use]
    pub const fn kernel_version(&self) -> &KernelVersion {
        &self.kernel_version
    }
}

impl Default for ModuleDefaults {
    fn default() -> Self {
        Self {
            branch_prefix: BranchName::DEFAULT_PREFIX.to_owned(),
            kernel_version: KernelVersion::trusted(DEFAULT_KERNEL_VERSION),
        }
    }
}
