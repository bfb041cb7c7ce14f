//! Repository port for module persistence and lookup.

use crate::review::domain::{Module, ModuleId, ModuleStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for module repository operations.
pub type ModuleRepositoryResult<T> = Result<T, ModuleRepositoryError>;

/// Module persistence contract.
#[async_trait]
pub trait ModuleRepository: Send + Sync {
    /// Stores a new module after all previously stored modules.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleRepositoryError::DuplicateModule`] when the module ID
    /// already exists.
    async fn store(&self, module: &Module) -> ModuleRepositoryResult<()>;

    /// Persists changes to an existing module without changing its position.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleRepositoryError::NotFound`] when the module does not
    /// exist.
    async fn update(&self, module: &Module) -> ModuleRepositoryResult<()>;

    /// Finds a module by identifier.
    ///
    /// Returns `None` when the module does not exist.
    async fn find_by_id(&self, id: ModuleId) -> ModuleRepositoryResult<Option<Module>>;

    /// Returns every module in insertion order.
    async fn list_all(&self) -> ModuleRepositoryResult<Vec<Module>>;

    /// Returns modules currently in `status`, in insertion order.
    async fn list_by_status(&self, status: ModuleStatus) -> ModuleRepositoryResult<Vec<Module>>;
}

/// Errors returned by module repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ModuleRepositoryError {
    /// A module with the same identifier already exists.
    #[error("duplicate module identifier: {0}")]
    DuplicateModule(ModuleId),

    /// The module was not found.
    #[error("module not found: {0}")]
    NotFound(ModuleId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ModuleRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
