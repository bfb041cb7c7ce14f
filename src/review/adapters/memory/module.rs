//! In-memory repository for module review tracking.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::review::{
    domain::{Module, ModuleId, ModuleStatus},
    ports::{ModuleRepository, ModuleRepositoryError, ModuleRepositoryResult},
};

/// Thread-safe in-memory module repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModuleRepository {
    state: Arc<RwLock<InMemoryModuleState>>,
}

#[derive(Debug, Default)]
struct InMemoryModuleState {
    modules: HashMap<ModuleId, Module>,
    insertion_order: Vec<ModuleId>,
}

impl InMemoryModuleState {
    fn ordered(&self) -> impl Iterator<Item = &Module> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.modules.get(id))
    }
}

impl InMemoryModuleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ModuleRepositoryError {
    ModuleRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ModuleRepository for InMemoryModuleRepository {
    async fn store(&self, module: &Module) -> ModuleRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.modules.contains_key(&module.id()) {
            return Err(ModuleRepositoryError::DuplicateModule(module.id()));
        }
        state.insertion_order.push(module.id());
        state.modules.insert(module.id(), module.clone());
        Ok(())
    }

    async fn update(&self, module: &Module) -> ModuleRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .modules
            .get_mut(&module.id())
            .ok_or(ModuleRepositoryError::NotFound(module.id()))?;
        *stored = module.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: ModuleId) -> ModuleRepositoryResult<Option<Module>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.modules.get(&id).cloned())
    }

    async fn list_all(&self) -> ModuleRepositoryResult<Vec<Module>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.ordered().cloned().collect())
    }

    async fn list_by_status(&self, status: ModuleStatus) -> ModuleRepositoryResult<Vec<Module>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .ordered()
            .filter(|module| module.status() == status)
            .cloned()
            .collect())
    }
}
