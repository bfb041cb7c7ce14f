//! Shared world state for module review BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use sdlc_orchestrator::review::{
    adapters::memory::InMemoryModuleRepository,
    domain::Module,
    services::{ModuleLifecycleError, ModuleLifecycleService},
};

/// Service type used by the BDD world.
pub type TestModuleService = ModuleLifecycleService<InMemoryModuleRepository, DefaultClock>;

/// Scenario world for module review behaviour tests.
pub struct ModuleReviewWorld {
    pub service: TestModuleService,
    pub current_module: Option<Module>,
    pub last_record_result: Option<Result<Option<Module>, ModuleLifecycleError>>,
}

impl ModuleReviewWorld {
    /// Creates a world backed by an empty registry.
    #[must_use]
    pub fn new() -> Self {
        let service = ModuleLifecycleService::new(
            Arc::new(InMemoryModuleRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            current_module: None,
            last_record_result: None,
        }
    }

    /// Returns the module the scenario is working on.
    pub fn current(&self) -> Result<&Module, eyre::Report> {
        self.current_module
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current module in scenario world"))
    }

    /// Stores the outcome of a recorder call, tracking the updated module.
    pub fn remember(&mut self, result: Result<Option<Module>, ModuleLifecycleError>) {
        if let Ok(Some(ref updated)) = result {
            self.current_module = Some(updated.clone());
        }
        self.last_record_result = Some(result);
    }
}

impl Default for ModuleReviewWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ModuleReviewWorld {
    ModuleReviewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
