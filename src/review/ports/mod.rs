//! Port contracts for module review tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by review services.

pub mod manifest;
pub mod repository;

pub use manifest::{ManifestError, ManifestResult, ManifestSink};
pub use repository::{ModuleRepository, ModuleRepositoryError, ModuleRepositoryResult};
