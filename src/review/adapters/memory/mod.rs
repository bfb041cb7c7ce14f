//! In-memory adapters for review ports.

mod manifest;
mod module;

pub use manifest::InMemoryManifestSink;
pub use module::InMemoryModuleRepository;
