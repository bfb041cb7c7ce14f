//! Manifest sink that keeps published manifests in memory.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::review::{
    domain::{ModuleId, ModuleManifest},
    ports::{ManifestError, ManifestResult, ManifestSink},
};

/// Thread-safe manifest sink that records every publication.
#[derive(Debug, Clone, Default)]
pub struct InMemoryManifestSink {
    published: Arc<RwLock<Vec<ModuleManifest>>>,
}

impl InMemoryManifestSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every manifest published so far, oldest first.
    ///
    /// Returns an empty list if the lock has been poisoned.
    #[must_use]
    pub fn published(&self) -> Vec<ModuleManifest> {
        self.published
            .read()
            .map(|manifests| manifests.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent manifest for `module_id`.
    #[must_use]
    pub fn latest_for(&self, module_id: ModuleId) -> Option<ModuleManifest> {
        self.published()
            .into_iter()
            .rev()
            .find(|manifest| manifest.module_id() == module_id)
    }
}

#[async_trait]
impl ManifestSink for InMemoryManifestSink {
    async fn publish(&self, manifest: &ModuleManifest) -> ManifestResult<()> {
        let mut published = self
            .published
            .write()
            .map_err(|err| ManifestError::sink(std::io::Error::other(err.to_string())))?;
        published.push(manifest.clone());
        Ok(())
    }
}
