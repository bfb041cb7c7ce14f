//! Manifest sink that discards everything it receives.

use async_trait::async_trait;

use crate::review::{
    domain::ModuleManifest,
    ports::{ManifestResult, ManifestSink},
};

/// Manifest sink for hosts that do not persist manifests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopManifestSink;

#[async_trait]
impl ManifestSink for NoopManifestSink {
    async fn publish(&self, _manifest: &ModuleManifest) -> ManifestResult<()> {
        Ok(())
    }
}
