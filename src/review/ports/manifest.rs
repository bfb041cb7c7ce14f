//! Port for publishing module manifests after lifecycle changes.

use crate::review::domain::ModuleManifest;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for manifest publication.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Receives a snapshot of every module mutation.
#[async_trait]
pub trait ManifestSink: Send + Sync {
    /// Publishes a manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Sink`] when the sink cannot accept the
    /// manifest.
    async fn publish(&self, manifest: &ModuleManifest) -> ManifestResult<()>;
}

/// Errors raised while building or publishing manifests.
#[derive(Debug, Clone, Error)]
pub enum ManifestError {
    /// The module could not be serialised.
    #[error("manifest serialisation failed: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// The sink rejected the manifest.
    #[error("manifest sink error: {0}")]
    Sink(Arc<dyn std::error::Error + Send + Sync>),
}

impl ManifestError {
    /// Wraps a sink failure.
    pub fn sink(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Sink(Arc::new(err))
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
