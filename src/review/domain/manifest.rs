//! Serialisable module snapshots handed to manifest sinks.

use super::{Module, ModuleId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle event that produced a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestEvent {
    /// A module was registered.
    Created,
    /// The status was overwritten explicitly.
    StatusUpdated,
    /// The owner changed.
    Assigned,
    /// A triage QA record was attached.
    TriageQaRecorded,
    /// An SA review record was attached.
    SaReviewRecorded,
}

impl ManifestEvent {
    /// Returns the canonical event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::StatusUpdated => "status_updated",
            Self::Assigned => "assigned",
            Self::TriageQaRecorded => "triage_qa_recorded",
            Self::SaReviewRecorded => "sa_review_recorded",
        }
    }
}

/// JSON snapshot of a module taken after a lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleManifest {
    module_id: ModuleId,
    event: ManifestEvent,
    document: Value,
}

impl ModuleManifest {
    /// Captures the current state of `module`.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the module cannot be serialised.
    pub fn capture(event: ManifestEvent, module: &Module) -> Result<Self, serde_json::Error> {
        Ok(Self {
            module_id: module.id(),
            event,
            document: serde_json::to_value(module)?,
        })
    }

    /// Returns the module the snapshot describes.
    #[must_use]
    pub const fn module_id(&self) -> ModuleId {
        self.module_id
    }

    /// Returns the event that produced the snapshot.
    #[must_use]
    pub const fn event(&self) -> ManifestEvent {
        self.event
    }

    /// Returns the serialised module document.
    #[must_use]
    pub const fn document(&self) -> &Value {
        &self.document
    }

    /// Renders the module document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if rendering fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.document)
    }
}
