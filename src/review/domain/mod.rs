//! Domain model for module review lifecycle tracking.
//!
//! A module is a unit of developer work that moves through triage QA and
//! solution-architect review. The domain derives lifecycle status from the
//! latest recorded review outcome and keeps infrastructure concerns outside
//! of the domain boundary.

mod branch;
mod error;
mod ids;
mod manifest;
mod module;
mod sa_review;
mod status;
mod triage;

pub use branch::BranchName;
pub use error::{
    ParseModuleStatusError, ParseSaDecisionError, ParseTriageAssessmentError, ReviewDomainError,
};
pub use ids::{KernelVersion, ModuleId, ModuleName, SaReviewId, TriageQaId};
pub use manifest::{ManifestEvent, ModuleManifest};
pub use module::{Module, NewModule, PersistedModuleData};
pub use sa_review::{SaReview, SaReviewSubmission};
pub use status::{ModuleStatus, SaDecision, TriageAssessment};
pub use triage::{TriageQa, TriageQaSubmission};
