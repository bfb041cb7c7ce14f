//! Request payloads accepted by the module lifecycle service.
//!
//! Enumerated values arrive as labels and are parsed at the service
//! boundary so unknown values fail fast.

use crate::review::domain::ModuleId;
use chrono::{DateTime, Utc};

/// Request payload for registering a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateModuleRequest {
    pub(super) name: String,
    pub(super) assigned_to: Option<String>,
    pub(super) kernel_version: Option<String>,
}

impl CreateModuleRequest {
    /// Creates a request for a module called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assigned_to: None,
            kernel_version: None,
        }
    }

    /// Sets the module owner.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Sets the kernel version tag instead of the configured default.
    #[must_use]
    pub fn with_kernel_version(mut self, kernel_version: impl Into<String>) -> Self {
        self.kernel_version = Some(kernel_version.into());
        self
    }
}

/// Request payload for overwriting a module status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateModuleStatusRequest {
    pub(super) module_id: ModuleId,
    pub(super) status: String,
}

impl UpdateModuleStatusRequest {
    /// Creates a status update request. `status` is a canonical status label
    /// such as `"PendingSAReview"`.
    #[must_use]
    pub fn new(module_id: ModuleId, status: impl Into<String>) -> Self {
        Self {
            module_id,
            status: status.into(),
        }
    }
}

/// Request payload for attaching a triage QA outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTriageQaRequest {
    pub(super) module_id: ModuleId,
    pub(super) submitted_by: String,
    pub(super) submission_date: DateTime<Utc>,
    pub(super) llm_output: String,
    pub(super) screenshots: Vec<String>,
    pub(super) assessment: String,
}

impl RecordTriageQaRequest {
    /// Creates a triage QA request. `assessment` must be `"Pass"` or
    /// `"Fail"`.
    #[must_use]
    pub fn new(
        module_id: ModuleId,
        submitted_by: impl Into<String>,
        submission_date: DateTime<Utc>,
        llm_output: impl Into<String>,
        assessment: impl Into<String>,
    ) -> Self {
        Self {
            module_id,
            submitted_by: submitted_by.into(),
            submission_date,
            llm_output: llm_output.into(),
            screenshots: Vec::new(),
            assessment: assessment.into(),
        }
    }

    /// Sets screenshot references.
    #[must_use]
    pub fn with_screenshots(mut self, screenshots: impl IntoIterator<Item = String>) -> Self {
        self.screenshots = screenshots.into_iter().collect();
        self
    }
}

/// Request payload for attaching a solution-architect review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSaReviewRequest {
    pub(super) module_id: ModuleId,
    pub(super) reviewed_by: String,
    pub(super) review_date: DateTime<Utc>,
    pub(super) feedback: String,
    pub(super) decision: String,
}

impl RecordSaReviewRequest {
    /// Creates an SA review request. `decision` must be
    /// `"SA Approved (Ready for Dev Merge)"` or `"SA Revision Requested"`.
    #[must_use]
    pub fn new(
        module_id: ModuleId,
        reviewed_by: impl Into<String>,
        review_date: DateTime<Utc>,
        feedback: impl Into<String>,
        decision: impl Into<String>,
    ) -> Self {
        Self {
            module_id,
            reviewed_by: reviewed_by.into(),
            review_date,
            feedback: feedback.into(),
            decision: decision.into(),
        }
    }
}
