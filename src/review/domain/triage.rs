//! Triage QA records attached to modules.

use super::{ModuleId, TriageAssessment, TriageQaId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied triage QA outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageQaSubmission {
    /// Person who pasted the review transcript.
    pub submitted_by: String,
    /// When the triage run was submitted.
    pub submission_date: DateTime<Utc>,
    /// Review transcript produced outside the tracker.
    pub llm_output: String,
    /// Optional screenshot references.
    pub screenshots: Vec<String>,
    /// Pass or fail outcome.
    pub assessment: TriageAssessment,
}

impl TriageQaSubmission {
    /// Creates a submission without screenshots.
    #[must_use]
    pub fn new(
        submitted_by: impl Into<String>,
        submission_date: DateTime<Utc>,
        llm_output: impl Into<String>,
        assessment: TriageAssessment,
    ) -> Self {
        Self {
            submitted_by: submitted_by.into(),
            submission_date,
            llm_output: llm_output.into(),
            screenshots: Vec::new(),
            assessment,
        }
    }

    /// Sets screenshot references.
    #[must_use]
    pub fn with_screenshots(mut self, screenshots: impl IntoIterator<Item = String>) -> Self {
        self.screenshots = screenshots.into_iter().collect();
        self
    }
}

/// Triage QA record owned by a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageQa {
    id: TriageQaId,
    module_id: ModuleId,
    submitted_by: String,
    submission_date: DateTime<Utc>,
    llm_output: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    screenshots: Vec<String>,
    assessment: TriageAssessment,
}

impl TriageQa {
    /// Builds a record for `module_id` with a fresh identifier.
    #[must_use]
    pub fn from_submission(module_id: ModuleId, submission: TriageQaSubmission) -> Self {
        Self {
            id: TriageQaId::new(),
            module_id,
            submitted_by: submission.submitted_by,
            submission_date: submission.submission_date,
            llm_output: submission.llm_output,
            screenshots: submission.screenshots,
            assessment: submission.assessment,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TriageQaId {
        self.id
    }

    /// Returns the owning module identifier.
    #[must_use]
    pub const fn module_id(&self) -> ModuleId {
        self.module_id
    }

    /// Returns the submitter.
    #[must_use]
    pub fn submitted_by(&self) -> &str {
        &self.submitted_by
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn submission_date(&self) -> DateTime<Utc> {
        self.submission_date
    }

    /// Returns the pasted review transcript.
    #[must_use]
    pub fn llm_output(&self) -> &str {
        &self.llm_output
    }

    /// Returns screenshot references.
    #[must_use]
    pub fn screenshots(&self) -> &[String] {
        &self.screenshots
    }

    /// Returns the assessment.
    #[must_use]
    pub const fn assessment(&self) -> TriageAssessment {
        self.assessment
    }
}
