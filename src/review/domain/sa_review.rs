//! Solution-architect review records attached to modules.

use super::{ModuleId, SaDecision, SaReviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied solution-architect review outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaReviewSubmission {
    /// Reviewing architect.
    pub reviewed_by: String,
    /// When the review took place.
    pub review_date: DateTime<Utc>,
    /// Free-text review feedback.
    pub feedback: String,
    /// Approve or revise decision.
    pub decision: SaDecision,
}

impl SaReviewSubmission {
    /// Creates a review submission.
    #[must_use]
    pub fn new(
        reviewed_by: impl Into<String>,
        review_date: DateTime<Utc>,
        feedback: impl Into<String>,
        decision: SaDecision,
    ) -> Self {
        Self {
            reviewed_by: reviewed_by.into(),
            review_date,
            feedback: feedback.into(),
            decision,
        }
    }
}

/// Solution-architect review record owned by a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaReview {
    id: SaReviewId,
    module_id: ModuleId,
    reviewed_by: String,
    review_date: DateTime<Utc>,
    feedback: String,
    decision: SaDecision,
}

impl SaReview {
    /// Builds a record for `module_id` with a fresh identifier.
    #[must_use]
    pub fn from_submission(module_id: ModuleId, submission: SaReviewSubmission) -> Self {
        Self {
            id: SaReviewId::new(),
            module_id,
            reviewed_by: submission.reviewed_by,
            review_date: submission.review_date,
            feedback: submission.feedback,
            decision: submission.decision,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> SaReviewId {
        self.id
    }

    /// Returns the owning module identifier.
    #[must_use]
    pub const fn module_id(&self) -> ModuleId {
        self.module_id
    }

    /// Returns the reviewing architect.
    #[must_use]
    pub fn reviewed_by(&self) -> &str {
        &self.reviewed_by
    }

    /// Returns the review timestamp.
    #[must_use]
    pub const fn review_date(&self) -> DateTime<Utc> {
        self.review_date
    }

    /// Returns the review feedback.
    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Returns the decision.
    #[must_use]
    pub const fn decision(&self) -> SaDecision {
        self.decision
    }
}
