//! Lifecycle status and review outcome enumerations.

use super::{ParseModuleStatusError, ParseSaDecisionError, ParseTriageAssessmentError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Module lifecycle status.
///
/// Recorders derive `Created`, the two triage outcomes, and the two SA
/// outcomes. The remaining states are only reachable through an explicit
/// status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleStatus {
    /// Module has been registered.
    Created,
    /// Setup instructions have been handed to the developer.
    SetupInstructionsProvided,
    /// Module is waiting for a triage QA run.
    #[serde(rename = "PendingTriageQA")]
    PendingTriageQa,
    /// Triage QA assessed the module as passing.
    #[serde(rename = "TriageQAPassed")]
    TriageQaPassed,
    /// Triage QA assessed the module as failing.
    #[serde(rename = "TriageQAFailed")]
    TriageQaFailed,
    /// Module is waiting for solution-architect review.
    #[serde(rename = "PendingSAReview")]
    PendingSaReview,
    /// Solution architect approved the module for dev merge.
    #[serde(rename = "SAApproved")]
    SaApproved,
    /// Solution architect requested revisions.
    #[serde(rename = "SARevisionRequested")]
    SaRevisionRequested,
    /// Module has been merged to the develop branch.
    MergedToDevelop,
}

impl ModuleStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 9] = [
        Self::Created,
        Self::SetupInstructionsProvided,
        Self::PendingTriageQa,
        Self::TriageQaPassed,
        Self::TriageQaFailed,
        Self::PendingSaReview,
        Self::SaApproved,
        Self::SaRevisionRequested,
        Self::MergedToDevelop,
    ];

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::SetupInstructionsProvided => "SetupInstructionsProvided",
            Self::PendingTriageQa => "PendingTriageQA",
            Self::TriageQaPassed => "TriageQAPassed",
            Self::TriageQaFailed => "TriageQAFailed",
            Self::PendingSaReview => "PendingSAReview",
            Self::SaApproved => "SAApproved",
            Self::SaRevisionRequested => "SARevisionRequested",
            Self::MergedToDevelop => "MergedToDevelop",
        }
    }

    /// Returns whether no lifecycle operation normally moves a module out of
    /// this status.
    ///
    /// Terminal states are not enforced: an explicit status update or a new
    /// review can still move a module onwards.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::SaApproved | Self::MergedToDevelop)
    }

    /// Returns whether a review recorder can derive this status.
    #[must_use]
    pub const fn is_reachable_by_recorder(self) -> bool {
        matches!(
            self,
            Self::Created
                | Self::TriageQaPassed
                | Self::TriageQaFailed
                | Self::SaApproved
                | Self::SaRevisionRequested
        )
    }
}

impl TryFrom<&str> for ModuleStatus {
    type Error = ParseModuleStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == trimmed)
            .ok_or_else(|| ParseModuleStatusError(value.to_owned()))
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a triage QA run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriageAssessment {
    /// The module passed triage.
    Pass,
    /// The module failed triage.
    Fail,
}

impl TriageAssessment {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }

    /// Returns the lifecycle status that follows this assessment.
    #[must_use]
    pub const fn resulting_status(self) -> ModuleStatus {
        match self {
            Self::Pass => ModuleStatus::TriageQaPassed,
            Self::Fail => ModuleStatus::TriageQaFailed,
        }
    }
}

impl TryFrom<&str> for TriageAssessment {
    type Error = ParseTriageAssessmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Pass" => Ok(Self::Pass),
            "Fail" => Ok(Self::Fail),
            _ => Err(ParseTriageAssessmentError(value.to_owned())),
        }
    }
}

impl fmt::Display for TriageAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision recorded by a solution architect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaDecision {
    /// The module is ready to merge into develop.
    #[serde(rename = "SA Approved (Ready for Dev Merge)")]
    Approved,
    /// The module needs another revision.
    #[serde(rename = "SA Revision Requested")]
    RevisionRequested,
}

impl SaDecision {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "SA Approved (Ready for Dev Merge)",
            Self::RevisionRequested => "SA Revision Requested",
        }
    }

    /// Returns the lifecycle status that follows this decision.
    #[must_use]
    pub const fn resulting_status(self) -> ModuleStatus {
        match self {
            Self::Approved => ModuleStatus::SaApproved,
            Self::RevisionRequested => ModuleStatus::SaRevisionRequested,
        }
    }
}

impl TryFrom<&str> for SaDecision {
    type Error = ParseSaDecisionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        [Self::Approved, Self::RevisionRequested]
            .into_iter()
            .find(|decision| decision.as_str() == trimmed)
            .ok_or_else(|| ParseSaDecisionError(value.to_owned()))
    }
}

impl fmt::Display for SaDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
