//! Module aggregate root and review lifecycle behaviour.

use super::{
    BranchName, KernelVersion, ModuleId, ModuleName, ModuleStatus, SaReview, SaReviewSubmission,
    TriageQa, TriageQaSubmission,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Module aggregate root.
///
/// Each review kind holds at most one record. Recording a second triage QA
/// or SA review replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    id: ModuleId,
    name: ModuleName,
    status: ModuleStatus,
    creation_date: DateTime<Utc>,
    last_updated: DateTime<Utc>,
    assigned_to: Option<String>,
    branch_name: BranchName,
    kernel_version_used: KernelVersion,
    #[serde(rename = "triageQA")]
    triage_qa: Option<TriageQa>,
    sa_review: Option<SaReview>,
}

/// Parameter object for registering a new module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModule {
    /// Display name.
    pub name: ModuleName,
    /// Feature branch, normally derived from the name.
    pub branch_name: BranchName,
    /// Kernel version the module builds on.
    pub kernel_version: KernelVersion,
    /// Optional owner.
    pub assigned_to: Option<String>,
}

impl NewModule {
    /// Creates registration data with the default `feature/` branch.
    #[must_use]
    pub fn new(name: ModuleName, kernel_version: KernelVersion) -> Self {
        let branch_name = BranchName::for_module(&name);
        Self::on_branch(name, branch_name, kernel_version)
    }

    /// Creates registration data on an already derived branch.
    #[must_use]
    pub const fn on_branch(
        name: ModuleName,
        branch_name: BranchName,
        kernel_version: KernelVersion,
    ) -> Self {
        Self {
            name,
            branch_name,
            kernel_version,
            assigned_to: None,
        }
    }

    /// Sets the module owner.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }
}

/// Parameter object for reconstructing a persisted module aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedModuleData {
    /// Persisted module identifier.
    pub id: ModuleId,
    /// Persisted display name.
    pub name: ModuleName,
    /// Persisted lifecycle status.
    pub status: ModuleStatus,
    /// Persisted creation timestamp.
    pub creation_date: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub last_updated: DateTime<Utc>,
    /// Persisted owner, if any.
    pub assigned_to: Option<String>,
    /// Persisted feature branch.
    pub branch_name: BranchName,
    /// Persisted kernel version tag.
    pub kernel_version_used: KernelVersion,
    /// Persisted triage QA record, if any.
    pub triage_qa: Option<TriageQa>,
    /// Persisted SA review record, if any.
    pub sa_review: Option<SaReview>,
}

impl Module {
    /// Registers a new module in the `Created` state.
    #[must_use]
    pub fn new(data: NewModule, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ModuleId::new(),
            name: data.name,
            status: ModuleStatus::Created,
            creation_date: timestamp,
            last_updated: timestamp,
            assigned_to: data.assigned_to,
            branch_name: data.branch_name,
            kernel_version_used: data.kernel_version,
            triage_qa: None,
            sa_review: None,
        }
    }

    /// Reconstructs a module from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedModuleData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            status: data.status,
            creation_date: data.creation_date,
            last_updated: data.last_updated,
            assigned_to: data.assigned_to,
            branch_name: data.branch_name,
            kernel_version_used: data.kernel_version_used,
            triage_qa: data.triage_qa,
            sa_review: data.sa_review,
        }
    }

    /// Returns the module identifier.
    #[must_use]
    pub const fn id(&self) -> ModuleId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &ModuleName {
        &self.name
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ModuleStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Returns the owner, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the feature branch.
    #[must_use]
    pub const fn branch_name(&self) -> &BranchName {
        &self.branch_name
    }

    /// Returns the kernel version the module was created against.
    #[must_use]
    pub const fn kernel_version_used(&self) -> &KernelVersion {
        &self.kernel_version_used
    }

    /// Returns the current triage QA record, if any.
    #[must_use]
    pub const fn triage_qa(&self) -> Option<&TriageQa> {
        self.triage_qa.as_ref()
    }

    /// Returns the current SA review record, if any.
    #[must_use]
    pub const fn sa_review(&self) -> Option<&SaReview> {
        self.sa_review.as_ref()
    }

    /// Overwrites the status without deriving it from a review.
    pub fn set_status(&mut self, status: ModuleStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Replaces the module owner. `None` clears the assignment.
    pub fn assign_to(&mut self, assignee: Option<String>, clock: &impl Clock) {
        self.assigned_to = assignee;
        self.touch(clock);
    }

    /// Attaches a triage QA outcome and derives the next status.
    ///
    /// Any previous triage QA record is discarded.
    pub fn record_triage_qa(&mut self, submission: TriageQaSubmission, clock: &impl Clock) {
        let record = TriageQa::from_submission(self.id, submission);
        self.status = record.assessment().resulting_status();
        self.triage_qa = Some(record);
        self.touch(clock);
    }

    /// Attaches a solution-architect review and derives the next status.
    ///
    /// Any previous SA review is discarded. A triage QA record is not
    /// required beforehand.
    pub fn record_sa_review(&mut self, submission: SaReviewSubmission, clock: &impl Clock) {
        let record = SaReview::from_submission(self.id, submission);
        self.status = record.decision().resulting_status();
        self.sa_review = Some(record);
        self.touch(clock);
    }

    /// Moves `last_updated` to the clock time, never backwards.
    fn touch(&mut self, clock: &impl Clock) {
        self.last_updated = self.last_updated.max(clock.utc());
    }
}
