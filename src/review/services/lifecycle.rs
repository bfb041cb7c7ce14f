//! Service layer for module registration, lookup, and review recording.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tokio::sync::Mutex;

use super::{
    CreateModuleRequest, ModuleDefaults, RecordSaReviewRequest, RecordTriageQaRequest,
    UpdateModuleStatusRequest,
};
use crate::review::{
    adapters::NoopManifestSink,
    domain::{
        BranchName, KernelVersion, ManifestEvent, Module, ModuleId, ModuleManifest, ModuleName,
        ModuleStatus, NewModule, ParseModuleStatusError, ParseSaDecisionError,
        ParseTriageAssessmentError, ReviewDomainError, SaDecision, SaReviewSubmission,
        TriageAssessment, TriageQaSubmission,
    },
    ports::{ManifestError, ManifestSink, ModuleRepository, ModuleRepositoryError},
};

/// Service-level errors for module lifecycle operations.
///
/// A missing module is not an error: lookups and mutations report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum ModuleLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ReviewDomainError),
    /// The requested status label is unknown.
    #[error(transparent)]
    InvalidStatus(#[from] ParseModuleStatusError),
    /// The triage assessment label is unknown.
    #[error(transparent)]
    InvalidAssessment(#[from] ParseTriageAssessmentError),
    /// The SA decision label is unknown.
    #[error(transparent)]
    InvalidDecision(#[from] ParseSaDecisionError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ModuleRepositoryError),
    /// Manifest publication failed after the change was stored.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Result type for module lifecycle service operations.
pub type ModuleLifecycleResult<T> = Result<T, ModuleLifecycleError>;

/// Module lifecycle orchestration service.
///
/// Mutations are serialised through a single writer lock so a
/// read-modify-write of one module never interleaves with another.
pub struct ModuleLifecycleService<R, C, M = NoopManifestSink>
where
    R: ModuleRepository,
    C: Clock + Send + Sync,
    M: ManifestSink,
{
    repository: Arc<R>,
    clock: Arc<C>,
    manifests: Arc<M>,
    defaults: ModuleDefaults,
    writer: Arc<Mutex<()>>,
}

impl<R, C, M> Clone for ModuleLifecycleService<R, C, M>
where
    R: ModuleRepository,
    C: Clock + Send + Sync,
    M: ManifestSink,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            manifests: Arc::clone(&self.manifests),
            defaults: self.defaults.clone(),
            writer: Arc::clone(&self.writer),
        }
    }
}

impl<R, C> ModuleLifecycleService<R, C>
where
    R: ModuleRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service that discards manifests.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_manifest_sink(repository, clock, Arc::new(NoopManifestSink))
    }
}

impl<R, C, M> ModuleLifecycleService<R, C, M>
where
    R: ModuleRepository,
    C: Clock + Send + Sync,
    M: ManifestSink,
{
    /// Creates a service that publishes a manifest after every mutation.
    #[must_use]
    pub fn with_manifest_sink(repository: Arc<R>, clock: Arc<C>, manifests: Arc<M>) -> Self {
        Self {
            repository,
            clock,
            manifests,
            defaults: ModuleDefaults::default(),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Replaces the registration defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: ModuleDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Returns the registration defaults in use.
    #[must_use]
    pub const fn defaults(&self) -> &ModuleDefaults {
        &self.defaults
    }

    /// Registers a new module in the `Created` state.
    ///
    /// Duplicate names are allowed and produce distinct modules.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleLifecycleError::Domain`] when the name is empty or the
    /// kernel version is blank, or a repository or manifest error when
    /// persistence fails.
    pub async fn create_module(
        &self,
        request: CreateModuleRequest,
    ) -> ModuleLifecycleResult<Module> {
        let name = ModuleName::new(request.name)?;
        let kernel_version = match request.kernel_version {
            Some(version) => KernelVersion::new(version)?,
            None => self.defaults.kernel_version().clone(),
        };
        let branch_name = BranchName::with_prefix(self.defaults.branch_prefix(), &name)?;
        let mut data = NewModule::on_branch(name, branch_name, kernel_version);
        if let Some(assignee) = request.assigned_to {
            data = data.with_assignee(assignee);
        }

        let _guard = self.writer.lock().await;
        let module = Module::new(data, &*self.clock);
        self.repository.store(&module).await?;
        tracing::info!(
            module_id = %module.id(),
            name = %module.name(),
            branch = %module.branch_name(),
            "module created"
        );
        self.publish(ManifestEvent::Created, &module).await?;
        Ok(module)
    }

    /// Returns every module in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleLifecycleError::Repository`] when the lookup fails.
    pub async fn all_modules(&self) -> ModuleLifecycleResult<Vec<Module>> {
        let modules = self.repository.list_all().await?;
        tracing::debug!(count = modules.len(), "listed modules");
        Ok(modules)
    }

    /// Retrieves a module by identifier.
    ///
    /// Returns `Ok(None)` when the module does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: ModuleId) -> ModuleLifecycleResult<Option<Module>> {
        let module = self.repository.find_by_id(id).await?;
        if module.is_none() {
            tracing::debug!(module_id = %id, "module lookup missed");
        }
        Ok(module)
    }

    /// Returns modules currently in `status`, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleLifecycleError::Repository`] when the lookup fails.
    pub async fn modules_with_status(
        &self,
        status: ModuleStatus,
    ) -> ModuleLifecycleResult<Vec<Module>> {
        Ok(self.repository.list_by_status(status).await?)
    }

    /// Overwrites a module status without deriving it from a review.
    ///
    /// Returns `Ok(None)` when the module does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleLifecycleError::InvalidStatus`] for an unknown status
    /// label, checked before the module is looked up.
    pub async fn update_status(
        &self,
        request: UpdateModuleStatusRequest,
    ) -> ModuleLifecycleResult<Option<Module>> {
        let status = ModuleStatus::try_from(request.status.as_str())?;
        self.mutate(
            request.module_id,
            ManifestEvent::StatusUpdated,
            |module, clock| module.set_status(status, clock),
        )
        .await
    }

    /// Replaces the owner of a module. `None` clears the assignment.
    ///
    /// Returns `Ok(None)` when the module does not exist.
    ///
    /// # Errors
    ///
    /// Returns a repository or manifest error when persistence fails.
    pub async fn assign_module(
        &self,
        module_id: ModuleId,
        assignee: Option<String>,
    ) -> ModuleLifecycleResult<Option<Module>> {
        self.mutate(module_id, ManifestEvent::Assigned, |module, clock| {
            module.assign_to(assignee, clock);
        })
        .await
    }

    /// Attaches a triage QA outcome, replacing any earlier one, and derives
    /// `TriageQAPassed` or `TriageQAFailed`.
    ///
    /// Returns `Ok(None)` when the module does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleLifecycleError::InvalidAssessment`] for any label
    /// other than `Pass` or `Fail`, checked before the module is looked up.
    pub async fn add_triage_qa(
        &self,
        request: RecordTriageQaRequest,
    ) -> ModuleLifecycleResult<Option<Module>> {
        let assessment = TriageAssessment::try_from(request.assessment.as_str())?;
        let submission = TriageQaSubmission::new(
            request.submitted_by,
            request.submission_date,
            request.llm_output,
            assessment,
        )
        .with_screenshots(request.screenshots);
        self.mutate(
            request.module_id,
            ManifestEvent::TriageQaRecorded,
            |module, clock| module.record_triage_qa(submission, clock),
        )
        .await
    }

    /// Attaches a solution-architect review, replacing any earlier one, and
    /// derives `SAApproved` or `SARevisionRequested`.
    ///
    /// Triage QA is not required first.
    ///
    /// Returns `Ok(None)` when the module does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleLifecycleError::InvalidDecision`] for an unknown
    /// decision label, checked before the module is looked up.
    pub async fn add_sa_review(
        &self,
        request: RecordSaReviewRequest,
    ) -> ModuleLifecycleResult<Option<Module>> {
        let decision = SaDecision::try_from(request.decision.as_str())?;
        let submission = SaReviewSubmission::new(
            request.reviewed_by,
            request.review_date,
            request.feedback,
            decision,
        );
        self.mutate(
            request.module_id,
            ManifestEvent::SaReviewRecorded,
            |module, clock| module.record_sa_review(submission, clock),
        )
        .await
    }

    /// Loads, changes, stores, and publishes one module under the writer
    /// lock. A missing module leaves everything untouched.
    async fn mutate<F>(
        &self,
        module_id: ModuleId,
        event: ManifestEvent,
        apply: F,
    ) -> ModuleLifecycleResult<Option<Module>>
    where
        F: FnOnce(&mut Module, &C) + Send,
    {
        let _guard = self.writer.lock().await;
        let Some(mut module) = self.repository.find_by_id(module_id).await? else {
            tracing::warn!(
                module_id = %module_id,
                event = event.as_str(),
                "module not found; nothing changed"
            );
            return Ok(None);
        };

        let previous_status = module.status();
        apply(&mut module, &*self.clock);
        self.repository.update(&module).await?;
        tracing::info!(
            module_id = %module_id,
            event = event.as_str(),
            from = %previous_status,
            to = %module.status(),
            "module updated"
        );
        self.publish(event, &module).await?;
        Ok(Some(module))
    }

    async fn publish(&self, event: ManifestEvent, module: &Module) -> ModuleLifecycleResult<()> {
        let manifest = ModuleManifest::capture(event, module).map_err(ManifestError::from)?;
        tracing::debug!(
            module_id = %module.id(),
            event = event.as_str(),
            "publishing module manifest"
        );
        self.manifests.publish(&manifest).await?;
        Ok(())
    }
}
