//! Then steps for module review BDD scenarios.

use super::world::{ModuleReviewWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use sdlc_orchestrator::review::{
    domain::{Module, ModuleStatus, TriageAssessment},
    services::ModuleLifecycleError,
};

fn stored_module(world: &ModuleReviewWorld) -> Result<Module, eyre::Report> {
    let module_id = world.current()?.id();
    run_async(world.service.find_by_id(module_id))
        .wrap_err("look up current module")?
        .ok_or_else(|| eyre::eyre!("current module missing from registry"))
}

#[then("the registry holds {count:u64} module")]
fn registry_holds(world: &ModuleReviewWorld, count: u64) -> Result<(), eyre::Report> {
    let modules = run_async(world.service.all_modules()).wrap_err("list modules")?;
    let expected = usize::try_from(count)?;
    eyre::ensure!(
        modules.len() == expected,
        "expected {expected} modules, found {}",
        modules.len()
    );
    Ok(())
}

#[then(r#"the last module is named "{name}" with status "{status}""#)]
fn last_module_is(
    world: &ModuleReviewWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected_status = ModuleStatus::try_from(status.as_str())?;
    let modules = run_async(world.service.all_modules()).wrap_err("list modules")?;
    let last = modules
        .last()
        .ok_or_else(|| eyre::eyre!("registry is empty"))?;

    eyre::ensure!(
        last.name().as_str() == name,
        "expected last module {name}, found {}",
        last.name()
    );
    eyre::ensure!(
        last.status() == expected_status,
        "expected status {expected_status}, found {}",
        last.status()
    );
    Ok(())
}

#[then(r#"the module branch is "{branch}""#)]
fn module_branch_is(world: &ModuleReviewWorld, branch: String) -> Result<(), eyre::Report> {
    let module = stored_module(world)?;
    eyre::ensure!(
        module.branch_name().as_str() == branch,
        "expected branch {branch}, found {}",
        module.branch_name()
    );
    Ok(())
}

#[then(r#"the module status is "{status}""#)]
fn module_status_is(world: &ModuleReviewWorld, status: String) -> Result<(), eyre::Report> {
    let expected = ModuleStatus::try_from(status.as_str())?;
    let module = stored_module(world)?;
    eyre::ensure!(
        module.status() == expected,
        "expected status {expected}, found {}",
        module.status()
    );
    Ok(())
}

#[then(r#"the stored triage assessment is "{assessment}""#)]
fn stored_triage_assessment_is(
    world: &ModuleReviewWorld,
    assessment: String,
) -> Result<(), eyre::Report> {
    let expected = TriageAssessment::try_from(assessment.as_str())?;
    let module = stored_module(world)?;
    let record = module
        .triage_qa()
        .ok_or_else(|| eyre::eyre!("module has no triage QA record"))?;
    eyre::ensure!(
        record.assessment() == expected,
        "expected assessment {expected}, found {}",
        record.assessment()
    );
    Ok(())
}

#[then("the module has no triage QA")]
fn module_has_no_triage(world: &ModuleReviewWorld) -> Result<(), eyre::Report> {
    let module = stored_module(world)?;
    eyre::ensure!(module.triage_qa().is_none(), "unexpected triage QA record");
    Ok(())
}

#[then("the recorder reports the module as missing")]
fn recorder_reports_missing(world: &ModuleReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_record_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing recorder result"))?;
    if !matches!(result, Ok(None)) {
        return Err(eyre::eyre!("expected a not-found result, got {result:?}"));
    }
    Ok(())
}

#[then("the recorder fails with an invalid assessment error")]
fn recorder_fails_with_invalid_assessment(
    world: &ModuleReviewWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_record_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing recorder result"))?;
    if !matches!(result, Err(ModuleLifecycleError::InvalidAssessment(_))) {
        return Err(eyre::eyre!(
            "expected InvalidAssessment error, got {result:?}"
        ));
    }
    Ok(())
}
