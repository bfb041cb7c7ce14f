//! When steps for module review BDD scenarios.

use super::world::{ModuleReviewWorld, run_async};
use chrono::Utc;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use sdlc_orchestrator::review::{
    domain::ModuleId,
    services::{CreateModuleRequest, RecordSaReviewRequest, RecordTriageQaRequest},
};

#[when(r#"a module named "{name}" is created"#)]
fn create_module(world: &mut ModuleReviewWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_module(CreateModuleRequest::new(name)))
        .wrap_err("create module")?;
    world.current_module = Some(created);
    Ok(())
}

#[when(r#"a triage QA with assessment "{assessment}" is recorded"#)]
fn record_triage_qa(
    world: &mut ModuleReviewWorld,
    assessment: String,
) -> Result<(), eyre::Report> {
    let module_id = world.current()?.id();
    let request = RecordTriageQaRequest::new(
        module_id,
        "qa-bot",
        Utc::now(),
        "Transcript pasted from the review assistant",
        assessment,
    );
    let result = run_async(world.service.add_triage_qa(request));
    world.remember(result);
    Ok(())
}

#[when(r#"an SA review with decision "{decision}" is recorded"#)]
fn record_sa_review(world: &mut ModuleReviewWorld, decision: String) -> Result<(), eyre::Report> {
    let module_id = world.current()?.id();
    let request = RecordSaReviewRequest::new(
        module_id,
        "architect",
        Utc::now(),
        "Reviewed against the architecture guidelines",
        decision,
    );
    let result = run_async(world.service.add_sa_review(request));
    world.remember(result);
    Ok(())
}

#[when(r#"an unknown module receives a triage QA with assessment "{assessment}""#)]
fn record_triage_qa_for_unknown_module(world: &mut ModuleReviewWorld, assessment: String) {
    let request = RecordTriageQaRequest::new(
        ModuleId::new(),
        "qa-bot",
        Utc::now(),
        "Transcript for a module nobody registered",
        assessment,
    );
    let result = run_async(world.service.add_triage_qa(request));
    world.remember(result);
}
