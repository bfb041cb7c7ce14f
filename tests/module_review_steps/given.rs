//! Given steps for module review BDD scenarios.

use super::world::{ModuleReviewWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use sdlc_orchestrator::review::services::CreateModuleRequest;

#[given("an empty module registry")]
fn empty_registry(world: &mut ModuleReviewWorld) -> Result<(), eyre::Report> {
    let modules = run_async(world.service.all_modules()).wrap_err("list modules")?;
    eyre::ensure!(modules.is_empty(), "expected an empty registry");
    Ok(())
}

#[given(r#"a module named "{name}" has been registered"#)]
fn module_registered(world: &mut ModuleReviewWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_module(CreateModuleRequest::new(name)))
        .wrap_err("register module for scenario setup")?;
    world.current_module = Some(created);
    Ok(())
}
