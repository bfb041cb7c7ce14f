//! Behaviour tests for the module review lifecycle.

#[path = "module_review_steps/mod.rs"]
mod module_review_steps_defs;

use module_review_steps_defs::world::{ModuleReviewWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/module_review.feature",
    name = "Passing triage followed by SA approval"
)]
#[tokio::test(flavor = "multi_thread")]
async fn passing_triage_then_sa_approval(world: ModuleReviewWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_review.feature",
    name = "Failing triage is stored on the module"
)]
#[tokio::test(flavor = "multi_thread")]
async fn failing_triage_is_stored(world: ModuleReviewWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_review.feature",
    name = "SA review may precede triage"
)]
#[tokio::test(flavor = "multi_thread")]
async fn sa_review_may_precede_triage(world: ModuleReviewWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_review.feature",
    name = "Recording against an unknown module changes nothing"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_module_changes_nothing(world: ModuleReviewWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/module_review.feature",
    name = "An unrecognised assessment is rejected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unrecognised_assessment_is_rejected(world: ModuleReviewWorld) {
    let _ = world;
}
