//! Copy-paste review prompts for running triage QA and SA review outside
//! the tracker.
//!
//! The tracker never calls a model. It renders text a human pastes into an
//! external assistant, then records the outcome through the lifecycle
//! service.

mod renderer;
mod templates;

pub use renderer::{PromptError, PromptKind, ReviewPromptRenderer};
pub use templates::{SA_REVIEW_TEMPLATE, TRIAGE_QA_TEMPLATE};
