//! Template rendering for review prompts.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::templates::{SA_REVIEW_TEMPLATE, TRIAGE_QA_TEMPLATE};
use crate::review::domain::Module;

/// Review stage a prompt is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    /// First-pass triage QA prompt.
    TriageQa,
    /// Solution-architect review briefing.
    SaReview,
}

impl PromptKind {
    /// Returns the canonical prompt name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TriageQa => "triage_qa",
            Self::SaReview => "sa_review",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while rendering prompts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PromptError {
    /// The template failed to parse or render.
    #[error("failed to render {kind} prompt: {reason}")]
    Render {
        /// Prompt being rendered.
        kind: PromptKind,
        /// Renderer error message.
        reason: String,
    },
}

/// Renders review prompts for a module.
///
/// Templates see `module_name`, `branch_name`, `kernel_version`, `status`,
/// `assigned_to`, `triage_assessment`, `triage_output`, `sa_decision`, and
/// `sa_feedback`. Referencing any other variable is a render error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPromptRenderer {
    triage_qa_template: String,
    sa_review_template: String,
}

impl Default for ReviewPromptRenderer {
    fn default() -> Self {
        Self {
            triage_qa_template: TRIAGE_QA_TEMPLATE.to_owned(),
            sa_review_template: SA_REVIEW_TEMPLATE.to_owned(),
        }
    }
}

#[derive(Serialize)]
struct PromptContext<'a> {
    module_name: &'a str,
    branch_name: &'a str,
    kernel_version: &'a str,
    status: &'static str,
    assigned_to: Option<&'a str>,
    triage_assessment: Option<&'static str>,
    triage_output: Option<&'a str>,
    sa_decision: Option<&'static str>,
    sa_feedback: Option<&'a str>,
}

impl<'a> PromptContext<'a> {
    fn from_module(module: &'a Module) -> Self {
        let triage = module.triage_qa();
        let review = module.sa_review();
        Self {
            module_name: module.name().as_str(),
            branch_name: module.branch_name().as_str(),
            kernel_version: module.kernel_version_used().as_str(),
            status: module.status().as_str(),
            assigned_to: module.assigned_to(),
            triage_assessment: triage.map(|record| record.assessment().as_str()),
            triage_output: triage.map(|record| record.llm_output()),
            sa_decision: review.map(|record| record.decision().as_str()),
            sa_feedback: review.map(|record| record.feedback()),
        }
    }
}

impl ReviewPromptRenderer {
    /// Creates a renderer with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the template used for `kind`.
    #[must_use]
    pub fn with_template(mut self, kind: PromptKind, template: impl Into<String>) -> Self {
        match kind {
            PromptKind::TriageQa => self.triage_qa_template = template.into(),
            PromptKind::SaReview => self.sa_review_template = template.into(),
        }
        self
    }

    /// Renders the `kind` prompt for `module`.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Render`] when the template is malformed or
    /// references an unknown variable.
    pub fn render(&self, kind: PromptKind, module: &Module) -> Result<String, PromptError> {
        let template = match kind {
            PromptKind::TriageQa => &self.triage_qa_template,
            PromptKind::SaReview => &self.sa_review_template,
        };
        let mut environment = Environment::new();
        environment.set_undefined_behavior(UndefinedBehavior::Strict);
        let rendered = environment
            .render_str(template, PromptContext::from_module(module))
            .map_err(|error| PromptError::Render {
                kind,
                reason: error.to_string(),
            })?;
        tracing::debug!(
            module_id = %module.id(),
            prompt = kind.as_str(),
            "rendered review prompt"
        );
        Ok(rendered)
    }
}
