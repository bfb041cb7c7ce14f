//! Module review lifecycle tracking.
//!
//! Modules are registered, pass through triage QA and solution-architect
//! review, and carry a status derived from the latest recorded outcome.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Copy-paste review prompts in [`prompt`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod prompt;
pub mod services;

#[cfg(test)]
mod tests;
