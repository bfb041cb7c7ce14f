//! SDLC orchestration: module review lifecycle tracking.
//!
//! This crate tracks review modules (units of developer work) through triage
//! QA and solution-architect review, deriving each module's lifecycle status
//! from the latest recorded outcome.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and manifests
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`review`]: Module registry, review recorders, and review prompts
//! - [`config`]: TOML configuration for registration defaults and logging
//! - [`telemetry`]: `tracing` subscriber installation

pub mod config;
pub mod review;
pub mod telemetry;
