//! Step definitions for module review lifecycle scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
