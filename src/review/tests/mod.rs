//! Unit tests for module review tracking.

mod status_tests;
mod support;
