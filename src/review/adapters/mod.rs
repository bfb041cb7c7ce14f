//! Adapter implementations for review ports.

pub mod memory;
mod noop;

pub use noop::NoopManifestSink;
