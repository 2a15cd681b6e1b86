//! Infrastructure adapters for tspack.
//!
//! This crate implements the ports defined in
//! `tspack-core::application::ports`. It contains all external dependencies
//! and I/O operations: the real filesystem, child processes, and the
//! terminal, plus in-memory/scripted counterparts for tests.

pub mod command;
pub mod filesystem;
pub mod fixtures;
pub mod prompt;

// Re-export commonly used adapters
pub use command::{ProcessRunner, ScriptedRunner};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{ScriptedPrompter, StdinPrompter};
