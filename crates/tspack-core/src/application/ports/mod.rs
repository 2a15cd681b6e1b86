//! Application ports (hexagonal architecture boundaries).
//!
//! Output (driven) ports are implemented by the adapters crate and injected
//! into the application services.

pub mod output;

pub use output::{CommandOutput, CommandRunner, Filesystem, Prompter};

#[cfg(test)]
pub use output::MockFilesystem;
