//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tspack-adapters` crate provides implementations.

use std::path::Path;

use crate::error::TspackResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tspack_adapters::filesystem::LocalFilesystem` (production)
/// - `tspack_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TspackResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> TspackResult<()>;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> TspackResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Captured output of a completed command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Port for running external commands (npm, npx, git).
///
/// `argv[0]` is the program, the rest are its arguments; no shell is
/// involved, so argument values need no quoting. A non-zero exit status is
/// reported as `ApplicationError::CommandFailed`, never as a silent success.
///
/// Implemented by:
/// - `tspack_adapters::command::ProcessRunner` (production)
/// - `tspack_adapters::command::ScriptedRunner` (testing)
///
/// Not automocked: the nested reference in `argv` has no `'static` form,
/// so unit tests use hand-written doubles (as with [`Prompter`]).
pub trait CommandRunner: Send + Sync {
    /// Run `argv` with `dir` as the working directory and wait for it.
    fn run(&self, dir: &Path, argv: &[&str]) -> TspackResult<CommandOutput>;
}

/// Port for asking the user a question on the terminal.
///
/// Implementations re-ask until `validate` accepts the answer. An empty
/// answer resolves to `default` (before validation) when one is given.
///
/// Implemented by:
/// - `tspack_adapters::prompt::StdinPrompter` (production)
/// - `tspack_adapters::prompt::ScriptedPrompter` (testing)
pub trait Prompter: Send + Sync {
    fn prompt(
        &self,
        question: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> TspackResult<String>;
}
