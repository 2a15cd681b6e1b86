//! Child-process command runner using std::process.

use std::path::Path;
use std::process::Command;

use tracing::debug;
use tspack_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    error::{TspackError, TspackResult},
};

/// Production command runner. Spawns the program directly (no shell) with
/// the project directory as the working directory and waits for it.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, dir: &Path, argv: &[&str]) -> TspackResult<CommandOutput> {
        let (program, args) = argv.split_first().ok_or_else(|| TspackError::Internal {
            message: "empty command line".into(),
        })?;
        let command = argv.join(" ");
        debug!(%command, dir = %dir.display(), "running");

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| ApplicationError::CommandNotStarted {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ApplicationError::CommandFailed {
                command,
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tspack_core::error::TspackError;

    #[test]
    fn captures_stdout_of_a_successful_command() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ProcessRunner::new();

        let output = runner.run(dir.path(), &["echo", "hello"]).unwrap();
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[test]
    fn nonexistent_program_is_not_started() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ProcessRunner::new();

        let err = runner
            .run(dir.path(), &["definitely-not-a-real-program-xyz"])
            .unwrap_err();
        assert!(matches!(
            err,
            TspackError::Application(ApplicationError::CommandNotStarted { .. })
        ));
    }

    #[test]
    fn nonzero_exit_reports_command_failed() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ProcessRunner::new();

        let err = runner.run(dir.path(), &["false"]).unwrap_err();
        assert!(matches!(
            err,
            TspackError::Application(ApplicationError::CommandFailed { status: 1, .. })
        ));
    }
}
