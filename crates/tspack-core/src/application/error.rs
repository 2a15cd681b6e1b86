//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the outside
//! world reached through ports. Business logic errors are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the scaffolding workflow.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An external command exited with a non-zero status.
    #[error("command `{command}` failed with status {status}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    /// An external command could not be started at all.
    #[error("could not start `{command}`: {reason}")]
    CommandNotStarted { command: String, reason: String },

    /// Reading an answer from the terminal failed.
    #[error("failed to read prompt answer: {reason}")]
    PromptFailed { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed {
                command, stderr, ..
            } => {
                let mut s = vec![
                    format!("`{command}` did not complete successfully"),
                    "Check that node, npm, and git are installed and on PATH".into(),
                ];
                if !stderr.trim().is_empty() {
                    s.push(format!("stderr: {}", stderr.trim()));
                }
                s
            }
            Self::CommandNotStarted { command, .. } => vec![
                format!("`{command}` could not be launched"),
                "Check that node, npm, and git are installed and on PATH".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Standard input closed before an answer was given".into(),
                "Use --no-git or --git <url> to run non-interactively".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } | Self::CommandNotStarted { .. } => ErrorCategory::External,
            Self::PromptFailed { .. } => ErrorCategory::External,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
        }
    }
}
