//! Unified error handling for tspack core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for tspack core operations.
#[derive(Debug, Error, Clone)]
pub enum TspackError {
    /// Errors from the domain layer (document synthesis violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl TspackError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in tspack".into(),
                "Please report this issue at: https://github.com/tspack/tspack/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Structural => ErrorCategory::Structural,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid input or precondition (bad name, directory in the way).
    Validation,
    /// The generated template had an unexpected shape.
    Structural,
    /// Something referenced does not exist.
    NotFound,
    /// An external tool (npm, npx, git) or the terminal failed.
    External,
    /// Bugs and I/O failures inside tspack itself.
    Internal,
}

/// Convenient result type alias.
pub type TspackResult<T> = Result<T, TspackError>;
