//! Domain errors for the configuration-synthesis pipeline.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to thread through the pipeline)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A structural anchor was not found exactly once. The template shape
    /// has changed; proceeding would produce a malformed document.
    #[error("structural mismatch: expected `{pattern}` exactly once, found {found} occurrences")]
    StructuralMismatch { pattern: String, found: usize },

    /// A directive's key does not appear in the document in either commented
    /// or active form. A missing key means the template shape changed, so
    /// this is a hard error rather than a silent skip.
    #[error("configuration key '{key}' not found in the template document")]
    KeyNotFound { key: String },

    /// A directive's key matched more than one line. Conflict resolution is
    /// out of scope, so ambiguity aborts the run.
    #[error("configuration key '{key}' matched {found} lines; cannot activate unambiguously")]
    AmbiguousKey { key: String, found: usize },

    /// An overlay or sidecar document failed to serialize.
    #[error("failed to serialize {document}: {reason}")]
    Serialization { document: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StructuralMismatch { pattern, found } => vec![
                format!(
                    "The generated tsconfig.json did not contain `{pattern}` exactly once (found {found})"
                ),
                "Your TypeScript version may emit a different template shape".into(),
                "Check the tsconfig.json left in the project directory".into(),
            ],
            Self::KeyNotFound { key } => vec![
                format!("The template tsconfig.json has no line for '{key}'"),
                "Your TypeScript version may have renamed or removed this option".into(),
            ],
            Self::AmbiguousKey { key, .. } => vec![
                format!("'{key}' appears on several lines of the template"),
                "Remove the duplicate entries and re-run".into(),
            ],
            Self::Serialization { .. } => vec!["This appears to be a bug in tspack".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StructuralMismatch { .. } | Self::AmbiguousKey { .. } => ErrorCategory::Structural,
            Self::KeyNotFound { .. } => ErrorCategory::NotFound,
            Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Structural,
    NotFound,
    Internal,
}
