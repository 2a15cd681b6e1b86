//! Domain layer: pure configuration-synthesis logic.
//!
//! Everything in this module is deterministic and free of I/O. Documents go
//! in as text, transformed documents come out as text; all side effects live
//! behind the application layer's ports.

pub mod directive;
pub mod document;
pub mod error;
pub mod overlay;
pub mod toolchain;

pub use directive::{DIRECTIVE_SET, Directive, DirectiveValue, PATH_ALIASES};
pub use document::ConfigDocument;
pub use error::{DomainError, ErrorCategory};
pub use overlay::{BuildVariant, CompilerOverrides, OverlayDocument, PathAliases};
pub use toolchain::{EslintConfig, MochaConfig, eslint_ignore};
