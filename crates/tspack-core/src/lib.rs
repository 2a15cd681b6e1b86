//! tspack core - hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the tspack
//! TypeScript package scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           tspack-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, CommandRunner, Prompter)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     tspack-adapters (Infrastructure)    │
//! │ (LocalFilesystem, ProcessRunner, stdin) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ConfigDocument, Directive, Overlay)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer synthesizes configuration documents deterministically;
//! every command, file write, and prompt goes through a port.

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DEFAULT_PROJECT_NAME, GitChoice, ScaffoldOptions, ScaffoldPlan, ScaffoldService,
        ports::{CommandOutput, CommandRunner, Filesystem, Prompter},
    };
    pub use crate::domain::{
        BuildVariant, ConfigDocument, DIRECTIVE_SET, Directive, DirectiveValue,
    };
    pub use crate::error::{TspackError, TspackResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
