//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use clap::{Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
///
/// tspack is single-purpose, so there are no subcommands: the one optional
/// positional is the project name.
#[derive(Debug, Parser)]
#[command(
    name    = "tspack",
    bin_name = "tspack",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4e6} Scaffold a dual-build TypeScript package",
    long_about = "tspack creates a new TypeScript package with CommonJS and \
                  ES module builds, path aliases, ESLint, and Mocha wired up.",
    after_help = "EXAMPLES:\n\
        \x20 tspack my-package\n\
        \x20 tspack my-package --git https://github.com/me/my-package\n\
        \x20 tspack my-package --no-git --dry-run\n\
        \x20 tspack --completions bash > /usr/share/bash-completion/completions/tspack"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the package directory to create under the current directory.
    #[arg(value_name = "NAME", help = "Project name (default: new-typescript-package)")]
    pub name: Option<String>,

    /// Preview what would be run and written without touching anything.
    #[arg(long = "dry-run", help = "Show what would be done without doing it")]
    pub dry_run: bool,

    /// Skip git setup entirely (no prompt).
    #[arg(long = "no-git", conflicts_with = "git", help = "Skip git initialization")]
    pub no_git: bool,

    /// Initialize git with this remote URL (no prompt).
    #[arg(long = "git", value_name = "URL", help = "Git remote URL for the new repo")]
    pub git: Option<String>,

    /// Generate shell completion scripts and exit.
    #[arg(
        long = "completions",
        value_enum,
        value_name = "SHELL",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
            Shell::Elvish => Self::Elvish,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
