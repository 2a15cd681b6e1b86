//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, Shell};
use crate::error::CliResult;

/// Write a completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    generate(
        clap_complete::Shell::from(shell),
        &mut cmd,
        "tspack",
        &mut std::io::stdout(),
    );
    Ok(())
}
