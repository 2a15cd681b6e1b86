//! The scaffold command - the tool's single purpose.
//!
//! Validates input, resolves the git choice, wires the production adapters
//! into the core service, and runs it (or prints the plan for `--dry-run`).

use tracing::{debug, instrument};

use tspack_adapters::{LocalFilesystem, ProcessRunner, StdinPrompter};
use tspack_core::application::{
    DEFAULT_PROJECT_NAME, GitChoice, ScaffoldOptions, ScaffoldService,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = cli
        .name
        .or_else(|| config.defaults.name.clone())
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
    validate_name(&name)?;

    let git = resolve_git_choice(cli.no_git, cli.git, &config);
    debug!(%name, ?git, "resolved scaffold inputs");

    let options = ScaffoldOptions {
        name,
        parent: std::env::current_dir()?,
        git,
    };

    if cli.dry_run {
        return print_plan(&options, &output);
    }

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessRunner::new()),
        Box::new(StdinPrompter::new()),
    );
    let project_dir = service.scaffold(&options)?;

    output.success(&format!("Done — created {}", project_dir.display()))?;
    Ok(())
}

/// Flags beat config; config beats the interactive prompt.
fn resolve_git_choice(no_git: bool, git_url: Option<String>, config: &AppConfig) -> GitChoice {
    if no_git {
        return GitChoice::Skip;
    }
    match git_url.or_else(|| config.defaults.git_url.clone()) {
        Some(url) => GitChoice::Remote(url),
        None => GitChoice::Prompt,
    }
}

fn print_plan(options: &ScaffoldOptions, output: &OutputManager) -> CliResult<()> {
    let plan = ScaffoldService::plan(options);

    output.header("Dry run — nothing will be created")?;
    output.print(&format!("Project directory: {}", plan.project_dir.display()))?;
    output.print("")?;
    output.print("Commands:")?;
    for command in &plan.commands {
        output.print(&format!("  {command}"))?;
    }
    output.print("")?;
    output.print("Files:")?;
    for file in &plan.files {
        output.print(&format!("  {file}"))?;
    }
    Ok(())
}

/// The name becomes a directory and the npm package name; keep it to the
/// safe common subset of both.
fn validate_name(name: &str) -> CliResult<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.starts_with(['.', '-', '_']) {
        Some("must start with a letter or digit")
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        Some("only letters, digits, '-', '_' and '.' are allowed")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CliError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
