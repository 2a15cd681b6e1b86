//! Scaffold service - main application orchestrator.
//!
//! Coordinates the whole package-creation workflow:
//! 1. Create the project directory and initialize npm
//! 2. Install TypeScript and generate the template tsconfig
//! 3. Synthesize the base configuration, overlays, and sidecars
//! 4. Wire package.json entry points and scripts, install tooling
//! 5. Optionally initialize git and the remote
//!
//! All side effects flow through the driven ports, so the sequence is fully
//! testable with scripted adapters.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, Prompter},
    },
    domain::{
        BuildVariant, ConfigDocument, DIRECTIVE_SET, EslintConfig, MochaConfig, eslint_ignore,
    },
    error::TspackResult,
};

/// Project name used when the caller does not supply one.
pub const DEFAULT_PROJECT_NAME: &str = "new-typescript-package";

/// Installed before `npx tsc --init`; everything else can wait.
const COMPILER_PACKAGES: &[&str] = &["typescript", "@types/node"];

/// Dev-dependency groups installed after the configuration documents exist.
/// Grouped so progress output stays readable on slow networks.
const TOOLING_PACKAGES: &[&[&str]] = &[
    &["tsc-alias"],
    &["eslint@^8.56.0"],
    &["@typescript-eslint/parser", "@typescript-eslint/eslint-plugin"],
    &["mocha", "@types/mocha"],
    &["ts-node", "tsconfig-paths"],
    &["cross-env"],
];

/// `npm pkg set` assignments for dual-build entry points.
const ENTRY_POINTS: &[&str] = &[
    "main=./dist/cjs/index.js",
    "types=./dist/cjs/index.d.ts",
    "module=./dist/esm/index.js",
    r#"exports["."].import=./dist/esm/index.js"#,
    r#"exports["."].require=./dist/cjs/index.js"#,
    "files[0]=dist/**/*",
    "files[1]=README.md",
];

/// `npm pkg set` assignments for the script table. The build scripts chain
/// tsc-alias so path aliases are rewritten in the emitted JavaScript.
const SCRIPTS: &[&str] = &[
    "scripts.build:cjs=tsc --project tsconfig.commonjs.json && tsc-alias -p tsconfig.commonjs.json",
    "scripts.build:esm=tsc --project tsconfig.esm.json && tsc-alias -p tsconfig.esm.json",
    "scripts.build=npm run build:cjs && npm run build:esm",
    "scripts.prepublishOnly=npm run build",
    r#"scripts.clean=node -e "require('fs').rmSync('./dist', { recursive: true, force: true })""#,
    "scripts.prebuild=npm run clean",
    "scripts.lint=eslint . --ext .ts,.js --fix",
    "scripts.test=cross-env TS_NODE_PROJECT='./tsconfig.test.json' mocha",
];

const STARTER_INDEX: &str = "export function greet(name: string): string {
    return `Hello, ${name}!`
}
";

/// Imports through the `@/` alias so the alias wiring is exercised on the
/// very first `npm test`.
const STARTER_TEST: &str = "import { strict as assert } from 'assert'
import { greet } from '@/index'

describe('greet', () => {
    it('greets by name', () => {
        assert.equal(greet('world'), 'Hello, world!')
    })
})
";

/// How the git step should behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitChoice {
    /// Ask on the terminal (y/n, then the remote URL).
    Prompt,
    /// Skip git entirely.
    Skip,
    /// Initialize git with this remote URL, without prompting.
    Remote(String),
}

/// Inputs for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub name: String,
    pub parent: PathBuf,
    pub git: GitChoice,
}

/// What a run would do, for dry-run display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub project_dir: PathBuf,
    pub commands: Vec<String>,
    pub files: Vec<String>,
}

/// Main scaffolding service.
///
/// Owns the driven ports and drives the creation sequence through them.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    prompter: Box<dyn Prompter>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            filesystem,
            runner,
            prompter,
        }
    }

    /// Create a new TypeScript package under `options.parent`.
    ///
    /// Returns the project directory on success. The directory is left in
    /// place on failure so partial work can be inspected.
    #[instrument(skip_all, fields(project = %options.name))]
    pub fn scaffold(&self, options: &ScaffoldOptions) -> TspackResult<PathBuf> {
        let project_dir = options.parent.join(&options.name);
        if self.filesystem.exists(&project_dir) {
            return Err(ApplicationError::ProjectExists { path: project_dir }.into());
        }

        info!("creating directory {}", options.name);
        self.filesystem.create_dir_all(&project_dir)?;

        info!("npm init");
        self.runner.run(&project_dir, &["npm", "init", "--yes"])?;

        info!("installing TypeScript (this may take a while)");
        self.install(&project_dir, COMPILER_PACKAGES)?;

        info!("initializing typescript");
        self.runner.run(&project_dir, &["npx", "tsc", "--init"])?;

        info!("updating tsconfig");
        let base_path = project_dir.join("tsconfig.json");
        let template = self.filesystem.read_file(&base_path)?;
        let document = ConfigDocument::build(&template, DIRECTIVE_SET)?;
        self.filesystem.write_file(&base_path, &document.to_text())?;

        for variant in BuildVariant::CATALOG {
            info!("writing {}", variant.file_name());
            let overlay = variant.compose().to_json()?;
            self.filesystem
                .write_file(&project_dir.join(variant.file_name()), &overlay)?;
        }

        info!("writing starter sources");
        self.filesystem.create_dir_all(&project_dir.join("src"))?;
        self.filesystem
            .write_file(&project_dir.join("src/index.ts"), STARTER_INDEX)?;
        self.filesystem.create_dir_all(&project_dir.join("tests"))?;
        self.filesystem
            .write_file(&project_dir.join("tests/index.test.ts"), STARTER_TEST)?;

        for group in TOOLING_PACKAGES {
            info!("installing {} (this may take a while)", group.join(" "));
            self.install(&project_dir, group)?;
        }

        info!("updating package.json entry points");
        for assignment in ENTRY_POINTS {
            self.pkg_set(&project_dir, assignment)?;
        }

        info!("adding scripts");
        for assignment in SCRIPTS {
            self.pkg_set(&project_dir, assignment)?;
        }

        info!("writing eslintrc");
        self.filesystem
            .write_file(&project_dir.join(".eslintrc"), &EslintConfig::default().to_json()?)?;
        self.filesystem
            .write_file(&project_dir.join(".eslintignore"), eslint_ignore())?;

        info!("writing mocharc");
        self.filesystem
            .write_file(&project_dir.join(".mocharc.json"), &MochaConfig::default().to_json()?)?;

        self.configure_git(&project_dir, &options.git)?;

        info!("scaffold completed");
        Ok(project_dir)
    }

    /// Describe what [`scaffold`](Self::scaffold) would do, without touching
    /// any port. Prompted values appear as placeholders.
    pub fn plan(options: &ScaffoldOptions) -> ScaffoldPlan {
        let mut commands = vec![
            "npm init --yes".to_string(),
            format!("npm install --save-dev {}", COMPILER_PACKAGES.join(" ")),
            "npx tsc --init".to_string(),
        ];
        for group in TOOLING_PACKAGES {
            commands.push(format!("npm install --save-dev {}", group.join(" ")));
        }
        for assignment in ENTRY_POINTS.iter().chain(SCRIPTS) {
            commands.push(format!("npm pkg set {assignment}"));
        }

        let mut files = vec!["tsconfig.json".to_string()];
        files.extend(BuildVariant::CATALOG.iter().map(|v| v.file_name().to_string()));
        files.extend(
            ["src/index.ts", "tests/index.test.ts", ".eslintrc", ".eslintignore", ".mocharc.json"]
                .map(String::from),
        );

        let remote = match &options.git {
            GitChoice::Skip => None,
            GitChoice::Remote(url) => Some(url.as_str()),
            GitChoice::Prompt => Some("<git-url>"),
        };
        if let Some(url) = remote {
            commands.push("npm pkg set repository.type=git".to_string());
            commands.push(format!("npm pkg set repository.url=git+{url}.git"));
            commands.push(format!("npm pkg set bugs.url={url}/issues"));
            commands.push(format!("npm pkg set homepage={url}#readme"));
            commands.push("npx gitignore node".to_string());
            commands.push("git init".to_string());
            commands.push("git add --all".to_string());
            commands.push("git commit -m \"initial commit\"".to_string());
            commands.push(format!("git remote add origin {url}.git"));
        }

        ScaffoldPlan {
            project_dir: options.parent.join(&options.name),
            commands,
            files,
        }
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    fn install(&self, dir: &Path, packages: &[&str]) -> TspackResult<()> {
        let mut argv = vec!["npm", "install", "--save-dev"];
        argv.extend_from_slice(packages);
        self.runner.run(dir, &argv)?;
        Ok(())
    }

    fn pkg_set(&self, dir: &Path, assignment: &str) -> TspackResult<()> {
        self.runner.run(dir, &["npm", "pkg", "set", assignment])?;
        Ok(())
    }

    /// Git always goes last so the initial commit captures everything.
    fn configure_git(&self, dir: &Path, choice: &GitChoice) -> TspackResult<()> {
        let remote = match choice {
            GitChoice::Skip => return Ok(()),
            GitChoice::Remote(url) => url.trim().to_string(),
            GitChoice::Prompt => {
                let answer = self.prompter.prompt(
                    "Are you using git (Y/n)? ",
                    Some("y"),
                    &|a| match a.trim().to_ascii_lowercase().as_str() {
                        "y" | "n" | "yes" | "no" => Ok(()),
                        _ => Err("Please enter y or n".into()),
                    },
                )?;
                if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                    return Ok(());
                }
                let url = self.prompter.prompt(
                    "What is the URL for your Git repo? ",
                    None,
                    &|a| {
                        if a.trim().is_empty() {
                            Err("Please enter the repository URL".into())
                        } else {
                            Ok(())
                        }
                    },
                )?;
                url.trim().to_string()
            }
        };

        info!("setting package repository");
        self.pkg_set(dir, "repository.type=git")?;
        self.pkg_set(dir, &format!("repository.url=git+{remote}.git"))?;

        info!("setting package bugs and homepage");
        self.pkg_set(dir, &format!("bugs.url={remote}/issues"))?;
        self.pkg_set(dir, &format!("homepage={remote}#readme"))?;

        info!("adding node gitignore");
        self.runner.run(dir, &["npx", "gitignore", "node"])?;

        info!("git init");
        self.runner.run(dir, &["git", "init"])?;

        info!("initial commit");
        self.runner.run(dir, &["git", "add", "--all"])?;
        self.runner
            .run(dir, &["git", "commit", "-m", "initial commit"])?;

        info!("adding git remote origin");
        let origin = format!("{remote}.git");
        self.runner
            .run(dir, &["git", "remote", "add", "origin", &origin])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CommandOutput, MockFilesystem};
    use crate::error::TspackError;

    struct NoPrompts;

    impl Prompter for NoPrompts {
        fn prompt(
            &self,
            _question: &str,
            _default: Option<&str>,
            _validate: &dyn Fn(&str) -> Result<(), String>,
        ) -> TspackResult<String> {
            panic!("prompt should not be reached in this test")
        }
    }

    // `CommandRunner` takes `&[&str]`, which mockall cannot automock, so the
    // runner doubles are written by hand like `NoPrompts`.
    struct NoCommands;

    impl CommandRunner for NoCommands {
        fn run(&self, _dir: &Path, argv: &[&str]) -> TspackResult<CommandOutput> {
            panic!("no command expected, got: {}", argv.join(" "))
        }
    }

    struct EveryCommandFails;

    impl CommandRunner for EveryCommandFails {
        fn run(&self, _dir: &Path, argv: &[&str]) -> TspackResult<CommandOutput> {
            Err(ApplicationError::CommandFailed {
                command: argv.join(" "),
                status: 1,
                stderr: "npm not found".into(),
            }
            .into())
        }
    }

    fn options(git: GitChoice) -> ScaffoldOptions {
        ScaffoldOptions {
            name: "demo-pkg".into(),
            parent: PathBuf::from("/tmp/work"),
            git,
        }
    }

    #[test]
    fn existing_directory_aborts_before_any_command() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);

        let service =
            ScaffoldService::new(Box::new(fs), Box::new(NoCommands), Box::new(NoPrompts));
        let err = service.scaffold(&options(GitChoice::Skip)).unwrap_err();

        assert!(matches!(
            err,
            TspackError::Application(ApplicationError::ProjectExists { ref path })
                if path.ends_with("demo-pkg")
        ));
    }

    #[test]
    fn failing_npm_init_stops_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));

        // The first command (`npm init`) fails, so nothing further runs.
        let service = ScaffoldService::new(
            Box::new(fs),
            Box::new(EveryCommandFails),
            Box::new(NoPrompts),
        );
        let err = service.scaffold(&options(GitChoice::Skip)).unwrap_err();

        assert!(matches!(
            err,
            TspackError::Application(ApplicationError::CommandFailed { ref command, .. })
                if command == "npm init --yes"
        ));
    }

    #[test]
    fn plan_lists_commands_and_files_without_side_effects() {
        let plan = ScaffoldService::plan(&options(GitChoice::Skip));

        assert_eq!(plan.project_dir, PathBuf::from("/tmp/work/demo-pkg"));
        assert!(plan.commands.iter().any(|c| c == "npx tsc --init"));
        assert!(
            plan.commands
                .iter()
                .any(|c| c == "npm install --save-dev typescript @types/node")
        );
        assert!(plan.files.iter().any(|f| f == "tsconfig.commonjs.json"));
        assert!(plan.files.iter().any(|f| f == ".mocharc.json"));
        assert!(!plan.commands.iter().any(|c| c.starts_with("git ")));
    }

    #[test]
    fn plan_with_remote_includes_git_commands() {
        let url = "https://github.com/demo/demo-pkg";
        let plan = ScaffoldService::plan(&options(GitChoice::Remote(url.into())));

        assert!(plan.commands.iter().any(|c| c == "git init"));
        assert!(
            plan.commands
                .iter()
                .any(|c| c == "npm pkg set repository.url=git+https://github.com/demo/demo-pkg.git")
        );
        assert!(
            plan.commands
                .iter()
                .any(|c| c == "git remote add origin https://github.com/demo/demo-pkg.git")
        );
    }

    #[test]
    fn scripts_chain_alias_rewriting_into_both_builds() {
        for script in SCRIPTS.iter().filter(|s| s.starts_with("scripts.build:")) {
            assert!(script.contains("tsc-alias -p"), "missing alias step: {script}");
        }
    }
}
