//! Scripted command runner for testing.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tspack_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    error::TspackResult,
};

use crate::filesystem::MemoryFilesystem;

/// Test double that records every command instead of running it.
///
/// `npx tsc --init` is special-cased: it writes the configured template to
/// `tsconfig.json` in the working directory, mirroring what the real tool
/// does. A command line starting with `fail_on` fails with status 1.
#[derive(Clone)]
pub struct ScriptedRunner {
    filesystem: MemoryFilesystem,
    template: &'static str,
    fail_on: Option<String>,
    log: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(filesystem: MemoryFilesystem, template: &'static str) -> Self {
        Self {
            filesystem,
            template,
            fail_on: None,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make any command line starting with `prefix` fail.
    pub fn fail_on(mut self, prefix: impl Into<String>) -> Self {
        self.fail_on = Some(prefix.into());
        self
    }

    /// Every command line run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, dir: &Path, argv: &[&str]) -> TspackResult<CommandOutput> {
        let command = argv.join(" ");
        self.log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(command.clone());

        if let Some(prefix) = &self.fail_on {
            if command.starts_with(prefix.as_str()) {
                return Err(ApplicationError::CommandFailed {
                    command,
                    status: 1,
                    stderr: "scripted failure".into(),
                }
                .into());
            }
        }

        if command == "npx tsc --init" {
            use tspack_core::application::ports::Filesystem;
            self.filesystem
                .write_file(&dir.join("tsconfig.json"), self.template)?;
        }

        Ok(CommandOutput::default())
    }
}
