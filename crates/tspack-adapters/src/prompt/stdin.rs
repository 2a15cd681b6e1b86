//! Terminal prompter reading answers from standard input.

use std::io::{BufRead, Write};

use tspack_core::{
    application::{ApplicationError, ports::Prompter},
    error::TspackResult,
};

/// Production prompter. Prints the question to stdout and reads one line
/// per attempt from stdin, re-asking until the answer validates.
#[derive(Debug, Clone, Copy)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> TspackResult<String> {
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ApplicationError::PromptFailed {
                reason: e.to_string(),
            })?;
        if read == 0 {
            return Err(ApplicationError::PromptFailed {
                reason: "end of input".into(),
            }
            .into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for StdinPrompter {
    fn prompt(
        &self,
        question: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> TspackResult<String> {
        loop {
            print!("{question}");
            std::io::stdout()
                .flush()
                .map_err(|e| ApplicationError::PromptFailed {
                    reason: e.to_string(),
                })?;

            let mut answer = self.read_line()?;
            if answer.trim().is_empty() {
                if let Some(default) = default {
                    answer = default.to_string();
                }
            }

            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(message) => println!("{message}"),
            }
        }
    }
}
