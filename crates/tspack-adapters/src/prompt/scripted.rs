//! Scripted prompter for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use tspack_core::{
    application::{ApplicationError, ports::Prompter},
    error::TspackResult,
};

/// Test double that serves canned answers in order.
///
/// Mirrors the terminal behavior: an empty answer resolves to the default,
/// and a rejected answer consumes the next one in the queue. Running out of
/// answers is a `PromptFailed`, the same as stdin closing.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(
        &self,
        question: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> TspackResult<String> {
        loop {
            let next = self
                .answers
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pop_front();
            let Some(mut answer) = next else {
                return Err(ApplicationError::PromptFailed {
                    reason: format!("no scripted answer left for: {question}"),
                }
                .into());
            };

            if answer.trim().is_empty() {
                if let Some(default) = default {
                    answer = default.to_string();
                }
            }

            if validate(&answer).is_ok() {
                return Ok(answer);
            }
        }
    }
}
