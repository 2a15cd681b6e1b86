//! Prompter adapters.

pub mod scripted;
pub mod stdin;

pub use scripted::ScriptedPrompter;
pub use stdin::StdinPrompter;
