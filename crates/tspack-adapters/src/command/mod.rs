//! Command-runner adapters.

pub mod process;
pub mod scripted;

pub use process::ProcessRunner;
pub use scripted::ScriptedRunner;
