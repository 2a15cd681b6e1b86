//! Application services (use-case orchestrators).

pub mod scaffold_service;

pub use scaffold_service::{
    DEFAULT_PROJECT_NAME, GitChoice, ScaffoldOptions, ScaffoldPlan, ScaffoldService,
};
