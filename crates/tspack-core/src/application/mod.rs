//! Application layer: orchestration of the scaffolding use case.
//!
//! Services drive the domain logic and talk to the outside world only
//! through the ports defined here.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    DEFAULT_PROJECT_NAME, GitChoice, ScaffoldOptions, ScaffoldPlan, ScaffoldService,
};
