pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod validators;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use config::{ConfigLoader, LocalDirectory};
pub use core::{Orchestrator, RunSummary};
pub use utils::error::{ConfigError, Result, ValidationFailure};
pub use utils::reporter::Reporter;
