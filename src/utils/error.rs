use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors: the configuration could not be read or decoded, or the
/// report could not be written. These abort the run.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl ConfigError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => {
                "Check that the config directory exists and contains services.json, profiles.json and ports.json"
            }
            ConfigError::Parse { .. } => {
                "Fix the JSON syntax or the missing/mistyped field reported above"
            }
            ConfigError::Report(_) => "Make sure standard output is writable",
            ConfigError::InvalidArgument { .. } => "Pass a valid path with --config-dir",
        }
    }
}

/// Non-fatal findings. Each one becomes a ✗ line in the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Duplicate service names found")]
    DuplicateServiceNames,

    #[error("Service '{service}' depends on unknown service '{dependency}'")]
    UnknownDependency { service: String, dependency: String },

    #[error("Profile '{profile}' references unknown service '{service}'")]
    UnknownProfileService { profile: String, service: String },

    #[error("Invalid port number: {port}")]
    InvalidPort { port: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
