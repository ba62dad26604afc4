use crate::utils::error::{ConfigError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.trim().is_empty() {
        return Err(ConfigError::InvalidArgument {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(ConfigError::InvalidArgument {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_directory(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, path)?;

    if path.exists() && !path.is_dir() {
        return Err(ConfigError::InvalidArgument {
            field: field_name.to_string(),
            reason: format!("{} is not a directory", path.display()),
        });
    }

    Ok(())
}
