use crate::utils::error::Result;
use std::path::PathBuf;

/// Where configuration text comes from.
pub trait ConfigSource {
    /// Reads the whole file named `file_name`.
    fn read_file(&self, file_name: &str) -> Result<String>;

    /// Path used in diagnostics for `file_name`.
    fn locate(&self, file_name: &str) -> PathBuf;
}
