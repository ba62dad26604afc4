#[cfg(feature = "cli")]
pub mod cli;
pub mod loader;
pub mod serde_helpers;

#[cfg(feature = "cli")]
pub use cli::CliArgs;
pub use loader::{ConfigLoader, LocalDirectory};
