pub mod orchestrator;

pub use crate::domain::model::{PortDocument, ProfileDocument, ServiceDocument};
pub use crate::domain::ports::ConfigSource;
pub use crate::utils::error::Result;
pub use orchestrator::{Orchestrator, RunSummary};
