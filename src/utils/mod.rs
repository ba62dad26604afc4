pub mod error;
pub mod logger;
pub mod reporter;
pub mod validation;
