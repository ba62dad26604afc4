pub mod ports;
pub mod profiles;
pub mod services;

pub use ports::validate_ports;
pub use profiles::validate_profiles;
pub use services::validate_services;
