use crate::config::loader::ConfigLoader;
use crate::domain::ports::ConfigSource;
use crate::utils::error::Result;
use crate::utils::reporter::Reporter;
use crate::validators::{validate_ports, validate_profiles, validate_services};
use std::io::Write;

/// Outcome of one full validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub services: bool,
    pub profiles: bool,
    pub ports: bool,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.services && self.profiles && self.ports
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Runs the service, profile and port checks in that order. A failing check
/// does not stop the later ones; load errors do.
pub struct Orchestrator<S: ConfigSource> {
    loader: ConfigLoader<S>,
}

impl<S: ConfigSource> Orchestrator<S> {
    pub fn new(loader: ConfigLoader<S>) -> Self {
        Self { loader }
    }

    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<RunSummary> {
        tracing::info!("Validating configuration files");

        let services = {
            let doc = self.loader.services()?;
            validate_services(&doc, reporter)?
        };
        tracing::debug!("Service check passed: {}", services);

        // Profiles get their own copy of the service names.
        let profiles = {
            let profile_doc = self.loader.profiles()?;
            let service_doc = self.loader.services()?;
            validate_profiles(&profile_doc, &service_doc, reporter)?
        };
        tracing::debug!("Profile check passed: {}", profiles);

        let ports = {
            let doc = self.loader.ports()?;
            validate_ports(&doc, reporter)?
        };
        tracing::debug!("Port check passed: {}", ports);

        let summary = RunSummary {
            services,
            profiles,
            ports,
        };
        reporter.banner(summary.all_passed())?;

        if summary.all_passed() {
            tracing::info!("All configuration checks passed");
        } else {
            tracing::warn!(
                "Configuration checks failed (services: {}, profiles: {}, ports: {})",
                services,
                profiles,
                ports
            );
        }

        Ok(summary)
    }
}
