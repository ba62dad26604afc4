use crate::domain::model::ServiceDocument;
use crate::utils::error::{Result, ValidationFailure};
use crate::utils::reporter::Reporter;
use std::collections::HashSet;
use std::io::Write;

/// Checks that service names are unique and that every dependency names a
/// known service. Prints its findings and returns whether both checks passed.
pub fn validate_services<W: Write>(doc: &ServiceDocument, reporter: &mut Reporter<W>) -> Result<bool> {
    reporter.section("Service names uniqueness check")?;
    let names = doc.names();
    if let Err(failure) = check_unique_names(&names) {
        reporter.fail(&failure.to_string())?;
        return Ok(false);
    }
    reporter.pass(&format!("All {} service names are unique", names.len()))?;
    reporter.detail(&format!("Services: {}", names.join(", ")))?;

    reporter.section("Dependency validation")?;
    if let Err(failure) = check_dependencies(doc) {
        tracing::debug!("Dependency check failed: {}", failure);
        reporter.fail(&failure.to_string())?;
        return Ok(false);
    }
    reporter.pass("All dependencies are valid")?;

    Ok(true)
}

pub fn check_unique_names(names: &[&str]) -> std::result::Result<(), ValidationFailure> {
    let unique: HashSet<&str> = names.iter().copied().collect();
    if unique.len() != names.len() {
        return Err(ValidationFailure::DuplicateServiceNames);
    }
    Ok(())
}

/// Stops at the first dependency that is not a service name.
pub fn check_dependencies(doc: &ServiceDocument) -> std::result::Result<(), ValidationFailure> {
    let known: HashSet<&str> = doc.names().into_iter().collect();

    for (name, service) in &doc.services {
        for dependency in &service.dependencies {
            if !known.contains(dependency.as_str()) {
                return Err(ValidationFailure::UnknownDependency {
                    service: name.clone(),
                    dependency: dependency.clone(),
                });
            }
        }
    }

    Ok(())
}
