use crate::domain::model::PortDocument;
use crate::utils::error::{Result, ValidationFailure};
use crate::utils::reporter::Reporter;
use std::io::Write;

pub const MIN_PORT: i64 = 1;
pub const MAX_PORT: i64 = 65535;

/// Prints the port summary and checks every defined port number.
///
/// `portRange` and `checkPorts` are only printed, never range-checked.
pub fn validate_ports<W: Write>(doc: &PortDocument, reporter: &mut Reporter<W>) -> Result<bool> {
    reporter.section("Port range validation")?;
    reporter.pass(&format!(
        "Port range: {}-{}",
        doc.port_range.start, doc.port_range.end
    ))?;
    reporter.pass(&format!("Defined ports: {} ports", doc.distinct_port_count()))?;
    let check_ports: Vec<String> = doc.check_ports.iter().map(|p| p.to_string()).collect();
    reporter.pass(&format!("Check ports: {}", check_ports.join(", ")))?;

    if let Err(failure) = check_port_numbers(doc) {
        reporter.fail(&failure.to_string())?;
        return Ok(false);
    }
    reporter.pass("All port numbers are valid")?;

    Ok(true)
}

pub fn check_port_numbers(doc: &PortDocument) -> std::result::Result<(), ValidationFailure> {
    match doc
        .ports
        .iter()
        .map(|(port, _)| port)
        .find(|port| !port.is_within(MIN_PORT, MAX_PORT))
    {
        Some(port) => Err(ValidationFailure::InvalidPort {
            port: port.to_string(),
        }),
        None => Ok(()),
    }
}
