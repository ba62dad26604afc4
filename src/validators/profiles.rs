use crate::domain::model::{ProfileDocument, ServiceDocument};
use crate::utils::error::{Result, ValidationFailure};
use crate::utils::reporter::Reporter;
use std::collections::HashSet;
use std::io::Write;

/// Lists the profile names, then checks that every service a profile selects
/// exists in `services`. Only the service names are used.
pub fn validate_profiles<W: Write>(
    profiles: &ProfileDocument,
    services: &ServiceDocument,
    reporter: &mut Reporter<W>,
) -> Result<bool> {
    reporter.section("Profile names validation")?;
    reporter.pass(&format!("Profile names: {}", profiles.names().join(", ")))?;

    reporter.section("Profile service validation")?;
    if let Err(failure) = check_profile_services(profiles, services) {
        reporter.fail(&failure.to_string())?;
        return Ok(false);
    }
    reporter.pass("All profile services are valid")?;

    Ok(true)
}

pub fn check_profile_services(
    profiles: &ProfileDocument,
    services: &ServiceDocument,
) -> std::result::Result<(), ValidationFailure> {
    let known: HashSet<&str> = services.names().into_iter().collect();

    for (name, profile) in &profiles.profiles {
        tracing::debug!("Profile '{}' selects {} services", name, profile.services.len());
        if let Some(unknown) = profile.services.iter().find(|s| !known.contains(s.as_str())) {
            return Err(ValidationFailure::UnknownProfileService {
                profile: name.clone(),
                service: unknown.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn services() -> ServiceDocument {
        serde_json::from_value(json!({
            "services": {"postgres": {}, "api": {"dependencies": ["postgres"]}, "web": {}}
        }))
        .unwrap()
    }

    fn profiles(raw: &str) -> ProfileDocument {
        serde_json::from_str(&format!(r#"{{"profiles": {}}}"#, raw)).unwrap()
    }

    #[test]
    fn test_valid_profiles() {
        let profiles = profiles(
            r#"{
                "full": {"services": ["postgres", "api", "web"]},
                "backend": {"services": ["postgres", "api"]}
            }"#,
        );

        let mut reporter = Reporter::new(Vec::new());
        assert!(validate_profiles(&profiles, &services(), &mut reporter).unwrap());

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("✓ Profile names: full, backend"));
        assert!(output.contains("✓ All profile services are valid"));
    }

    #[test]
    fn test_unknown_profile_service() {
        let profiles = profiles(
            r#"{
                "frontend": {"services": ["web"]},
                "workers": {"services": ["api", "queue", "mailer"]}
            }"#,
        );

        let mut reporter = Reporter::new(Vec::new());
        assert!(!validate_profiles(&profiles, &services(), &mut reporter).unwrap());

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("✓ Profile names: frontend, workers"));
        assert!(output.contains("✗ Profile 'workers' references unknown service 'queue'"));
        assert!(!output.contains("mailer"));
    }

    #[test]
    fn test_empty_profile_is_valid() {
        let profiles = profiles(r#"{"none": {"services": []}}"#);
        assert_eq!(check_profile_services(&profiles, &ServiceDocument::default()), Ok(()));
    }
}
