use crate::utils::error::Result;
use crate::utils::validation::{validate_directory, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dev-config-check")]
#[command(about = "Validate services.json, profiles.json and ports.json for consistency")]
pub struct CliArgs {
    /// Directory containing services.json, profiles.json and ports.json
    #[arg(long, default_value = "config")]
    pub config_dir: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        validate_directory("config_dir", &self.config_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["dev-config-check"]).unwrap();
        assert_eq!(args.config_dir, PathBuf::from("config"));
        assert!(!args.verbose);
        assert!(!args.log_json);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_config_dir_override() {
        let args =
            CliArgs::try_parse_from(["dev-config-check", "--config-dir", "scripts/dev/config", "-v"])
                .unwrap();
        assert_eq!(args.config_dir, PathBuf::from("scripts/dev/config"));
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(CliArgs::try_parse_from(["dev-config-check", "--fix"]).is_err());
    }
}
