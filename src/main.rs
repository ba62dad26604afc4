use anyhow::Context;
use clap::Parser;
use dev_config_check::utils::logger::{self, LogFormat};
use dev_config_check::utils::validation::Validate;
use dev_config_check::{CliArgs, ConfigError, ConfigLoader, Orchestrator, Reporter, RunSummary};

/// Exit code for configuration that could not be read or decoded.
const EXIT_LOAD_FAILURE: i32 = 2;

fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_flag(args.log_json), args.verbose);

    tracing::info!("Starting dev-config-check");
    tracing::debug!("CLI args: {:?}", args);

    // 驗證參數
    if let Err(e) = args.validate() {
        tracing::error!("❌ Invalid arguments: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(EXIT_LOAD_FAILURE);
    }

    match run(&args) {
        Ok(summary) => std::process::exit(summary.exit_code()),
        Err(e) => {
            tracing::error!("❌ Configuration check aborted: {:#}", e);
            eprintln!("❌ {:#}", e);
            if let Some(config_error) = e.downcast_ref::<ConfigError>() {
                eprintln!("💡 Suggestion: {}", config_error.recovery_suggestion());
            }
            std::process::exit(EXIT_LOAD_FAILURE);
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<RunSummary> {
    let loader = ConfigLoader::from_dir(args.config_dir.clone());
    let mut reporter = Reporter::stdout();

    Orchestrator::new(loader)
        .run(&mut reporter)
        .with_context(|| format!("Checking {} aborted", args.config_dir.display()))
}
