use anyhow::Result;
use clap::Parser;
use log::info;
use std::io;
use test_registry_console::Session;
use test_registry_core::{CoreConfig, SystemClock};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Test Registry console")]
struct Args {
    /// Config file path
    #[clap(short, long, env = "REGISTRY_CONFIG")]
    config: Option<String>,

    /// Clear the form after a record is created
    #[clap(long, env = "REGISTRY_RESET_AFTER_CREATE")]
    reset_draft_after_create: Option<bool>,

    /// strftime format for record timestamps
    #[clap(long, env = "REGISTRY_TIMESTAMP_FORMAT")]
    timestamp_format: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, env = "REGISTRY_LOG_LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration
    let mut config = CoreConfig::new();

    if let Some(config_path) = &args.config {
        config = CoreConfig::from_file(config_path)?;
    }

    // Override config with command-line arguments
    if let Some(reset) = args.reset_draft_after_create {
        config.reset_draft_after_create = reset;
    }
    if let Some(format) = args.timestamp_format {
        config.timestamp_format = format;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    config.validate()?;

    // Initialize logging
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &config.log_level),
    );

    if let Some(config_path) = &args.config {
        info!("Loaded configuration from {}", config_path);
    }

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout(), SystemClock);
    session.run()?;

    Ok(())
}
