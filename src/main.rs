use anyhow::Result;
use clap::Parser;
use log::info;

use claimcheck::cli;
use claimcheck::cli::{ClaimCheckCli, Commands};
use claimcheck::config::CheckerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = ClaimCheckCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Load configuration, falling back to the built-in defaults
    let mut config = match &cli.config {
        Some(path) => CheckerConfig::from_file(path)?,
        None => CheckerConfig::default(),
    };

    match &cli.command {
        Commands::Check {
            claim,
            file,
            endpoint,
            offline,
            strict,
            seed,
            no_delay,
        } => {
            if *offline {
                config.backend.endpoint = None;
            } else if let Some(endpoint) = endpoint {
                config.backend.endpoint = Some(endpoint.clone());
            }
            config.backend.strict = *strict;
            if seed.is_some() {
                config.seed = *seed;
            }
            if *no_delay {
                config.simulate_latency = false;
            }

            cli::commands::check::execute(
                &config,
                claim.as_deref(),
                file.as_deref(),
                &cli.output_format,
            )
            .await?;
        }

        Commands::Interactive { endpoint, offline } => {
            if *offline {
                config.backend.endpoint = None;
            } else if let Some(endpoint) = endpoint {
                config.backend.endpoint = Some(endpoint.clone());
            }

            cli::commands::interactive::execute(&config).await?;
        }

        Commands::Sources => {
            cli::commands::sources::execute(&config, &cli.output_format)?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
