//! bsm CLI - Black-Scholes pricing, Greeks and volatility forecasting
//!
//! Operational entry point: parses arguments, builds the configuration,
//! initialises tracing and dispatches to a command.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use service_cli::commands::{self, forecast, greeks, price, profile};
use service_cli::config::{build_config, process_env, CliArgs, LogLevel};
use service_cli::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Black-Scholes option pricing CLI
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call or put
    Price(price::PriceArgs),

    /// Compute analytical Greeks
    Greeks(greeks::GreeksArgs),

    /// Sample the price or a Greek along one input
    Profile(profile::ProfileArgs),

    /// Forecast realised volatility from a price file
    Forecast(forecast::ForecastArgs),

    /// Price the reference contract
    Demo,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let config = build_config(&CliArgs::from(cli), process_env)?;
    init_tracing(config.log_level);
    tracing::debug!(
        log_level = %config.log_level,
        format = %config.format,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Price(args) => price::run(args, &config),
        Commands::Greeks(args) => greeks::run(args, &config),
        Commands::Profile(args) => profile::run(args, &config),
        Commands::Forecast(args) => forecast::run(args, &config),
        Commands::Demo => commands::demo::run(&config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
