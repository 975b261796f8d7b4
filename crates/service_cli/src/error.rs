//! Error types for the bsm CLI.

use pricer_core::types::PricingError;
use pricer_forecast::ForecastError;
use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Option type, Greek name or numeric input rejected
    #[error("{0}")]
    Pricing(#[from] PricingError),

    /// Model input outside its domain
    #[error("Invalid input: {0}")]
    Analytical(#[from] AnalyticalError),

    /// Forecasting pipeline error
    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),

    /// Malformed price file
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// 2 for usage and input errors, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgument(_)
            | CliError::Config(_)
            | CliError::Pricing(_)
            | CliError::Analytical(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
