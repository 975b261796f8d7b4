//! CLI configuration management
//!
//! Handles loading configuration from TOML files, `BSM_*` environment
//! variables and command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

/// Default contract used when a pricing flag is omitted
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContractDefaults {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub expiry: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub volatility: f64,
}

impl Default for ContractDefaults {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.02,
            volatility: 0.25,
        }
    }
}

/// Forecast pipeline defaults
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastDefaults {
    /// Rolling window in returns
    pub window: usize,
    /// Annualisation factor
    pub periods_per_year: f64,
    /// Share of rows in the test block
    pub test_fraction: f64,
    /// Number of trees
    pub trees: usize,
    /// Forest seed
    pub seed: u64,
}

impl Default for ForecastDefaults {
    fn default() -> Self {
        Self {
            window: 20,
            periods_per_year: 252.0,
            test_fraction: 0.2,
            trees: 100,
            seed: 42,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Contract defaults
    pub contract: ContractDefaults,
    /// Forecast defaults
    pub forecast: ForecastDefaults,
}

/// Environment variables read by [`CliConfig::apply_env`]
pub const ENV_VARS: [&str; 12] = [
    "BSM_LOG_LEVEL",
    "BSM_FORMAT",
    "BSM_SPOT",
    "BSM_STRIKE",
    "BSM_EXPIRY",
    "BSM_RATE",
    "BSM_VOL",
    "BSM_WINDOW",
    "BSM_PERIODS_PER_YEAR",
    "BSM_TEST_FRACTION",
    "BSM_TREES",
    "BSM_SEED",
];

fn parse_env<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
    })
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from environment variables.
    ///
    /// `lookup` returns the value of a variable, or `None` if unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in ENV_VARS {
            let Some(raw) = lookup(name) else {
                continue;
            };
            match name {
                "BSM_LOG_LEVEL" => self.log_level = LogLevel::from_str(&raw)?,
                "BSM_FORMAT" => self.format = OutputFormat::from_str(&raw)?,
                "BSM_SPOT" => self.contract.spot = parse_env(name, &raw)?,
                "BSM_STRIKE" => self.contract.strike = parse_env(name, &raw)?,
                "BSM_EXPIRY" => self.contract.expiry = parse_env(name, &raw)?,
                "BSM_RATE" => self.contract.rate = parse_env(name, &raw)?,
                "BSM_VOL" => self.contract.volatility = parse_env(name, &raw)?,
                "BSM_WINDOW" => self.forecast.window = parse_env(name, &raw)?,
                "BSM_PERIODS_PER_YEAR" => self.forecast.periods_per_year = parse_env(name, &raw)?,
                "BSM_TEST_FRACTION" => self.forecast.test_fraction = parse_env(name, &raw)?,
                "BSM_TREES" => self.forecast.trees = parse_env(name, &raw)?,
                "BSM_SEED" => self.forecast.seed = parse_env(name, &raw)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Contract defaults are checked by the pricing engine when used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.forecast;
        if f.window < 2 {
            return Err(ConfigError::InvalidValue {
                name: "forecast.window",
                value: f.window.to_string(),
            });
        }
        if !(f.periods_per_year.is_finite() && f.periods_per_year > 0.0) {
            return Err(ConfigError::InvalidValue {
                name: "forecast.periods_per_year",
                value: f.periods_per_year.to_string(),
            });
        }
        if !(f.test_fraction > 0.0 && f.test_fraction < 1.0) {
            return Err(ConfigError::InvalidValue {
                name: "forecast.test_fraction",
                value: f.test_fraction.to_string(),
            });
        }
        if f.trees == 0 {
            return Err(ConfigError::InvalidValue {
                name: "forecast.trees",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

/// Global CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Verbose flag (forces debug logging)
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config<F>(cli: &CliArgs, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(env)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

/// Reads a variable from the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.contract.spot, 100.0);
        assert_eq!(config.contract.volatility, 0.25);
        assert_eq!(config.forecast.window, 20);
        assert_eq!(config.forecast.trees, 100);
        assert_eq!(config.forecast.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "format = \"json\"\n\n[contract]\nspot = 120.0\n\n[forecast]\ntrees = 10"
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.contract.spot, 120.0);
        assert_eq!(config.contract.strike, 100.0);
        assert_eq!(config.forecast.trees, 10);
        assert_eq!(config.forecast.window, 20);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = CliConfig::from_file(Path::new("/nonexistent/bsm.toml"));
        assert!(matches!(missing, Err(ConfigError::FileError(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"loud\"").unwrap();
        assert!(matches!(
            CliConfig::from_file(file.path()),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_apply_env() {
        let mut config = CliConfig::default();
        config
            .apply_env(env_of(&[("BSM_SPOT", "95.5"), ("BSM_FORMAT", "csv"), ("BSM_SEED", "7")]))
            .unwrap();
        assert_eq!(config.contract.spot, 95.5);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.forecast.seed, 7);

        let err = config.apply_env(env_of(&[("BSM_VOL", "high")])).unwrap_err();
        assert!(err.to_string().contains("BSM_VOL"));
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"json\"\nlog_level = \"error\"\n[contract]\nrate = 0.05").unwrap();

        let file_only = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = build_config(&file_only, no_env).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.contract.rate, 0.05);

        let env = env_of(&[("BSM_FORMAT", "csv"), ("BSM_RATE", "0.01")]);
        let config = build_config(&file_only, &env).unwrap();
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.contract.rate, 0.01);
        assert_eq!(config.log_level, LogLevel::Error);

        let with_cli = CliArgs {
            format: Some("table".to_string()),
            verbose: true,
            ..file_only
        };
        let config = build_config(&with_cli, &env).unwrap();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.contract.rate, 0.01);
    }

    #[test]
    fn test_validate_rejects_bad_forecast_settings() {
        let mut config = CliConfig::default();
        config.forecast.test_fraction = 1.0;
        assert!(config.validate().is_err());

        let env = env_of(&[("BSM_WINDOW", "1")]);
        assert!(matches!(
            build_config(&CliArgs::default(), env),
            Err(ConfigError::InvalidValue {
                name: "forecast.window",
                ..
            })
        ));
    }
}
