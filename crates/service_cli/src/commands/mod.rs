//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns its rendered
//! output; `main` prints it.

pub mod demo;
pub mod forecast;
pub mod greeks;
pub mod price;
pub mod profile;

use clap::Args;
use pricer_models::analytical::BlackScholes;

use crate::config::ContractDefaults;
use crate::Result;

/// Contract inputs shared by `price`, `greeks` and `profile`.
///
/// Omitted flags fall back to the configured contract defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ContractArgs {
    /// Spot price (S)
    #[arg(short = 's', long)]
    pub spot: Option<f64>,

    /// Strike price (K)
    #[arg(short = 'k', long)]
    pub strike: Option<f64>,

    /// Time to expiry in years (T)
    #[arg(short = 't', long)]
    pub expiry: Option<f64>,

    /// Risk-free rate (r), e.g. 0.02
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Volatility (sigma), e.g. 0.25
    #[arg(long = "vol")]
    pub volatility: Option<f64>,
}

impl ContractArgs {
    /// Builds the validated contract, filling gaps from `defaults`.
    pub fn resolve(&self, defaults: &ContractDefaults) -> Result<BlackScholes> {
        Ok(BlackScholes::new(
            self.spot.unwrap_or(defaults.spot),
            self.strike.unwrap_or(defaults.strike),
            self.expiry.unwrap_or(defaults.expiry),
            self.rate.unwrap_or(defaults.rate),
            self.volatility.unwrap_or(defaults.volatility),
        )?)
    }
}

/// Contract inputs echoed in JSON output.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ContractOutput {
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

impl From<&BlackScholes> for ContractOutput {
    fn from(model: &BlackScholes) -> Self {
        Self {
            spot: model.spot(),
            strike: model.strike(),
            expiry: model.expiry(),
            rate: model.rate(),
            volatility: model.volatility(),
        }
    }
}
