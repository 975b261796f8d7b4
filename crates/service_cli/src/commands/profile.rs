//! Profile command implementation
//!
//! Samples the price or one Greek along volatility, expiry or spot with the
//! other inputs held at the contract values.

use clap::Args;
use pricer_core::types::OptionType;
use pricer_models::profile::{profile, ProfileAxis, ProfileMetric, DEFAULT_POINTS};
use tracing::info;

use super::ContractArgs;
use crate::config::CliConfig;
use crate::output::{num, render, Table};
use crate::Result;

/// Arguments of `bsm profile`
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Quantity to sample (price, delta, gamma, vega, theta, rho)
    #[arg(short, long, default_value = "delta")]
    pub greek: String,

    /// Input to vary (vol, expiry, spot)
    #[arg(short, long, default_value = "vol")]
    pub axis: String,

    /// Start of the range (defaults per axis)
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<f64>,

    /// End of the range (defaults per axis)
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<f64>,

    /// Number of grid points
    #[arg(short = 'n', long, default_value_t = DEFAULT_POINTS)]
    pub points: usize,

    /// Option type (call, put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: String,
}

/// Run the profile command
pub fn run(args: &ProfileArgs, config: &CliConfig) -> Result<String> {
    let metric: ProfileMetric = args.greek.parse()?;
    let axis: ProfileAxis = args.axis.parse()?;
    let option_type: OptionType = args.option_type.parse()?;
    let base = args.contract.resolve(&config.contract)?;

    let (default_from, default_to) = axis.default_range();
    let range = (args.from.unwrap_or(default_from), args.to.unwrap_or(default_to));

    let curve = profile(&base, axis, metric, option_type, range, args.points)?;
    info!(
        metric = %metric,
        axis = %axis,
        option_type = %option_type,
        points = curve.points.len(),
        "Built profile"
    );

    let mut table = Table::new([axis.to_string(), metric.to_string()]);
    for point in &curve.points {
        table.push_row([num(point.x), num(point.y)]);
    }

    render(config.format, &table, &curve)
}
