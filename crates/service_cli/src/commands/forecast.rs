//! Forecast command implementation
//!
//! Fits a random forest to lagged realised volatility from a price file and
//! forecasts the next value.

use std::path::PathBuf;

use clap::Args;
use pricer_forecast::{
    ForecastConfig, ForecastReport, RandomForestConfig, RandomForestRegressor, VolatilityForecaster,
};
use tracing::info;

use crate::config::CliConfig;
use crate::data::load_price_series;
use crate::output::{num, render, Table};
use crate::Result;

/// Arguments of `bsm forecast`
#[derive(Args, Debug, Clone)]
pub struct ForecastArgs {
    /// CSV file with Date and Close columns
    #[arg(short, long)]
    pub prices: PathBuf,

    /// Rolling window in returns
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Share of rows held out for evaluation, in (0, 1)
    #[arg(long)]
    pub test_fraction: Option<f64>,

    /// Number of trees
    #[arg(long)]
    pub trees: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum tree depth (unlimited if omitted)
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Run the forecast command
pub fn run(args: &ForecastArgs, config: &CliConfig) -> Result<String> {
    let defaults = &config.forecast;
    let series = load_price_series(&args.prices)?;
    info!(path = %args.prices.display(), observations = series.len(), "Loaded prices");

    let mut builder = RandomForestConfig::builder()
        .n_estimators(args.trees.unwrap_or(defaults.trees))
        .seed(args.seed.unwrap_or(defaults.seed));
    if let Some(depth) = args.max_depth {
        builder = builder.max_depth(depth);
    }
    let mut forest = RandomForestRegressor::new(builder.build()?);

    let forecaster = VolatilityForecaster::new(ForecastConfig {
        window: args.window.unwrap_or(defaults.window),
        periods_per_year: defaults.periods_per_year,
        test_fraction: args.test_fraction.unwrap_or(defaults.test_fraction),
    });
    let report = forecaster.run(&series, &mut forest)?;

    render(config.format, &report_table(&report), &report)
}

fn report_table(report: &ForecastReport) -> Table {
    let mut table = Table::new(["Date", "Actual", "Predicted"]);
    for point in &report.test_points {
        table.push_row([point.date.to_string(), num(point.actual), num(point.predicted)]);
    }
    table.push_row(["MSE".to_string(), String::new(), num(report.mse)]);
    table.push_row([
        "Next".to_string(),
        num(report.latest_volatility),
        num(report.next_volatility),
    ]);
    table
}
