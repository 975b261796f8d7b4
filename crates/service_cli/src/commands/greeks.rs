//! Greeks command implementation
//!
//! Prints the five sensitivities of the call, the put or both.

use std::str::FromStr;

use clap::Args;
use pricer_core::types::{Greek, OptionType};
use pricer_models::analytical::Greeks;
use serde::Serialize;
use tracing::info;

use super::{ContractArgs, ContractOutput};
use crate::config::CliConfig;
use crate::output::{num, render, Table};
use crate::Result;

/// Calendar days used for per-day theta.
const CALENDAR_DAYS: f64 = 365.0;

/// Which option types to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreeksSelection {
    /// One option type
    Single(OptionType),
    /// Call and put side by side
    Both,
}

impl FromStr for GreeksSelection {
    type Err = pricer_core::types::PricingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("both") {
            return Ok(GreeksSelection::Both);
        }
        s.parse().map(GreeksSelection::Single)
    }
}

impl GreeksSelection {
    fn option_types(&self) -> Vec<OptionType> {
        match self {
            GreeksSelection::Single(option_type) => vec![*option_type],
            GreeksSelection::Both => OptionType::ALL.to_vec(),
        }
    }
}

/// Arguments of `bsm greeks`
#[derive(Args, Debug, Clone)]
pub struct GreeksArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Option type (call, put, both)
    #[arg(long = "type", default_value = "both")]
    pub option_type: String,

    /// Quote vega per vol point, theta per calendar day and rho per basis point
    #[arg(long)]
    pub market_units: bool,
}

#[derive(Debug, Serialize)]
struct GreeksEntry {
    option_type: OptionType,
    greeks: Greeks,
}

#[derive(Debug, Serialize)]
struct GreeksOutput {
    contract: ContractOutput,
    market_units: bool,
    results: Vec<GreeksEntry>,
}

fn to_market_units(greeks: &Greeks) -> Greeks {
    Greeks {
        vega: greeks.vega_per_vol_point(),
        theta: greeks.theta_per_day(CALENDAR_DAYS),
        rho: greeks.rho_per_basis_point(),
        ..*greeks
    }
}

/// Run the greeks command
pub fn run(args: &GreeksArgs, config: &CliConfig) -> Result<String> {
    let selection: GreeksSelection = args.option_type.parse()?;
    let model = args.contract.resolve(&config.contract)?;
    let pair = model.greeks();

    let results: Vec<GreeksEntry> = selection
        .option_types()
        .into_iter()
        .map(|option_type| {
            let greeks = pair.for_type(option_type);
            GreeksEntry {
                option_type,
                greeks: if args.market_units {
                    to_market_units(greeks)
                } else {
                    *greeks
                },
            }
        })
        .collect();

    info!(
        spot = model.spot(),
        strike = model.strike(),
        count = results.len(),
        "Computed Greeks"
    );

    let mut headers = vec!["Greek".to_string()];
    headers.extend(results.iter().map(|e| capitalise(e.option_type.as_str())));
    let mut table = Table::new(headers);
    for greek in Greek::ALL {
        let mut row = vec![greek.to_string()];
        row.extend(results.iter().map(|e| num(e.greeks.get(greek))));
        table.push_row(row);
    }

    render(
        config.format,
        &table,
        &GreeksOutput {
            contract: ContractOutput::from(&model),
            market_units: args.market_units,
            results,
        },
    )
}

fn capitalise(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn args(option_type: &str, market_units: bool) -> GreeksArgs {
        GreeksArgs {
            contract: ContractArgs::default(),
            option_type: option_type.to_string(),
            market_units,
        }
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("both".parse::<GreeksSelection>().unwrap(), GreeksSelection::Both);
        assert_eq!(
            "p".parse::<GreeksSelection>().unwrap(),
            GreeksSelection::Single(OptionType::Put)
        );
        assert!("strangle".parse::<GreeksSelection>().is_err());
    }

    #[test]
    fn test_table_has_both_columns() {
        let out = run(&args("both", false), &CliConfig::default()).unwrap();
        assert!(out.contains("Call"));
        assert!(out.contains("Put"));
        assert!(out.contains("0.581214"));
        assert!(out.contains("-0.418786"));
        assert!(out.contains("39.064696"));
    }

    #[test]
    fn test_csv_single_type() {
        let config = CliConfig {
            format: OutputFormat::Csv,
            ..Default::default()
        };
        let out = run(&args("call", false), &config).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Greek,Call");
        assert_eq!(lines[1], "delta,0.581214");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_market_units_json() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let out = run(&args("call", true), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let greeks = &value["results"][0]["greeks"];
        assert!((greeks["vega"].as_f64().unwrap() - 0.3906469636201053).abs() < 1e-12);
        assert!((greeks["theta"].as_f64().unwrap() - (-5.828103750415061 / 365.0)).abs() < 1e-12);
        assert!((greeks["delta"].as_f64().unwrap() - 0.5812139374874482).abs() < 1e-12);
    }

    #[test]
    fn test_capitalise() {
        assert_eq!(capitalise("call"), "Call");
        assert_eq!(capitalise(""), "");
    }
}
