//! Demo command
//!
//! Prices the reference contract (S = 100, K = 100, T = 1, r = 0.02,
//! sigma = 0.25) and prints the call price, the put price and the call
//! Greeks.

use pricer_core::types::Greek;
use pricer_models::analytical::{BlackScholes, Greeks};
use serde::Serialize;
use tracing::info;

use super::ContractOutput;
use crate::config::{CliConfig, OutputFormat};
use crate::output::{num, render, Table};
use crate::Result;

/// Reference contract `(spot, strike, expiry, rate, volatility)`.
pub const REFERENCE_CONTRACT: (f64, f64, f64, f64, f64) = (100.0, 100.0, 1.0, 0.02, 0.25);

#[derive(Debug, Serialize)]
struct DemoOutput {
    contract: ContractOutput,
    call_price: f64,
    put_price: f64,
    call_greeks: Greeks,
}

/// Runs the demo.
pub fn run(config: &CliConfig) -> Result<String> {
    let (spot, strike, expiry, rate, volatility) = REFERENCE_CONTRACT;
    let model = BlackScholes::new(spot, strike, expiry, rate, volatility)?;
    let output = DemoOutput {
        contract: ContractOutput::from(&model),
        call_price: model.price_call(),
        put_price: model.price_put(),
        call_greeks: model.greeks().call,
    };
    info!(call_price = output.call_price, "Demo contract priced");

    let mut table = Table::new(["Quantity", "Value"]);
    table.push_row(["call price".to_string(), num(output.call_price)]);
    table.push_row(["put price".to_string(), num(output.put_price)]);
    for greek in Greek::ALL {
        table.push_row([format!("call {}", greek), num(output.call_greeks.get(greek))]);
    }

    let body = render(config.format, &table, &output)?;
    if config.format == OutputFormat::Table {
        Ok(format!(
            "Black-Scholes reference contract: S = {}, K = {}, T = {}, r = {}, sigma = {}\n{}",
            spot, strike, expiry, rate, volatility, body
        ))
    } else {
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_table() {
        let out = run(&CliConfig::default()).unwrap();
        assert!(out.starts_with("Black-Scholes reference contract"));
        assert!(out.contains("call price"));
        assert!(out.contains("10.870558"));
        assert!(out.contains("8.890426"));
        assert!(out.contains("-5.828104"));
    }

    #[test]
    fn test_demo_json() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::from_str(&run(&config).unwrap()).unwrap();
        assert!((value["call_greeks"]["rho"].as_f64().unwrap() - 47.25083525818723).abs() < 1e-9);
        assert_eq!(value["contract"]["volatility"], 0.25);
    }
}
