//! Price command implementation
//!
//! Prices one European option with the Black-Scholes engine.

use clap::Args;
use pricer_core::types::OptionType;
use serde::Serialize;
use tracing::info;

use super::{ContractArgs, ContractOutput};
use crate::config::CliConfig;
use crate::output::{num, render, Table};
use crate::Result;

/// Arguments of `bsm price`
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Option type (call, put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: String,
}

#[derive(Debug, Serialize)]
struct PriceOutput {
    option_type: OptionType,
    price: f64,
    contract: ContractOutput,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<String> {
    let option_type: OptionType = args.option_type.parse()?;
    let model = args.contract.resolve(&config.contract)?;
    let price = model.price(option_type);

    info!(
        option_type = %option_type,
        spot = model.spot(),
        strike = model.strike(),
        price,
        "Priced option"
    );

    let mut table = Table::new(["Option", "Price"]);
    table.push_row([option_type.to_string(), num(price)]);

    render(
        config.format,
        &table,
        &PriceOutput {
            option_type,
            price,
            contract: ContractOutput::from(&model),
        },
    )
}
