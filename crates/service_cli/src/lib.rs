//! # bsm: Black-Scholes pricing from the command line
//!
//! Service layer over the pricing and forecasting crates.
//!
//! # Commands
//!
//! - `bsm price` - Fair value of a call or a put
//! - `bsm greeks` - Delta, gamma, vega, theta and rho
//! - `bsm profile` - Price or one Greek along volatility, expiry or spot
//! - `bsm forecast --prices <file>` - Next-day realised volatility
//! - `bsm demo` - Reference contract walkthrough
//!
//! Configuration is merged from defaults, a TOML file (`--config`), `BSM_*`
//! environment variables and command-line flags, in increasing precedence.

pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
