//! # Pricer Forecast (L2: Analytics)
//!
//! Realised-volatility forecasting from daily closing prices.
//!
//! This crate provides:
//! - Price series and log returns (`series`)
//! - Annualised rolling volatility (`volatility`)
//! - Lagged-volatility datasets and chronological splits (`dataset`)
//! - The [`Regressor`] interface with a CART tree and a random forest
//!   (`tree`, `forest`)
//! - Mean squared error (`metrics`)
//! - The end-to-end pipeline (`forecaster`)
//!
//! ## Example
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use pricer_forecast::{PriceSeries, RandomForestRegressor, VolatilityForecaster};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let series = PriceSeries::from_pairs(
//!     (0..60).map(|i| (start + Duration::days(i), 100.0 + (i % 7) as f64)),
//! )
//! .unwrap();
//!
//! let report = VolatilityForecaster::default()
//!     .run(&series, &mut RandomForestRegressor::default())
//!     .unwrap();
//! assert_eq!(report.test_size, 8);
//! ```

#![deny(missing_docs)]

pub mod dataset;
pub mod error;
pub mod forecaster;
pub mod forest;
pub mod metrics;
pub mod regressor;
pub mod series;
pub mod tree;
pub mod volatility;

pub use dataset::{chronological_split, ChronologicalSplit, VolatilityDataset, VolatilityRow};
pub use error::ForecastError;
pub use forecaster::{ForecastConfig, ForecastPoint, ForecastReport, VolatilityForecaster};
pub use forest::{RandomForestConfig, RandomForestConfigBuilder, RandomForestRegressor};
pub use metrics::mean_squared_error;
pub use regressor::Regressor;
pub use series::{PricePoint, PriceSeries};
pub use tree::{RegressionTree, TreeParams};
pub use volatility::rolling_volatility;
