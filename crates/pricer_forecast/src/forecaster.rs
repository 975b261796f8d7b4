//! Next-day realised-volatility forecasting pipeline.
//!
//! price series → log returns → rolling volatility → lagged dataset →
//! chronological split → fit → evaluate on the test block → one-step-ahead
//! forecast from the latest realised volatility.

use chrono::NaiveDate;

use crate::dataset::{chronological_split, VolatilityDataset};
use crate::error::ForecastError;
use crate::metrics::mean_squared_error;
use crate::regressor::Regressor;
use crate::series::PriceSeries;
use crate::volatility::{DEFAULT_WINDOW, TRADING_DAYS_PER_YEAR};

/// Default share of rows held out for evaluation.
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Pipeline parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastConfig {
    /// Rolling window in returns.
    pub window: usize,
    /// Annualisation factor.
    pub periods_per_year: f64,
    /// Share of rows in the test block, in (0, 1).
    pub test_fraction: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            periods_per_year: TRADING_DAYS_PER_YEAR,
            test_fraction: DEFAULT_TEST_FRACTION,
        }
    }
}

impl ForecastConfig {
    /// Smallest series length that yields one train and one test row.
    #[inline]
    pub fn min_observations(&self) -> usize {
        self.window + 3
    }
}

/// Realised vs. predicted volatility on one test date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastPoint {
    /// Date of the realised volatility.
    pub date: NaiveDate,
    /// Realised volatility.
    pub actual: f64,
    /// Model prediction.
    pub predicted: f64,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastReport {
    /// Mean squared error on the test block.
    pub mse: f64,
    /// Prediction for the observation after the last one.
    ///
    /// The model input is `latest_volatility`, the newest realised value.
    /// Feeding the last row's lagged feature (`prev_vol`) instead would
    /// re-forecast the last observed day rather than the next one.
    pub next_volatility: f64,
    /// Realised volatility of the last observation.
    pub latest_volatility: f64,
    /// Rows used for fitting.
    pub train_size: usize,
    /// Rows used for evaluation.
    pub test_size: usize,
    /// Test block in date order.
    pub test_points: Vec<ForecastPoint>,
}

/// Runs the forecasting pipeline with any [`Regressor`].
///
/// # Examples
/// ```
/// use chrono::{Duration, NaiveDate};
/// use pricer_forecast::{PriceSeries, RandomForestConfig, RandomForestRegressor, VolatilityForecaster};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let series = PriceSeries::from_pairs((0..120).map(|i| {
///     let close = 100.0 * (1.0 + 0.02 * (i as f64 * 0.9).sin());
///     (start + Duration::days(i), close)
/// }))
/// .unwrap();
///
/// let mut forest = RandomForestRegressor::new(
///     RandomForestConfig::builder().n_estimators(10).build().unwrap(),
/// );
/// let report = VolatilityForecaster::default().run(&series, &mut forest).unwrap();
///
/// assert_eq!(report.train_size + report.test_size, 120 - 20 - 1);
/// assert!(report.mse >= 0.0);
/// assert!(report.next_volatility > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VolatilityForecaster {
    config: ForecastConfig,
}

impl VolatilityForecaster {
    /// Creates a forecaster.
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Pipeline parameters.
    #[inline]
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Builds the dataset, fits `regressor` on the leading rows, scores it on
    /// the trailing rows and forecasts the next realised volatility.
    ///
    /// # Errors
    /// - `ForecastError::InsufficientData` if the series is too short for one
    ///   train and one test row
    /// - Parameter and model errors from the individual stages
    pub fn run<R>(&self, series: &PriceSeries, regressor: &mut R) -> Result<ForecastReport, ForecastError>
    where
        R: Regressor + ?Sized,
    {
        let dataset =
            VolatilityDataset::from_series(series, self.config.window, self.config.periods_per_year)?;
        if dataset.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: self.config.min_observations(),
                actual: series.len(),
            });
        }

        let split = chronological_split(dataset.len(), self.config.test_fraction)?;
        tracing::debug!(
            rows = dataset.len(),
            train = split.train.len(),
            test = split.test.len(),
            "Built volatility dataset"
        );

        regressor.fit(&dataset.features(split.train.clone()), &dataset.targets(split.train.clone()))?;

        let actual = dataset.targets(split.test.clone());
        let predicted = regressor.predict(&dataset.features(split.test.clone()))?;
        let mse = mean_squared_error(&actual, &predicted)?;

        let latest_volatility = dataset.latest_volatility().ok_or(ForecastError::InsufficientData {
            required: self.config.min_observations(),
            actual: series.len(),
        })?;
        let next_volatility = regressor.predict_one(&[latest_volatility])?;

        let test_points = dataset.rows()[split.test.clone()]
            .iter()
            .zip(&predicted)
            .map(|(row, &predicted)| ForecastPoint {
                date: row.date,
                actual: row.vol,
                predicted,
            })
            .collect();

        tracing::info!(
            mse,
            latest_volatility,
            next_volatility,
            "Volatility forecast complete"
        );

        Ok(ForecastReport {
            mse,
            next_volatility,
            latest_volatility,
            train_size: split.train.len(),
            test_size: split.test.len(),
            test_points,
        })
    }
}
