//! Error types for the forecasting pipeline.

use chrono::NaiveDate;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Forecasting errors.
///
/// # Examples
/// ```
/// use pricer_forecast::ForecastError;
///
/// let err = ForecastError::InsufficientData { required: 23, actual: 10 };
/// assert!(err.to_string().contains("23"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForecastError {
    /// Not enough observations for the requested computation.
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations
        required: usize,
        /// Number of observations supplied
        actual: usize,
    },

    /// Closing price that is not finite and positive.
    #[error("Invalid closing price {close} on {date}")]
    InvalidPrice {
        /// Observation date
        date: NaiveDate,
        /// Offending close
        close: f64,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },

    /// Inputs whose lengths or widths do not agree.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// `predict` called before `fit`.
    #[error("Model has not been fitted")]
    NotFitted,
}

impl From<ForecastError> for PricingError {
    fn from(err: ForecastError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
