//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Domain errors raised before any formula is evaluated

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every variant describes an input for which the closed-form expressions
/// are undefined or singular (`ln`, division, `sqrt`). They are raised at
/// construction time so that no `NaN` or infinity can reach a caller.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive or not finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive or not finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive or not finite).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry in years
        expiry: f64,
    },

    /// Invalid volatility (non-positive or not finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid risk-free rate (not finite). Negative rates are valid.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Total standard deviation σ√T underflows to zero.
    #[error("Degenerate variance: σ√T = 0 for σ = {volatility}, T = {expiry}")]
    DegenerateVariance {
        /// Volatility input
        volatility: f64,
        /// Expiry input
        expiry: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },

    /// Invalid profile request (grid size, range or axis).
    #[error("Invalid profile: {message}")]
    InvalidProfile {
        /// Description of the problem
        message: String,
    },
}

impl AnalyticalError {
    /// True if the error maps to `PricingError::InvalidInput`.
    ///
    /// Every variant is raised while validating a contract or a profile
    /// request, before any value is handed to the caller, so each one is an
    /// input the formulas cannot evaluate.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            AnalyticalError::InvalidSpot { .. }
            | AnalyticalError::InvalidStrike { .. }
            | AnalyticalError::InvalidExpiry { .. }
            | AnalyticalError::InvalidVolatility { .. }
            | AnalyticalError::InvalidRate { .. }
            | AnalyticalError::DegenerateVariance { .. }
            | AnalyticalError::NumericalInstability { .. }
            | AnalyticalError::InvalidProfile { .. } => true,
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
