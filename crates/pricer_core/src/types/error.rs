//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by pricing operations to their callers

use std::fmt;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: A model input is outside its domain (non-positive spot,
///   strike, expiry or volatility, non-finite values, vanishing variance)
/// - `InvalidOptionType`: An option type label is neither call nor put
/// - `UnknownGreek`: A sensitivity name is not one of the supported Greeks
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Option type outside {call, put}
    InvalidOptionType(String),

    /// Sensitivity name outside {delta, gamma, vega, theta, rho}
    UnknownGreek(String),
}

impl PricingError {
    /// Returns true for domain errors on numeric inputs.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::InvalidOptionType(label) => {
                write!(f, "Invalid option type: '{}' (expected call or put)", label)
            }
            PricingError::UnknownGreek(name) => write!(
                f,
                "Unknown Greek: '{}' (expected delta, gamma, vega, theta or rho)",
                name
            ),
        }
    }
}

impl std::error::Error for PricingError {}
