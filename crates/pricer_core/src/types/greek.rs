//! Names of the Black-Scholes sensitivities.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// A first- or second-order option sensitivity.
///
/// | Greek | Definition |
/// |-------|------------|
/// | Delta | ∂V/∂S |
/// | Gamma | ∂²V/∂S² |
/// | Vega  | ∂V/∂σ |
/// | Theta | -∂V/∂T (time decay) |
/// | Rho   | ∂V/∂r |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Greek {
    /// Sensitivity to the spot price.
    Delta,
    /// Sensitivity of delta to the spot price.
    Gamma,
    /// Sensitivity to volatility, per unit of volatility.
    Vega,
    /// Time decay, per year.
    Theta,
    /// Sensitivity to the risk-free rate, per unit of rate.
    Rho,
}

impl Greek {
    /// All Greeks in display order.
    pub const ALL: [Greek; 5] = [Greek::Delta, Greek::Gamma, Greek::Vega, Greek::Theta, Greek::Rho];

    /// Lowercase name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Greek::Delta => "delta",
            Greek::Gamma => "gamma",
            Greek::Vega => "vega",
            Greek::Theta => "theta",
            Greek::Rho => "rho",
        }
    }
}

impl FromStr for Greek {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delta" => Ok(Greek::Delta),
            "gamma" => Ok(Greek::Gamma),
            "vega" => Ok(Greek::Vega),
            "theta" => Ok(Greek::Theta),
            "rho" => Ok(Greek::Rho),
            _ => Err(PricingError::UnknownGreek(s.to_string())),
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
