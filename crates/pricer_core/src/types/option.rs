//! European option type.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Option type of a European vanilla contract.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "CALL".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy: payoff max(S - K, 0)
    Call,
    /// Right to sell: payoff max(K - S, 0)
    Put,
}

impl OptionType {
    /// Both option types, call first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Lowercase label used in configuration and output.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Intrinsic value at the given spot.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
