//! Greek and price profiles along a single model input.
//!
//! A profile evaluates one quantity (the fair value or one Greek) of one
//! option type on an evenly spaced grid of one input, holding the other four
//! inputs at the values of a base contract.
//!
//! # Examples
//! ```
//! use pricer_core::types::{Greek, OptionType};
//! use pricer_models::analytical::BlackScholes;
//! use pricer_models::profile::{greek_profile, ProfileAxis};
//!
//! let base = BlackScholes::new(100.0, 100.0, 1.0, 0.02, 0.25).unwrap();
//! let curve = greek_profile(
//!     &base,
//!     ProfileAxis::Spot,
//!     Greek::Delta,
//!     OptionType::Call,
//!     ProfileAxis::Spot.default_range(),
//!     50,
//! )
//! .unwrap();
//!
//! assert_eq!(curve.points.len(), 50);
//! // Call delta increases with spot
//! assert!(curve.points.windows(2).all(|w| w[1].y > w[0].y));
//! ```

use std::fmt;
use std::str::FromStr;

use pricer_core::math::grid::linspace;
use pricer_core::types::{Greek, OptionType, PricingError};

use crate::analytical::{AnalyticalError, BlackScholes};

/// Default number of grid points.
pub const DEFAULT_POINTS: usize = 50;

/// Model input varied along a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProfileAxis {
    /// Volatility σ.
    Volatility,
    /// Time to expiry T in years.
    Expiry,
    /// Spot price S.
    Spot,
}

impl ProfileAxis {
    /// All axes.
    pub const ALL: [ProfileAxis; 3] = [
        ProfileAxis::Volatility,
        ProfileAxis::Expiry,
        ProfileAxis::Spot,
    ];

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileAxis::Volatility => "volatility",
            ProfileAxis::Expiry => "expiry",
            ProfileAxis::Spot => "spot",
        }
    }

    /// Default `(start, end)` range of the axis.
    ///
    /// | Axis | Range |
    /// |------|-------|
    /// | Volatility | 0.05 to 1.0 |
    /// | Expiry | 0.01 to 2.0 years |
    /// | Spot | 50 to 150 |
    pub fn default_range(&self) -> (f64, f64) {
        match self {
            ProfileAxis::Volatility => (0.05, 1.0),
            ProfileAxis::Expiry => (0.01, 2.0),
            ProfileAxis::Spot => (50.0, 150.0),
        }
    }

    /// Reads this input from a contract.
    pub fn value_of(&self, model: &BlackScholes) -> f64 {
        match self {
            ProfileAxis::Volatility => model.volatility(),
            ProfileAxis::Expiry => model.expiry(),
            ProfileAxis::Spot => model.spot(),
        }
    }

    /// Returns `model` with this input replaced by `value`.
    pub fn apply(&self, model: &BlackScholes, value: f64) -> Result<BlackScholes, AnalyticalError> {
        match self {
            ProfileAxis::Volatility => model.with_volatility(value),
            ProfileAxis::Expiry => model.with_expiry(value),
            ProfileAxis::Spot => model.with_spot(value),
        }
    }
}

impl FromStr for ProfileAxis {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vol" | "volatility" | "sigma" => Ok(ProfileAxis::Volatility),
            "expiry" | "t" | "time" => Ok(ProfileAxis::Expiry),
            "spot" | "s" => Ok(ProfileAxis::Spot),
            _ => Err(PricingError::InvalidInput(format!(
                "unknown profile axis '{}' (expected vol, expiry or spot)",
                s
            ))),
        }
    }
}

impl fmt::Display for ProfileAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quantity evaluated along a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProfileMetric {
    /// Fair value.
    Price,
    /// One sensitivity.
    Greek(Greek),
}

impl ProfileMetric {
    fn evaluate(&self, model: &BlackScholes, option_type: OptionType) -> f64 {
        match self {
            ProfileMetric::Price => model.price(option_type),
            ProfileMetric::Greek(greek) => model.greeks().get(option_type, *greek),
        }
    }
}

impl FromStr for ProfileMetric {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("price") {
            return Ok(ProfileMetric::Price);
        }
        s.parse().map(ProfileMetric::Greek)
    }
}

impl fmt::Display for ProfileMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileMetric::Price => f.write_str("price"),
            ProfileMetric::Greek(greek) => greek.fmt(f),
        }
    }
}

impl From<Greek> for ProfileMetric {
    fn from(greek: Greek) -> Self {
        ProfileMetric::Greek(greek)
    }
}

/// One `(x, y)` sample of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfilePoint {
    /// Value of the varied input.
    pub x: f64,
    /// Value of the metric.
    pub y: f64,
}

/// A metric of one option type sampled along one axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekProfile {
    /// Varied input.
    pub axis: ProfileAxis,
    /// Evaluated quantity.
    pub metric: ProfileMetric,
    /// Option type.
    pub option_type: OptionType,
    /// Samples in grid order.
    pub points: Vec<ProfilePoint>,
}

impl GreekProfile {
    /// Grid values.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Metric values.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Samples `metric` of `option_type` along `axis`.
///
/// # Errors
/// - `AnalyticalError::InvalidProfile` if `points < 2` or the range is not
///   finite or empty
/// - Any validation error of a grid point, e.g. a volatility range that
///   reaches zero
pub fn profile(
    base: &BlackScholes,
    axis: ProfileAxis,
    metric: ProfileMetric,
    option_type: OptionType,
    range: (f64, f64),
    points: usize,
) -> Result<GreekProfile, AnalyticalError> {
    let (start, end) = range;
    if start == end {
        return Err(AnalyticalError::InvalidProfile {
            message: format!("empty {} range [{}, {}]", axis, start, end),
        });
    }
    let grid = linspace(start, end, points).map_err(|err| AnalyticalError::InvalidProfile {
        message: err.to_string(),
    })?;

    let points = grid
        .into_iter()
        .map(|x| {
            let model = axis.apply(base, x)?;
            Ok(ProfilePoint {
                x,
                y: metric.evaluate(&model, option_type),
            })
        })
        .collect::<Result<Vec<_>, AnalyticalError>>()?;

    Ok(GreekProfile {
        axis,
        metric,
        option_type,
        points,
    })
}

/// Samples one Greek of `option_type` along `axis`.
pub fn greek_profile(
    base: &BlackScholes,
    axis: ProfileAxis,
    greek: Greek,
    option_type: OptionType,
    range: (f64, f64),
    points: usize,
) -> Result<GreekProfile, AnalyticalError> {
    profile(base, axis, ProfileMetric::Greek(greek), option_type, range, points)
}

/// Samples the fair value of `option_type` along `axis`.
pub fn price_profile(
    base: &BlackScholes,
    axis: ProfileAxis,
    option_type: OptionType,
    range: (f64, f64),
    points: usize,
) -> Result<GreekProfile, AnalyticalError> {
    profile(base, axis, ProfileMetric::Price, option_type, range, points)
}
