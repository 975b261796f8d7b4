//! Greeks records for a call/put pair.
//!
//! Provides [`Greeks`], the five Black-Scholes sensitivities of one option,
//! and [`GreeksPair`], the call and put records computed in a single pass.
//!
//! # Units
//!
//! Values are raw model derivatives:
//! - `vega` is per unit of volatility (σ = 0.25 → 0.26 is a 0.01 move)
//! - `theta` is per year, with the decay sign convention
//! - `rho` is per unit of rate
//!
//! Market quotes usually use per-vol-point vega, per-day theta and
//! per-basis-point rho; the conversion helpers rescale explicitly.

use pricer_core::types::{Greek, OptionType};

/// Black-Scholes sensitivities of one option.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S.
    pub delta: f64,
    /// Gamma: ∂²V/∂S².
    pub gamma: f64,
    /// Vega: ∂V/∂σ, per unit volatility.
    pub vega: f64,
    /// Theta: time decay, per year.
    pub theta: f64,
    /// Rho: ∂V/∂r, per unit rate.
    pub rho: f64,
}

impl Greeks {
    /// Returns the sensitivity named by `greek`.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::Greek;
    /// use pricer_models::analytical::Greeks;
    ///
    /// let greeks = Greeks { delta: 0.5, ..Default::default() };
    /// assert_eq!(greeks.get(Greek::Delta), 0.5);
    /// ```
    #[inline]
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Vega => self.vega,
            Greek::Theta => self.theta,
            Greek::Rho => self.rho,
        }
    }

    /// Iterates `(name, value)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Greek, f64)> + '_ {
        Greek::ALL.into_iter().map(move |greek| (greek, self.get(greek)))
    }

    /// Vega per one volatility point (σ moves by 0.01).
    #[inline]
    pub fn vega_per_vol_point(&self) -> f64 {
        self.vega / 100.0
    }

    /// Theta per calendar or trading day.
    ///
    /// # Arguments
    /// * `days_per_year` - 365 for calendar days, 252 for trading days
    #[inline]
    pub fn theta_per_day(&self, days_per_year: f64) -> f64 {
        self.theta / days_per_year
    }

    /// Rho per one basis point of rate.
    #[inline]
    pub fn rho_per_basis_point(&self) -> f64 {
        self.rho / 10_000.0
    }
}

/// Call and put Greeks computed from the same intermediates.
///
/// `gamma` and `vega` are assigned from one expression and are therefore
/// bitwise identical in both records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksPair {
    /// Greeks of the call.
    pub call: Greeks,
    /// Greeks of the put.
    pub put: Greeks,
}

impl GreeksPair {
    /// Returns the record for `option_type`.
    #[inline]
    pub fn for_type(&self, option_type: OptionType) -> &Greeks {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }

    /// Returns one sensitivity of one option type.
    #[inline]
    pub fn get(&self, option_type: OptionType, greek: Greek) -> f64 {
        self.for_type(option_type).get(greek)
    }
}
