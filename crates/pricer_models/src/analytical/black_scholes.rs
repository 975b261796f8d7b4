//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Input Domain
//!
//! S, K, T and σ must be strictly positive and finite, r must be finite
//! (negative rates are allowed). Inputs outside this domain, and finite
//! inputs whose discount factor, price or Greeks overflow, are rejected by
//! [`BlackScholes::new`] with an [`AnalyticalError`]; the free functions
//! [`compute_price`] and [`compute_greeks`] go through the same check.

use pricer_core::types::{Greek, OptionType};

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::greeks::{Greeks, GreeksPair};

/// Black-Scholes model for one European contract.
///
/// Holds a validated set of the five model inputs. The option type is
/// supplied per call, so one instance prices both the call and the put.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price(OptionType::Call);
/// let put_price = bs.price(OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Time to expiry in years (T)
    expiry: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

/// Intermediate terms shared by the price and every Greek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DTerms {
    /// √T
    pub sqrt_t: f64,
    /// σ√T
    pub vol_sqrt_t: f64,
    /// d₁
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
    /// e^(-rT)
    pub discount: f64,
    /// φ(d₁)
    pub pdf_d1: f64,
    /// Φ(d₁)
    pub cdf_d1: f64,
    /// Φ(d₂)
    pub cdf_d2: f64,
    /// Φ(-d₁)
    pub cdf_neg_d1: f64,
    /// Φ(-d₂)
    pub cdf_neg_d2: f64,
}

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, continuously compounded)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidStrike` if strike <= 0 or not finite
    /// - `AnalyticalError::InvalidExpiry` if expiry <= 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    /// - `AnalyticalError::DegenerateVariance` if σ√T underflows to zero
    /// - `AnalyticalError::NumericalInstability` if d₁, d₂, the discount
    ///   factor e^(-rT), a price or a Greek is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.2).is_ok());
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(0.0, 100.0, 1.0, 0.05, 0.2).is_err());
    ///
    /// // Invalid volatility
    /// assert!(BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        if !is_positive(spot) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !is_positive(strike) {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if !is_positive(expiry) {
            return Err(AnalyticalError::InvalidExpiry { expiry });
        }
        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate });
        }
        if !is_positive(volatility) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        if volatility * expiry.sqrt() <= 0.0 {
            return Err(AnalyticalError::DegenerateVariance { volatility, expiry });
        }

        let model = Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        };

        let d1 = model.d1();
        if !d1.is_finite() || !(d1 - volatility * expiry.sqrt()).is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "d1 = {} for S = {}, K = {}, T = {}, r = {}, σ = {}",
                    d1, spot, strike, expiry, rate, volatility
                ),
            });
        }

        let discount = (-rate * expiry).exp();
        if !discount.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "discount factor e^(-rT) = {} for r = {}, T = {}",
                    discount, rate, expiry
                ),
            });
        }

        // Prices and Greeks must all be finite for an accepted contract.
        let terms = model.d_terms();
        let pair = model.greeks_with(&terms);
        let outputs_finite = OptionType::ALL.iter().all(|&option_type| {
            let greeks = pair.for_type(option_type);
            model.price_with(&terms, option_type).is_finite()
                && Greek::ALL.iter().all(|&greek| greeks.get(greek).is_finite())
        });
        if !outputs_finite {
            return Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "non-finite price or Greek for S = {}, K = {}, T = {}, r = {}, σ = {}",
                    spot, strike, expiry, rate, volatility
                ),
            });
        }

        Ok(model)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns a copy with a different spot, re-validated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, AnalyticalError> {
        Self::new(spot, self.strike, self.expiry, self.rate, self.volatility)
    }

    /// Returns a copy with a different expiry, re-validated.
    pub fn with_expiry(&self, expiry: f64) -> Result<Self, AnalyticalError> {
        Self::new(self.spot, self.strike, expiry, self.rate, self.volatility)
    }

    /// Returns a copy with a different volatility, re-validated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, AnalyticalError> {
        Self::new(self.spot, self.strike, self.expiry, self.rate, volatility)
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        let vol_sqrt_t = self.volatility * self.expiry.sqrt();
        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * self.expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.volatility * self.expiry.sqrt()
    }

    /// Computes every intermediate term used by the price and the Greeks.
    ///
    /// Φ(-d) is evaluated directly rather than as 1 - Φ(d), which keeps
    /// relative precision for deep out-of-the-money options.
    pub fn d_terms(&self) -> DTerms {
        let sqrt_t = self.expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;
        let d1 = self.d1();
        let d2 = d1 - vol_sqrt_t;

        DTerms {
            sqrt_t,
            vol_sqrt_t,
            d1,
            d2,
            discount: (-self.rate * self.expiry).exp(),
            pdf_d1: norm_pdf(d1),
            cdf_d1: norm_cdf(d1),
            cdf_d2: norm_cdf(d2),
            cdf_neg_d1: norm_cdf(-d1),
            cdf_neg_d2: norm_cdf(-d2),
        }
    }

    /// Computes the fair value of the option.
    ///
    /// The result is floored at zero: for deep out-of-the-money contracts the
    /// two terms of the formula can cancel to a value a few ulps below zero.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 100.0, 1.0, 0.02, 0.25).unwrap();
    /// assert!((bs.price(OptionType::Call) - 10.870558490557592).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn price(&self, option_type: OptionType) -> f64 {
        let terms = self.d_terms();
        self.price_with(&terms, option_type)
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self) -> f64 {
        self.price(OptionType::Call)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self) -> f64 {
        self.price(OptionType::Put)
    }

    fn price_with(&self, terms: &DTerms, option_type: OptionType) -> f64 {
        let discounted_strike = self.strike * terms.discount;
        let value = match option_type {
            OptionType::Call => self.spot * terms.cdf_d1 - discounted_strike * terms.cdf_d2,
            OptionType::Put => discounted_strike * terms.cdf_neg_d2 - self.spot * terms.cdf_neg_d1,
        };
        // NaN passes through the floor.
        if value < 0.0 {
            0.0
        } else {
            value
        }
    }

    /// Computes the Greeks of both the call and the put in one pass.
    ///
    /// - Delta: call N(d₁), put N(d₁) - 1
    /// - Gamma: φ(d₁) / (S·σ·√T), shared
    /// - Vega: S·φ(d₁)·√T, shared, per unit volatility
    /// - Theta: -(S·φ(d₁)·σ)/(2√T) ∓ r·K·e^(-rT)·N(±d₂), per year
    /// - Rho: call K·T·e^(-rT)·N(d₂), put -K·T·e^(-rT)·N(-d₂), per unit rate
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 100.0, 1.0, 0.02, 0.25).unwrap();
    /// let greeks = bs.greeks();
    /// assert_eq!(greeks.call.vega, greeks.put.vega);
    /// assert!((greeks.call.delta - greeks.put.delta - 1.0).abs() < 1e-12);
    /// ```
    pub fn greeks(&self) -> GreeksPair {
        self.greeks_with(&self.d_terms())
    }

    fn greeks_with(&self, terms: &DTerms) -> GreeksPair {
        let discounted_strike = self.strike * terms.discount;

        let gamma = terms.pdf_d1 / (self.spot * terms.vol_sqrt_t);
        let vega = self.spot * terms.pdf_d1 * terms.sqrt_t;

        // Common term: -(S·σ·φ(d₁))/(2√T)
        let time_decay = -self.spot * terms.pdf_d1 * self.volatility / (2.0 * terms.sqrt_t);

        let call = Greeks {
            delta: terms.cdf_d1,
            gamma,
            vega,
            theta: time_decay - self.rate * discounted_strike * terms.cdf_d2,
            rho: self.expiry * discounted_strike * terms.cdf_d2,
        };

        let put = Greeks {
            delta: terms.cdf_d1 - 1.0,
            gamma,
            vega,
            theta: time_decay + self.rate * discounted_strike * terms.cdf_neg_d2,
            rho: -self.expiry * discounted_strike * terms.cdf_neg_d2,
        };

        GreeksPair { call, put }
    }

    /// Computes the Greeks of one option type.
    #[inline]
    pub fn greeks_for(&self, option_type: OptionType) -> Greeks {
        *self.greeks().for_type(option_type)
    }
}

/// Computes the Black-Scholes fair value of a European option.
///
/// # Errors
/// Any [`AnalyticalError`] raised by [`BlackScholes::new`].
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::compute_price;
///
/// let put = compute_price(100.0, 100.0, 1.0, 0.02, 0.25, OptionType::Put).unwrap();
/// assert!((put - 8.890425821233109).abs() < 1e-9);
///
/// assert!(compute_price(0.0, 100.0, 1.0, 0.02, 0.25, OptionType::Put).is_err());
/// ```
pub fn compute_price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    Ok(BlackScholes::new(spot, strike, expiry, rate, volatility)?.price(option_type))
}

/// Computes the call and put Greeks of a European option.
///
/// # Errors
/// Any [`AnalyticalError`] raised by [`BlackScholes::new`].
pub fn compute_greeks(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
) -> Result<GreeksPair, AnalyticalError> {
    Ok(BlackScholes::new(spot, strike, expiry, rate, volatility)?.greeks())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> BlackScholes {
        BlackScholes::new(100.0, 100.0, 1.0, 0.02, 0.25).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = reference();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.strike(), 100.0);
        assert_eq!(bs.expiry(), 1.0);
        assert_eq!(bs.rate(), 0.02);
        assert_eq!(bs.volatility(), 0.25);
    }

    #[test]
    fn test_new_invalid_spot_negative() {
        match BlackScholes::new(-100.0, 100.0, 1.0, 0.05, 0.2) {
            Err(AnalyticalError::InvalidSpot { spot }) => assert_eq!(spot, -100.0),
            other => panic!("Expected InvalidSpot error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_invalid_spot_zero() {
        assert!(matches!(
            BlackScholes::new(0.0, 100.0, 1.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_new_invalid_strike() {
        assert!(matches!(
            BlackScholes::new(100.0, 0.0, 1.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0, -5.0, 1.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_new_invalid_expiry() {
        assert!(matches!(
            BlackScholes::new(100.0, 100.0, 0.0, 0.05, 0.2),
            Err(AnalyticalError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0, 100.0, -0.5, 0.05, 0.2),
            Err(AnalyticalError::InvalidExpiry { .. })
        ));
    }

    #[test]
    fn test_new_invalid_volatility_negative() {
        match BlackScholes::new(100.0, 100.0, 1.0, 0.05, -0.2) {
            Err(AnalyticalError::InvalidVolatility { volatility }) => {
                assert_eq!(volatility, -0.2)
            }
            other => panic!("Expected InvalidVolatility error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_invalid_volatility_zero() {
        assert!(matches!(
            BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.0),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_new_rejects_nan_and_infinity() {
        assert!(BlackScholes::new(f64::NAN, 100.0, 1.0, 0.05, 0.2).is_err());
        assert!(BlackScholes::new(100.0, f64::INFINITY, 1.0, 0.05, 0.2).is_err());
        assert!(BlackScholes::new(100.0, 100.0, f64::NAN, 0.05, 0.2).is_err());
        assert!(matches!(
            BlackScholes::new(100.0, 100.0, 1.0, f64::NAN, 0.2),
            Err(AnalyticalError::InvalidRate { .. })
        ));
        assert!(BlackScholes::new(100.0, 100.0, 1.0, 0.05, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_degenerate_variance() {
        // Both inputs positive, but σ√T underflows to 0
        assert!(matches!(
            BlackScholes::new(100.0, 100.0, 1e-300, 0.05, 1e-300),
            Err(AnalyticalError::DegenerateVariance { .. })
        ));
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0, 100.0, 1.0, -0.02, 0.2).is_ok());
    }

    #[test]
    fn test_new_rejects_overflowing_discount_factor() {
        // -rT = 1000 and 800: e^(-rT) overflows although every input is finite
        for (expiry, rate) in [(1e5, -0.01), (1.0, -800.0)] {
            assert!(matches!(
                BlackScholes::new(100.0, 100.0, expiry, rate, 0.25),
                Err(AnalyticalError::NumericalInstability { .. })
            ));
        }
    }

    #[test]
    fn test_new_rejects_non_finite_greeks() {
        // d₁ and the discount factor are finite, but K·T in rho overflows
        assert!(matches!(
            BlackScholes::new(1e300, 1e300, 1e10, 0.0, 0.2),
            Err(AnalyticalError::NumericalInstability { .. })
        ));
    }

    #[test]
    fn test_large_positive_rate_stays_finite() {
        // e^(-rT) underflows to zero, which is a valid discount factor
        let bs = BlackScholes::new(100.0, 100.0, 1.0, 800.0, 0.25).unwrap();
        let pair = bs.greeks();
        for option_type in OptionType::ALL {
            assert!(bs.price(option_type).is_finite());
            for greek in Greek::ALL {
                assert!(pair.for_type(option_type).get(greek).is_finite());
            }
        }
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm() {
        // ATM with r=0: d1 = σ√T / 2
        let bs = BlackScholes::new(100.0, 100.0, 1.0, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_atm() {
        // ATM with r=0: d2 = -σ√T / 2
        let bs = BlackScholes::new(100.0, 100.0, 1.0, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d2(), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d_terms_reference() {
        let terms = reference().d_terms();
        assert_relative_eq!(terms.d1, 0.205, epsilon = 1e-12);
        assert_relative_eq!(terms.d2, -0.045, epsilon = 1e-12);
        assert_relative_eq!(terms.vol_sqrt_t, 0.25, epsilon = 1e-15);
        assert_relative_eq!(terms.discount, (-0.02_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(terms.cdf_d1 + terms.cdf_neg_d1, 1.0, epsilon = 1e-15);
        assert_relative_eq!(terms.cdf_d2 + terms.cdf_neg_d2, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(100.0, 105.0, 0.5, 0.05, 0.2).unwrap();
        let expected_d2 = bs.d1() - 0.2 * 0.5_f64.sqrt();
        assert_relative_eq!(bs.d2(), expected_d2, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_sign_follows_moneyness() {
        assert!(BlackScholes::new(150.0, 100.0, 1.0, 0.05, 0.2).unwrap().d1() > 1.0);
        assert!(BlackScholes::new(50.0, 100.0, 1.0, 0.05, 0.2).unwrap().d1() < -1.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_golden_value() {
        assert_relative_eq!(reference().price_call(), 10.870558490557592, epsilon = 1e-9);
    }

    #[test]
    fn test_put_price_golden_value() {
        assert_relative_eq!(reference().price_put(), 8.890425821233109, epsilon = 1e-9);
    }

    #[test]
    fn test_call_price_textbook_value() {
        // S=100, K=100, r=0.05, σ=0.2, T=1: call ≈ 10.4506, put ≈ 5.5735
        let bs = BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(), 10.4506, epsilon = 1e-4);
        assert_relative_eq!(bs.price_put(), 5.5735, epsilon = 1e-4);
    }

    #[test]
    fn test_price_dispatches_on_option_type() {
        let bs = reference();
        assert_eq!(bs.price(OptionType::Call), bs.price_call());
        assert_eq!(bs.price(OptionType::Put), bs.price_put());
    }

    #[test]
    fn test_deep_itm_call() {
        // Deep ITM call ≈ S - K*exp(-rT)
        let bs = BlackScholes::new(200.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let forward_intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(bs.price_call() >= forward_intrinsic - 1e-9);
    }

    #[test]
    fn test_deep_otm_prices_non_negative() {
        let bs = BlackScholes::new(1.0, 1000.0, 0.01, 0.05, 0.1).unwrap();
        assert_eq!(bs.price_call(), 0.0);
        let bs = BlackScholes::new(1000.0, 1.0, 0.01, 0.05, 0.1).unwrap();
        assert!(bs.price_put() >= 0.0);
    }

    #[test]
    fn test_price_floor_keeps_nan() {
        let bs = reference();
        let mut terms = bs.d_terms();

        terms.cdf_d1 = 0.0;
        assert_eq!(bs.price_with(&terms, OptionType::Call), 0.0);

        terms.discount = f64::NAN;
        assert!(bs.price_with(&terms, OptionType::Call).is_nan());
        assert!(bs.price_with(&terms, OptionType::Put).is_nan());
    }

    #[test]
    fn test_short_expiry_converges_to_intrinsic() {
        for (spot, strike) in [(120.0, 100.0), (80.0, 100.0)] {
            let bs = BlackScholes::new(spot, strike, 1e-6, 0.02, 0.25).unwrap();
            assert_relative_eq!(
                bs.price_call(),
                OptionType::Call.intrinsic(spot, strike),
                epsilon = 1e-3
            );
            assert_relative_eq!(
                bs.price_put(),
                OptionType::Put.intrinsic(spot, strike),
                epsilon = 1e-3
            );
        }
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity() {
        let bs = reference();
        let forward = 100.0 - 100.0 * (-0.02_f64).exp();
        assert_relative_eq!(bs.price_call() - bs.price_put(), forward, epsilon = 1e-9);
    }

    #[test]
    fn test_put_call_parity_various_strikes() {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let bs = BlackScholes::new(100.0, strike, 1.0, 0.05, 0.2).unwrap();
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(bs.price_call() - bs.price_put(), forward, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_put_call_parity_various_expiries() {
        for expiry in [0.25, 0.5, 1.0, 2.0] {
            let bs = BlackScholes::new(100.0, 100.0, expiry, 0.05, 0.2).unwrap();
            let forward = 100.0 - 100.0 * (-0.05 * expiry).exp();
            assert_relative_eq!(bs.price_call() - bs.price_put(), forward, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let bs = BlackScholes::new(100.0, 100.0, 1.0, -0.02, 0.2).unwrap();
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(bs.price_call() - bs.price_put(), forward, epsilon = 1e-9);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_call_greeks_golden_values() {
        let call = reference().greeks().call;
        assert_relative_eq!(call.delta, 0.5812139374874482, epsilon = 1e-12);
        assert_relative_eq!(call.gamma, 0.01562587854480421, epsilon = 1e-12);
        assert_relative_eq!(call.vega, 39.06469636201053, epsilon = 1e-9);
        assert_relative_eq!(call.theta, -5.828103750415061, epsilon = 1e-9);
        assert_relative_eq!(call.rho, 47.25083525818723, epsilon = 1e-9);
    }

    #[test]
    fn test_put_greeks_golden_values() {
        let put = reference().greeks().put;
        assert_relative_eq!(put.delta, -0.4187860625125518, epsilon = 1e-12);
        assert_relative_eq!(put.gamma, 0.01562587854480421, epsilon = 1e-12);
        assert_relative_eq!(put.vega, 39.06469636201053, epsilon = 1e-9);
        assert_relative_eq!(put.theta, -3.8677064038015505, epsilon = 1e-9);
        assert_relative_eq!(put.rho, -50.769032072488294, epsilon = 1e-9);
    }

    #[test]
    fn test_gamma_vega_shared_exactly() {
        for strike in [60.0, 95.0, 100.0, 140.0] {
            let pair = BlackScholes::new(100.0, strike, 0.7, 0.03, 0.4)
                .unwrap()
                .greeks();
            assert_eq!(pair.call.gamma, pair.put.gamma);
            assert_eq!(pair.call.vega, pair.put.vega);
        }
    }

    #[test]
    fn test_delta_call_put_relationship() {
        let pair = reference().greeks();
        assert_relative_eq!(pair.call.delta - pair.put.delta, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_delta_bounds() {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let pair = BlackScholes::new(100.0, strike, 1.0, 0.05, 0.2).unwrap().greeks();
            assert!((0.0..=1.0).contains(&pair.call.delta));
            assert!((-1.0..=0.0).contains(&pair.put.delta));
        }
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        let gamma = |strike: f64| {
            BlackScholes::new(100.0, strike, 1.0, 0.05, 0.2)
                .unwrap()
                .greeks()
                .call
                .gamma
        };
        assert!(gamma(100.0) >= gamma(80.0));
        assert!(gamma(100.0) >= gamma(120.0));
    }

    #[test]
    fn test_theta_and_rho_signs() {
        let pair = reference().greeks();
        assert!(pair.call.theta < 0.0);
        assert!(pair.call.rho > 0.0);
        assert!(pair.put.rho < 0.0);
    }

    #[test]
    fn test_greeks_for_matches_pair() {
        let bs = reference();
        assert_eq!(bs.greeks_for(OptionType::Call), bs.greeks().call);
        assert_eq!(bs.greeks_for(OptionType::Put), bs.greeks().put);
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let bs = reference();
        let h = 0.01;
        for option_type in OptionType::ALL {
            let up = bs.with_spot(100.0 + h).unwrap().price(option_type);
            let dn = bs.with_spot(100.0 - h).unwrap().price(option_type);
            let fd_delta = (up - dn) / (2.0 * h);
            assert_relative_eq!(bs.greeks_for(option_type).delta, fd_delta, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let bs = reference();
        let h = 0.01;
        let up = bs.with_spot(100.0 + h).unwrap().price_call();
        let dn = bs.with_spot(100.0 - h).unwrap().price_call();
        let fd_gamma = (up - 2.0 * bs.price_call() + dn) / (h * h);
        assert_relative_eq!(bs.greeks().call.gamma, fd_gamma, epsilon = 1e-4);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let bs = reference();
        let h = 1e-4;
        let up = bs.with_volatility(0.25 + h).unwrap().price_put();
        let dn = bs.with_volatility(0.25 - h).unwrap().price_put();
        let fd_vega = (up - dn) / (2.0 * h);
        assert_relative_eq!(bs.greeks().put.vega, fd_vega, epsilon = 1e-5);
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        // Theta is the decay: -∂V/∂T
        let bs = reference();
        let h = 1e-5;
        for option_type in OptionType::ALL {
            let longer = bs.with_expiry(1.0 + h).unwrap().price(option_type);
            let shorter = bs.with_expiry(1.0 - h).unwrap().price(option_type);
            let fd_theta = -(longer - shorter) / (2.0 * h);
            assert_relative_eq!(bs.greeks_for(option_type).theta, fd_theta, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let bs = reference();
        let h = 1e-5;
        for option_type in OptionType::ALL {
            let up = BlackScholes::new(100.0, 100.0, 1.0, 0.02 + h, 0.25).unwrap().price(option_type);
            let dn = BlackScholes::new(100.0, 100.0, 1.0, 0.02 - h, 0.25).unwrap().price(option_type);
            let fd_rho = (up - dn) / (2.0 * h);
            assert_relative_eq!(bs.greeks_for(option_type).rho, fd_rho, epsilon = 1e-4);
        }
    }

    // ==========================================================
    // Free Function Tests
    // ==========================================================

    #[test]
    fn test_compute_price_matches_model() {
        let price = compute_price(100.0, 100.0, 1.0, 0.02, 0.25, OptionType::Call).unwrap();
        assert_eq!(price, reference().price_call());
    }

    #[test]
    fn test_compute_price_rejects_zero_spot_and_volatility() {
        assert!(matches!(
            compute_price(0.0, 100.0, 1.0, 0.02, 0.25, OptionType::Call),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            compute_price(100.0, 100.0, 1.0, 0.02, 0.0, OptionType::Put),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_compute_price_rejects_overflowing_discount() {
        for option_type in OptionType::ALL {
            let err = compute_price(100.0, 100.0, 1e5, -0.01, 0.25, option_type).unwrap_err();
            assert!(err.is_invalid_input());
        }
        assert!(compute_greeks(100.0, 100.0, 1.0, -800.0, 0.25).is_err());
    }

    #[test]
    fn test_compute_greeks_matches_model() {
        let pair = compute_greeks(100.0, 100.0, 1.0, 0.02, 0.25).unwrap();
        assert_eq!(pair, reference().greeks());
    }

    #[test]
    fn test_compute_greeks_rejects_zero_expiry() {
        assert!(matches!(
            compute_greeks(100.0, 100.0, 0.0, 0.02, 0.25),
            Err(AnalyticalError::InvalidExpiry { .. })
        ));
    }

    // ==========================================================
    // Clone and Debug Tests
    // ==========================================================

    #[test]
    fn test_copy() {
        let bs1 = reference();
        let bs2 = bs1;
        assert_eq!(bs1, bs2);
    }

    #[test]
    fn test_debug() {
        let debug_str = format!("{:?}", reference());
        assert!(debug_str.contains("BlackScholes"));
        assert!(debug_str.contains("spot"));
    }
}
