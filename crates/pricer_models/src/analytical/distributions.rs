//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is expressed through the complementary error function from
//! `libm` (accurate to within one ulp), which keeps relative precision far
//! into the lower tail and satisfies Φ(x) + Φ(-x) = 1 to rounding.

use libm::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0);
/// assert!((cdf_0 - 0.5).abs() < 1e-15);
///
/// let cdf_neg = norm_cdf(-3.0);
/// assert!(cdf_neg < 0.01);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
