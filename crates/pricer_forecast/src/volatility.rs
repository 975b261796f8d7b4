//! Rolling realised volatility.

use crate::error::ForecastError;

/// Default rolling window, in returns.
pub const DEFAULT_WINDOW: usize = 20;

/// Trading days per year used for annualisation.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualised rolling sample standard deviation of `returns`.
///
/// The output is aligned with `returns`: element `j` is `None` while fewer
/// than `window` returns are available and otherwise the standard deviation
/// (n - 1 denominator) of `returns[j + 1 - window..=j]` times
/// `sqrt(periods_per_year)`.
///
/// # Errors
/// - `ForecastError::InvalidParameter` if `window < 2` or `periods_per_year`
///   is not finite and positive
///
/// # Examples
/// ```
/// use pricer_forecast::volatility::rolling_volatility;
///
/// let vols = rolling_volatility(&[0.01, -0.01, 0.01], 2, 252.0).unwrap();
/// assert_eq!(vols[0], None);
/// assert!(vols[1].unwrap() > 0.0);
/// ```
pub fn rolling_volatility(
    returns: &[f64],
    window: usize,
    periods_per_year: f64,
) -> Result<Vec<Option<f64>>, ForecastError> {
    if window < 2 {
        return Err(ForecastError::InvalidParameter {
            name: "window",
            value: format!("must be at least 2, got {}", window),
        });
    }
    if !(periods_per_year.is_finite() && periods_per_year > 0.0) {
        return Err(ForecastError::InvalidParameter {
            name: "periods_per_year",
            value: format!("must be positive, got {}", periods_per_year),
        });
    }

    let annualisation = periods_per_year.sqrt();
    let mut vols = vec![None; returns.len()];
    for (end, slot) in vols.iter_mut().enumerate().skip(window - 1) {
        let sample = &returns[end + 1 - window..=end];
        *slot = Some(sample_std(sample) * annualisation);
    }
    Ok(vols)
}

/// Sample standard deviation with n - 1 denominator.
///
/// Two-pass: the mean is removed before squaring.
fn sample_std(sample: &[f64]) -> f64 {
    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    let ss: f64 = sample.iter().map(|x| (x - mean) * (x - mean)).sum();
    (ss / (n - 1.0)).sqrt()
}
