//! Evenly spaced evaluation grids.

use crate::types::PricingError;

/// Returns `n` evenly spaced points over `[start, end]`, both endpoints included.
///
/// The last point is set to `end` exactly, so that grids used as model
/// inputs never overshoot a validated boundary through rounding.
///
/// # Errors
/// - `PricingError::InvalidInput` if `n < 2` or either bound is not finite
///
/// # Examples
/// ```
/// use pricer_core::math::grid::linspace;
///
/// let grid = linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>, PricingError> {
    if n < 2 {
        return Err(PricingError::InvalidInput(format!(
            "grid needs at least 2 points, got {}",
            n
        )));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(PricingError::InvalidInput(format!(
            "grid bounds must be finite, got [{}, {}]",
            start, end
        )));
    }

    let step = (end - start) / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    grid[n - 1] = end;
    Ok(grid)
}
