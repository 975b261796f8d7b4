//! Regression error metrics.

use crate::error::ForecastError;

/// Mean of squared differences between `actual` and `predicted`.
///
/// # Errors
/// - `ForecastError::DimensionMismatch` if the lengths differ
/// - `ForecastError::InsufficientData` if both are empty
///
/// # Examples
/// ```
/// use pricer_forecast::mean_squared_error;
///
/// let mse = mean_squared_error(&[1.0, 2.0], &[1.0, 4.0]).unwrap();
/// assert_eq!(mse, 2.0);
/// ```
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64, ForecastError> {
    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            actual: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(ForecastError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p) * (a - p))
        .sum();
    Ok(sum / actual.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let v = [0.12, 0.3, 0.25];
        assert_eq!(mean_squared_error(&v, &v).unwrap(), 0.0);
    }

    #[test]
    fn test_known_value() {
        assert_eq!(mean_squared_error(&[0.0, 0.0, 0.0, 0.0], &[1.0, -1.0, 2.0, 0.0]).unwrap(), 1.5);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            mean_squared_error(&[1.0], &[1.0, 2.0]),
            Err(ForecastError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            mean_squared_error(&[], &[]),
            Err(ForecastError::InsufficientData { .. })
        ));
    }
}
