//! Regression model interface.

use crate::error::ForecastError;

/// A supervised regression model over dense `f64` features.
///
/// `features` is row-major: one inner vector per sample, all of the same
/// width.
pub trait Regressor {
    /// Fits the model, replacing any previous fit.
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<(), ForecastError>;

    /// Predicts one value per row.
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>, ForecastError>;

    /// Predicts a single sample.
    fn predict_one(&self, sample: &[f64]) -> Result<f64, ForecastError> {
        self.predict(&[sample.to_vec()])?
            .first()
            .copied()
            .ok_or(ForecastError::NotFitted)
    }
}

/// Checks that `features` is a non-empty rectangular matrix and returns its
/// width.
pub(crate) fn feature_width(features: &[Vec<f64>]) -> Result<usize, ForecastError> {
    let width = features
        .first()
        .map(Vec::len)
        .ok_or(ForecastError::InsufficientData {
            required: 1,
            actual: 0,
        })?;
    if width == 0 {
        return Err(ForecastError::InvalidParameter {
            name: "features",
            value: "rows must have at least one column".to_string(),
        });
    }
    if let Some(row) = features.iter().find(|row| row.len() != width) {
        return Err(ForecastError::DimensionMismatch {
            expected: width,
            actual: row.len(),
        });
    }
    Ok(width)
}

/// Validates a training set and returns its feature width.
pub(crate) fn check_training_set(features: &[Vec<f64>], targets: &[f64]) -> Result<usize, ForecastError> {
    let width = feature_width(features)?;
    if features.len() != targets.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: features.len(),
            actual: targets.len(),
        });
    }
    if features.iter().flatten().chain(targets).any(|v| !v.is_finite()) {
        return Err(ForecastError::InvalidParameter {
            name: "training set",
            value: "contains non-finite values".to_string(),
        });
    }
    Ok(width)
}
