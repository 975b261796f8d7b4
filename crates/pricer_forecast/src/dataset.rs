//! Supervised dataset of lagged realised volatility.
//!
//! Each row pairs the realised volatility of one day (`vol`, the target)
//! with that of the previous day (`prev_vol`, the single feature).

use std::ops::Range;

use chrono::NaiveDate;

use crate::error::ForecastError;
use crate::series::PriceSeries;
use crate::volatility::rolling_volatility;

/// One supervised sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolatilityRow {
    /// Date of the target observation.
    pub date: NaiveDate,
    /// Realised volatility on the previous observation.
    pub prev_vol: f64,
    /// Realised volatility on `date`.
    pub vol: f64,
}

/// Lagged-volatility rows in date order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolatilityDataset {
    rows: Vec<VolatilityRow>,
    window: usize,
}

impl VolatilityDataset {
    /// Builds the dataset from a price series.
    ///
    /// The realised volatility at observation `i` uses the `window` log
    /// returns ending at `i`, so it exists from `i = window`; its lag exists
    /// from `i = window + 1`. Earlier observations are dropped and the
    /// dataset has `len(series) - window - 1` rows.
    ///
    /// # Errors
    /// - `ForecastError::InvalidParameter` for an invalid window or
    ///   annualisation factor
    pub fn from_series(
        series: &PriceSeries,
        window: usize,
        periods_per_year: f64,
    ) -> Result<Self, ForecastError> {
        let vols = rolling_volatility(&series.log_returns(), window, periods_per_year)?;
        let points = series.points();

        // vols[j] belongs to observation j + 1
        let rows = vols
            .windows(2)
            .enumerate()
            .filter_map(|(j, pair)| match (pair[0], pair[1]) {
                (Some(prev_vol), Some(vol)) => Some(VolatilityRow {
                    date: points[j + 2].date,
                    prev_vol,
                    vol,
                }),
                _ => None,
            })
            .collect();

        Ok(Self { rows, window })
    }

    /// Rows in date order.
    #[inline]
    pub fn rows(&self) -> &[VolatilityRow] {
        &self.rows
    }

    /// Rolling window used to build the rows.
    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no row could be formed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Feature matrix (one column, `prev_vol`) for the rows in `range`.
    pub fn features(&self, range: Range<usize>) -> Vec<Vec<f64>> {
        self.rows[range].iter().map(|r| vec![r.prev_vol]).collect()
    }

    /// Targets (`vol`) for the rows in `range`.
    pub fn targets(&self, range: Range<usize>) -> Vec<f64> {
        self.rows[range].iter().map(|r| r.vol).collect()
    }

    /// Most recent realised volatility.
    pub fn latest_volatility(&self) -> Option<f64> {
        self.rows.last().map(|r| r.vol)
    }
}

/// Train/test partition of `0..n` in time order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronologicalSplit {
    /// Leading rows used for fitting.
    pub train: Range<usize>,
    /// Trailing rows used for evaluation.
    pub test: Range<usize>,
}

/// Splits `n` rows into a leading train block and a trailing test block.
///
/// The test block holds `ceil(test_fraction * n)` rows; no shuffling.
///
/// # Errors
/// - `ForecastError::InvalidParameter` if `test_fraction` is not in (0, 1)
/// - `ForecastError::InsufficientData` if either block would be empty
///
/// # Examples
/// ```
/// use pricer_forecast::dataset::chronological_split;
///
/// let split = chronological_split(10, 0.2).unwrap();
/// assert_eq!(split.train, 0..8);
/// assert_eq!(split.test, 8..10);
/// ```
pub fn chronological_split(n: usize, test_fraction: f64) -> Result<ChronologicalSplit, ForecastError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(ForecastError::InvalidParameter {
            name: "test_fraction",
            value: format!("must be in (0, 1), got {}", test_fraction),
        });
    }

    let n_test = (test_fraction * n as f64).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(ForecastError::InsufficientData {
            required: 2,
            actual: n,
        });
    }

    let n_train = n - n_test;
    Ok(ChronologicalSplit {
        train: 0..n_train,
        test: n_train..n,
    })
}
