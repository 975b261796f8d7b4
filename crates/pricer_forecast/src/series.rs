//! Daily closing-price series.

use chrono::NaiveDate;

use crate::error::ForecastError;

/// One dated closing price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Closing price.
    pub close: f64,
}

impl PricePoint {
    /// Creates a new observation.
    #[inline]
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Closing prices in ascending date order.
///
/// Construction sorts the observations and rejects closes that are not
/// finite and strictly positive, so log returns are always defined.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_forecast::{PricePoint, PriceSeries};
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let series = PriceSeries::new(vec![
///     PricePoint::new(d(3), 102.0),
///     PricePoint::new(d(2), 100.0),
/// ])
/// .unwrap();
///
/// assert_eq!(series.points()[0].date, d(2));
/// assert!((series.log_returns()[0] - (102.0_f64 / 100.0).ln()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a series, sorting by date.
    ///
    /// # Errors
    /// - `ForecastError::InvalidPrice` if any close is not finite and positive
    pub fn new(mut points: Vec<PricePoint>) -> Result<Self, ForecastError> {
        if let Some(bad) = points
            .iter()
            .find(|p| !(p.close.is_finite() && p.close > 0.0))
        {
            return Err(ForecastError::InvalidPrice {
                date: bad.date,
                close: bad.close,
            });
        }
        points.sort_by_key(|p| p.date);
        Ok(Self { points })
    }

    /// Creates a series from `(date, close)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ForecastError>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, close)| PricePoint::new(date, close))
                .collect(),
        )
    }

    /// Observations in date order.
    #[inline]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Observation dates.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Closing prices.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Log returns `ln(C_i / C_{i-1})`.
    ///
    /// Element `j` is the return ending at observation `j + 1`; the result has
    /// one element fewer than the series.
    pub fn log_returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| (w[1].close / w[0].close).ln())
            .collect()
    }
}
