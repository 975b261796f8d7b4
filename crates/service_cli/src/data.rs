//! Price file loading.
//!
//! Expects a header row with `Date` (`YYYY-MM-DD`) and `Close` columns;
//! other columns are ignored and rows need not be sorted.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use pricer_forecast::{PricePoint, PriceSeries};
use serde::Deserialize;

use crate::{CliError, Result};

#[derive(Debug, Deserialize)]
struct PriceRecord {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Close")]
    close: f64,
}

/// Reads a price series from any CSV source.
pub fn read_price_series<R: Read>(reader: R) -> Result<PriceSeries> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in ["Date", "Close"] {
        if !headers.iter().any(|h| h == required) {
            return Err(CliError::InvalidArgument(format!(
                "price file is missing the '{}' column",
                required
            )));
        }
    }

    let points = csv_reader
        .deserialize::<PriceRecord>()
        .map(|record| record.map(|r| PricePoint::new(r.date, r.close)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(rows = points.len(), "Read price file");
    Ok(PriceSeries::new(points)?)
}

/// Loads a price series from a CSV file.
pub fn load_price_series(path: &Path) -> Result<PriceSeries> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    read_price_series(file)
}
