//! Rendering of command results as table, CSV or JSON.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Rectangular text result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Box-drawn table.
    pub fn to_table_string(&self) -> String {
        let widths = self.widths();
        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!(" {:<width$} ", cell, width = w)
                })
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut out = rule("┌", "┬", "┐");
        out.push_str(&line(&self.headers));
        out.push_str(&rule("├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&line(row));
        }
        out.push_str(&rule("└", "┴", "┘"));
        out
    }

    /// RFC 4180 CSV with a header line.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }
}

/// Renders `table` or, for JSON, the serialisable `value`.
pub fn render<T: Serialize + ?Sized>(format: OutputFormat, table: &Table, value: &T) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table.to_table_string()),
        OutputFormat::Csv => table.to_csv_string(),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
    }
}

/// Fixed-precision number for table and CSV cells.
pub fn num(value: f64) -> String {
    format!("{:.6}", value)
}
