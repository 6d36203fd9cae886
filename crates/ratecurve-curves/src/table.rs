//! Tabular input adapter.
//!
//! Curve data often arrives as a one-row or one-column table, with the tenors
//! either as column headers or as row labels. [`RateTable`] normalizes both
//! layouts into [`RawCurveData`].

use serde::{Deserialize, Serialize};
use std::io::Read;

use ratecurve_core::types::is_date_like;

use crate::data::{RateInput, RawCurveData};
use crate::error::{CurveError, CurveResult};

/// A labelled table of rates, stored row-major.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RateTable {
    /// Row labels.
    pub index: Vec<String>,
    /// Column headers.
    pub columns: Vec<String>,
    /// One entry per row, each with one value per column.
    pub values: Vec<Vec<RateInput>>,
}

impl RateTable {
    /// Creates a table.
    #[must_use]
    pub fn new(index: Vec<String>, columns: Vec<String>, values: Vec<Vec<RateInput>>) -> Self {
        Self {
            index,
            columns,
            values,
        }
    }

    /// Creates a single-row table with tenors as column headers.
    #[must_use]
    pub fn row<K: Into<String>>(label: impl Into<String>, entries: Vec<(K, f64)>) -> Self {
        let (columns, values): (Vec<String>, Vec<RateInput>) = entries
            .into_iter()
            .map(|(k, v)| (k.into(), RateInput::Number(v)))
            .unzip();
        Self::new(vec![label.into()], columns, vec![values])
    }

    /// Creates a single-column table with tenors as row labels.
    #[must_use]
    pub fn column<K: Into<String>>(header: impl Into<String>, entries: Vec<(K, f64)>) -> Self {
        let (index, values): (Vec<String>, Vec<Vec<RateInput>>) = entries
            .into_iter()
            .map(|(k, v)| (k.into(), vec![RateInput::Number(v)]))
            .unzip();
        Self::new(index, vec![header.into()], values)
    }

    /// Reads a CSV table. The first row holds the column headers and the
    /// first column holds the row labels; the top-left cell is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::DataValidation` if the CSV cannot be read.
    pub fn from_csv_reader<R: Read>(reader: R) -> CurveResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| CurveError::data_validation(e.to_string()))?;
        let columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

        let mut index = Vec::new();
        let mut values = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| CurveError::data_validation(e.to_string()))?;
            let mut fields = record.iter();
            index.push(fields.next().unwrap_or_default().to_string());
            values.push(fields.map(parse_cell).collect());
        }

        Ok(Self::new(index, columns, values))
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.index.len(), self.columns.len())
    }

    /// Normalizes the table into `{tenor: rate}` data.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::DataValidation` if the table has more than one
    /// row and more than one column, is ragged, or has no date-like labels.
    pub fn to_raw_data(&self) -> CurveResult<RawCurveData> {
        let (rows, cols) = self.shape();
        if rows == 0 || cols == 0 {
            return Err(CurveError::data_validation("table is empty"));
        }
        if rows > 1 && cols > 1 {
            return Err(CurveError::data_validation(format!(
                "table must have a single row or a single column, got shape ({rows}, {cols})"
            )));
        }
        if self.values.len() != rows || self.values.iter().any(|r| r.len() != cols) {
            return Err(CurveError::data_validation(format!(
                "table values do not match shape ({rows}, {cols})"
            )));
        }

        if is_date_like(&self.columns[0]) {
            Ok(self
                .columns
                .iter()
                .cloned()
                .zip(self.values[0].iter().cloned())
                .collect())
        } else if is_date_like(&self.index[0]) {
            Ok(self
                .index
                .iter()
                .cloned()
                .zip(self.values.iter().map(|row| row[0].clone()))
                .collect())
        } else {
            Err(CurveError::data_validation(
                "Must have tenor or date-like values",
            ))
        }
    }
}

impl TryFrom<&RateTable> for RawCurveData {
    type Error = CurveError;

    fn try_from(table: &RateTable) -> CurveResult<Self> {
        table.to_raw_data()
    }
}

impl TryFrom<RateTable> for RawCurveData {
    type Error = CurveError;

    fn try_from(table: RateTable) -> CurveResult<Self> {
        table.to_raw_data()
    }
}

fn parse_cell(cell: &str) -> RateInput {
    cell.parse::<f64>()
        .map_or_else(|_| RateInput::Text(cell.to_string()), RateInput::Number)
}
