//! Tabular dataset types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single typed cell read from a dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Empty cell
    #[default]
    Empty,
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Date with time of day
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Create a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Check if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) if v.fract() == 0.0 && v.abs() < 1e16 => write!(f, "{:.1}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

/// An ordered table of rows: one header row followed by data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column names; `None` when the source had no rows at all
    pub header: Option<Vec<String>>,

    /// Data rows in source order
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Create a dataset with the given header and no data rows.
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: Some(header.into_iter().map(Into::into).collect()),
            rows: Vec::new(),
        }
    }

    /// Create a dataset with no header and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dataset from raw rows where the first row is the header.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let mut rows = rows.into_iter();
        let header = rows
            .next()
            .map(|cells| cells.iter().map(|c| c.to_string()).collect());
        Self {
            header,
            rows: rows.collect(),
        }
    }

    /// Add a data row.
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Header columns, or an empty slice when there is no header.
    pub fn header(&self) -> &[String] {
        self.header.as_deref().unwrap_or(&[])
    }

    /// Number of columns, taken from the header.
    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset has neither header nor rows.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.rows.is_empty()
    }

    /// Iterate over all rows as text, header first, paired with 1-based row indices.
    pub fn indexed_rows(&self) -> impl Iterator<Item = (usize, Vec<String>)> + '_ {
        let header = self.header.iter().cloned();
        let body = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect::<Vec<_>>());
        header.chain(body).enumerate().map(|(i, row)| (i + 1, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::text("EMP1001").to_string(), "EMP1001");
        assert_eq!(CellValue::Int(42).to_string(), "42");
        assert_eq!(CellValue::Float(12345.67).to_string(), "12345.67");
        assert_eq!(CellValue::Float(8000.0).to_string(), "8000.0");
        assert_eq!(CellValue::Float(-3.0).to_string(), "-3.0");
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Empty.to_string(), "");

        let date = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
        assert_eq!(CellValue::Date(date).to_string(), "2022-03-14");
        let dt = date.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(CellValue::DateTime(dt).to_string(), "2022-03-14 00:00:00");
    }

    #[test]
    fn test_from_rows_splits_header() {
        let ds = Dataset::from_rows(vec![
            vec!["id".into(), "name".into()],
            vec!["EMP1001".into(), "Li Wei".into()],
        ]);
        assert_eq!(ds.header(), &["id".to_string(), "name".to_string()]);
        assert_eq!(ds.row_count(), 1);
        assert_eq!(ds.column_count(), 2);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::from_rows(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.column_count(), 0);
        assert_eq!(ds.indexed_rows().count(), 0);
    }

    #[test]
    fn test_indexed_rows_are_one_based() {
        let mut ds = Dataset::new(["id"]);
        ds.push_row(vec![CellValue::Int(1)]);
        let rows: Vec<_> = ds.indexed_rows().collect();
        assert_eq!(rows[0], (1, vec!["id".to_string()]));
        assert_eq!(rows[1], (2, vec!["1".to_string()]));
    }
}
