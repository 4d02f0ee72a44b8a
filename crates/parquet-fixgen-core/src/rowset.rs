//! In-memory row sets of generated values.
//!
//! A [`RowSet`] is the ordered mapping from column name to a column of
//! generated cells, built by a pattern generator and consumed exactly
//! once by the writer. Every [`ColumnValues`] variant stores
//! `Vec<Option<…>>`; `None` is the designated null marker, distinct from
//! any real value. Date, timestamp and time-of-day cells are kept as raw
//! integers in the unit the schema declares for the column.

/// One column of generated cells.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// Boolean cells.
    Bool(Vec<Option<bool>>),
    /// 64-bit integer cells.
    Int64(Vec<Option<i64>>),
    /// 64-bit float cells.
    Float64(Vec<Option<f64>>),
    /// UTF-8 string cells.
    Utf8(Vec<Option<String>>),
    /// Calendar dates as days since the Unix epoch (32-bit width).
    Date32(Vec<Option<i32>>),
    /// Calendar dates as milliseconds since the Unix epoch (64-bit width).
    Date64(Vec<Option<i64>>),
    /// Timestamps in the column's declared precision unit.
    Timestamp(Vec<Option<i64>>),
    /// Time of day in the column's declared unit, 32-bit width.
    Time32(Vec<Option<i32>>),
    /// Time of day in the column's declared unit, 64-bit width.
    Time64(Vec<Option<i64>>),
}

impl ColumnValues {
    /// Number of cells in this column.
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Bool(v) => v.len(),
            ColumnValues::Int64(v) => v.len(),
            ColumnValues::Float64(v) => v.len(),
            ColumnValues::Utf8(v) => v.len(),
            ColumnValues::Date32(v) => v.len(),
            ColumnValues::Date64(v) => v.len(),
            ColumnValues::Timestamp(v) => v.len(),
            ColumnValues::Time32(v) => v.len(),
            ColumnValues::Time64(v) => v.len(),
        }
    }

    /// Whether the column holds no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row index of the first null cell, if any.
    pub fn first_null(&self) -> Option<usize> {
        match self {
            ColumnValues::Bool(v) => v.iter().position(Option::is_none),
            ColumnValues::Int64(v) => v.iter().position(Option::is_none),
            ColumnValues::Float64(v) => v.iter().position(Option::is_none),
            ColumnValues::Utf8(v) => v.iter().position(Option::is_none),
            ColumnValues::Date32(v) => v.iter().position(Option::is_none),
            ColumnValues::Date64(v) => v.iter().position(Option::is_none),
            ColumnValues::Timestamp(v) => v.iter().position(Option::is_none),
            ColumnValues::Time32(v) => v.iter().position(Option::is_none),
            ColumnValues::Time64(v) => v.iter().position(Option::is_none),
        }
    }

    /// Short value-kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ColumnValues::Bool(_) => "bool",
            ColumnValues::Int64(_) => "int64",
            ColumnValues::Float64(_) => "float64",
            ColumnValues::Utf8(_) => "utf8",
            ColumnValues::Date32(_) => "date32",
            ColumnValues::Date64(_) => "date64",
            ColumnValues::Timestamp(_) => "timestamp",
            ColumnValues::Time32(_) => "time32",
            ColumnValues::Time64(_) => "time64",
        }
    }
}

/// Ordered set of named, generated columns for one fixture file.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    columns: Vec<(String, ColumnValues)>,
}

impl RowSet {
    /// Wrap generated columns in file order.
    pub fn new(columns: Vec<(String, ColumnValues)>) -> Self {
        Self { columns }
    }

    /// Row count, taken from the first column (0 for an empty set).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, v)| v.len())
    }

    /// Borrow the named columns in order.
    pub fn columns(&self) -> &[(String, ColumnValues)] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count_comes_from_first_column() {
        let rows = RowSet::new(vec![
            ("a".to_string(), ColumnValues::Int64(vec![Some(1), Some(2)])),
            (
                "b".to_string(),
                ColumnValues::Bool(vec![Some(true), Some(false)]),
            ),
        ]);
        assert_eq!(rows.row_count(), 2);
        assert_eq!(RowSet::new(vec![]).row_count(), 0);
    }

    #[test]
    fn first_null_reports_position() {
        let col = ColumnValues::Float64(vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(col.first_null(), Some(1));

        let full = ColumnValues::Utf8(vec![Some("x".to_string())]);
        assert_eq!(full.first_null(), None);
    }
}
