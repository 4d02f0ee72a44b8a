//! Error types for fixture generation and writing.

use snafu::prelude::*;

/// Result alias used throughout the core crate.
pub type FixtureResult<T> = std::result::Result<T, FixtureError>;

/// Errors that can occur while materializing fixture files.
///
/// The filesystem variants (`CreateDir`, `CreateFile`) surface directory
/// and file creation failures; the remaining variants are encoding
/// failures, raised when a row set does not satisfy its declared schema
/// or when the Arrow/Parquet layer rejects the assembled batch. Nothing
/// is retried; partial output from an aborted run is left on disk.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FixtureError {
    /// The output directory could not be created.
    #[snafu(display("Failed to create output directory: {path}"))]
    CreateDir {
        /// Directory path that could not be created.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be created.
    #[snafu(display("Failed to create file: {path}"))]
    CreateFile {
        /// File path that could not be created.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The row set holds a different number of columns than the schema
    /// declares.
    #[snafu(display("Schema declares {expected} columns but row set holds {actual}"))]
    ColumnCount {
        /// Number of columns the schema declares.
        expected: usize,
        /// Number of columns present in the row set.
        actual: usize,
    },

    /// A row-set column name does not match the schema at its position.
    #[snafu(display(
        "Column '{column}' at position {index} does not match declared column '{declared}'"
    ))]
    ColumnName {
        /// Column name found in the row set.
        column: String,
        /// Column name the schema declares at this position.
        declared: String,
        /// Zero-based column position.
        index: usize,
    },

    /// A column holds a different number of values than the row count.
    #[snafu(display("Column '{column}' holds {actual} values, expected {expected}"))]
    ColumnLength {
        /// Column name with the mismatched length.
        column: String,
        /// Expected number of values (the row count).
        expected: usize,
        /// Actual number of values present.
        actual: usize,
    },

    /// A null value appeared in a column declared non-nullable.
    #[snafu(display("Unexpected null in non-nullable column '{column}' at row {row}"))]
    UnexpectedNull {
        /// Column declared non-nullable.
        column: String,
        /// Zero-based row index of the offending cell.
        row: usize,
    },

    /// A column's runtime values are incompatible with its declared type.
    #[snafu(display("Column '{column}' holds {actual} values but is declared {declared}"))]
    TypeMismatch {
        /// Column with the incompatible values.
        column: String,
        /// Declared semantic type (display form).
        declared: String,
        /// Runtime value kind found in the row set.
        actual: String,
    },

    /// Arrow rejected the assembled record batch.
    #[snafu(display("Failed to assemble record batch for {path}"))]
    BatchAssembly {
        /// Destination file path, for context.
        path: String,
        /// Underlying Arrow error.
        source: arrow::error::ArrowError,
    },

    /// The Parquet writer failed.
    #[snafu(display("Parquet write failed for {path}"))]
    WriteParquet {
        /// Destination file path.
        path: String,
        /// Underlying Parquet error.
        source: parquet::errors::ParquetError,
    },
}
