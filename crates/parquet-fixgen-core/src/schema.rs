//! Fixture schema definitions and conversion to Arrow schemas.
//!
//! This module models the declared shape of a fixture file: an ordered
//! list of columns, each with a name, a semantic type and a nullability
//! flag. The semantic types are logical (a calendar date is a date
//! whether it is stored 32- or 64-bit wide), and the mapping to Arrow
//! physical types lives here so the generators and the writer never
//! hard-code `DataType` values.

use std::{collections::HashSet, fmt, sync::Arc};

use arrow::datatypes::{DataType, Field, Schema, SchemaRef, TimeUnit as ArrowTimeUnit};
use snafu::prelude::*;

/// Sub-second precision units for timestamp and time-of-day columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Whole-second precision.
    Seconds,
    /// Millisecond precision.
    Millis,
    /// Microsecond precision.
    Micros,
    /// Nanosecond precision.
    Nanos,
}

impl TimeUnit {
    fn to_arrow_time_unit(self) -> ArrowTimeUnit {
        match self {
            TimeUnit::Seconds => ArrowTimeUnit::Second,
            TimeUnit::Millis => ArrowTimeUnit::Millisecond,
            TimeUnit::Micros => ArrowTimeUnit::Microsecond,
            TimeUnit::Nanos => ArrowTimeUnit::Nanosecond,
        }
    }

    /// Whether a time-of-day column at this precision uses the 32-bit
    /// physical width (`Time32`). Second and millisecond granularity fit
    /// in 32 bits; microsecond and nanosecond granularity need 64.
    pub fn is_time32(self) -> bool {
        matches!(self, TimeUnit::Seconds | TimeUnit::Millis)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Seconds => write!(f, "s"),
            TimeUnit::Millis => write!(f, "ms"),
            TimeUnit::Micros => write!(f, "us"),
            TimeUnit::Nanos => write!(f, "ns"),
        }
    }
}

/// Physical encoding widths for calendar-date columns.
///
/// Both variants represent the same day-precision calendar range; they
/// differ only in on-disk width (Arrow `Date32` counts days, `Date64`
/// counts milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    /// Days since the Unix epoch, 32-bit.
    Day,
    /// Milliseconds since the Unix epoch, 64-bit.
    Millis,
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateUnit::Day => write!(f, "day"),
            DateUnit::Millis => write!(f, "ms"),
        }
    }
}

/// Semantic data types a fixture column can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    /// Boolean value.
    Bool,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point.
    Float64,
    /// UTF-8 encoded string.
    Utf8,
    /// Calendar date at day precision.
    Date {
        /// Physical encoding width for the date.
        unit: DateUnit,
    },
    /// Timestamp with a declared precision unit.
    Timestamp {
        /// Precision unit for the timestamp.
        unit: TimeUnit,
    },
    /// Time of day with a declared precision unit.
    ///
    /// Second and millisecond precision map to the 32-bit Arrow `Time32`;
    /// microsecond and nanosecond precision map to the 64-bit `Time64`.
    Time {
        /// Precision unit for the time of day.
        unit: TimeUnit,
    },
}

impl SemanticType {
    /// Map this semantic type to its Arrow [`DataType`].
    pub fn to_arrow_datatype(self) -> DataType {
        match self {
            SemanticType::Bool => DataType::Boolean,
            SemanticType::Int64 => DataType::Int64,
            SemanticType::Float64 => DataType::Float64,
            SemanticType::Utf8 => DataType::Utf8,
            SemanticType::Date { unit: DateUnit::Day } => DataType::Date32,
            SemanticType::Date {
                unit: DateUnit::Millis,
            } => DataType::Date64,
            SemanticType::Timestamp { unit } => {
                DataType::Timestamp(unit.to_arrow_time_unit(), None)
            }
            SemanticType::Time { unit } => {
                if unit.is_time32() {
                    DataType::Time32(unit.to_arrow_time_unit())
                } else {
                    DataType::Time64(unit.to_arrow_time_unit())
                }
            }
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Bool => write!(f, "bool"),
            SemanticType::Int64 => write!(f, "int64"),
            SemanticType::Float64 => write!(f, "float64"),
            SemanticType::Utf8 => write!(f, "utf8"),
            SemanticType::Date { unit } => write!(f, "date[{unit}]"),
            SemanticType::Timestamp { unit } => write!(f, "timestamp[{unit}]"),
            SemanticType::Time { unit } => write!(f, "time[{unit}]"),
        }
    }
}

/// Declared column in a fixture schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name as written to the file.
    pub name: String,
    /// Semantic type for the column.
    pub data_type: SemanticType,
    /// Whether the column allows null values.
    pub nullable: bool,
}

impl ColumnSpec {
    /// Shorthand constructor used by the pattern definitions.
    pub fn new(name: impl Into<String>, data_type: SemanticType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    fn to_arrow_field(&self) -> Field {
        Field::new(
            self.name.clone(),
            self.data_type.to_arrow_datatype(),
            self.nullable,
        )
    }
}

/// Errors raised while constructing a fixture schema.
#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum SchemaError {
    /// Duplicate column names are not allowed.
    #[snafu(display("Duplicate column name: {column}"))]
    DuplicateColumn {
        /// The duplicate column name.
        column: String,
    },

    /// Column names must be non-empty.
    #[snafu(display("Empty column name at position {index}"))]
    EmptyColumnName {
        /// Zero-based position of the unnamed column.
        index: usize,
    },
}

/// Ordered, validated set of column declarations for one fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSchema {
    columns: Vec<ColumnSpec>,
}

impl FixtureSchema {
    /// Construct a validated schema (rejects duplicate or empty names).
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for (index, col) in columns.iter().enumerate() {
            ensure!(!col.name.trim().is_empty(), EmptyColumnNameSnafu { index });
            ensure!(
                seen.insert(col.name.clone()),
                DuplicateColumnSnafu {
                    column: col.name.clone(),
                }
            );
        }
        Ok(Self { columns })
    }

    /// Borrow the column declarations in order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Convert this schema to an owned Arrow [`Schema`].
    pub fn to_arrow_schema(&self) -> Schema {
        Schema::new(
            self.columns
                .iter()
                .map(ColumnSpec::to_arrow_field)
                .collect::<Vec<_>>(),
        )
    }

    /// Convert this schema to a shared Arrow [`SchemaRef`].
    pub fn to_arrow_schema_ref(&self) -> SchemaRef {
        Arc::new(self.to_arrow_schema())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_types_map_to_expected_arrow_datatypes() {
        let cases = vec![
            (SemanticType::Bool, DataType::Boolean),
            (SemanticType::Int64, DataType::Int64),
            (SemanticType::Float64, DataType::Float64),
            (SemanticType::Utf8, DataType::Utf8),
            (SemanticType::Date { unit: DateUnit::Day }, DataType::Date32),
            (
                SemanticType::Date {
                    unit: DateUnit::Millis,
                },
                DataType::Date64,
            ),
            (
                SemanticType::Timestamp {
                    unit: TimeUnit::Seconds,
                },
                DataType::Timestamp(ArrowTimeUnit::Second, None),
            ),
            (
                SemanticType::Timestamp {
                    unit: TimeUnit::Nanos,
                },
                DataType::Timestamp(ArrowTimeUnit::Nanosecond, None),
            ),
        ];

        for (semantic, expected) in cases {
            assert_eq!(semantic.to_arrow_datatype(), expected);
        }
    }

    #[test]
    fn time_columns_map_to_declared_physical_width() {
        // Coarse units stay 32-bit, fine units go 64-bit.
        assert_eq!(
            SemanticType::Time {
                unit: TimeUnit::Seconds
            }
            .to_arrow_datatype(),
            DataType::Time32(ArrowTimeUnit::Second)
        );
        assert_eq!(
            SemanticType::Time {
                unit: TimeUnit::Millis
            }
            .to_arrow_datatype(),
            DataType::Time32(ArrowTimeUnit::Millisecond)
        );
        assert_eq!(
            SemanticType::Time {
                unit: TimeUnit::Micros
            }
            .to_arrow_datatype(),
            DataType::Time64(ArrowTimeUnit::Microsecond)
        );
        assert_eq!(
            SemanticType::Time {
                unit: TimeUnit::Nanos
            }
            .to_arrow_datatype(),
            DataType::Time64(ArrowTimeUnit::Nanosecond)
        );
    }

    #[test]
    fn schema_converts_to_arrow_with_names_and_nullability() {
        let schema = FixtureSchema::new(vec![
            ColumnSpec::new("id", SemanticType::Int64, false),
            ColumnSpec::new("score", SemanticType::Float64, true),
        ])
        .expect("valid fixture schema");

        let arrow = schema.to_arrow_schema();
        let expected = Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("score", DataType::Float64, true),
        ]);
        assert_eq!(arrow, expected);
    }

    #[test]
    fn schema_rejects_duplicate_column_names() {
        let err = FixtureSchema::new(vec![
            ColumnSpec::new("id", SemanticType::Int64, false),
            ColumnSpec::new("id", SemanticType::Utf8, false),
        ])
        .unwrap_err();

        assert!(
            matches!(&err, SchemaError::DuplicateColumn { column } if column == "id"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn schema_rejects_empty_column_names() {
        let err = FixtureSchema::new(vec![ColumnSpec::new("  ", SemanticType::Bool, false)])
            .unwrap_err();

        assert!(
            matches!(&err, SchemaError::EmptyColumnName { index: 0 }),
            "unexpected error: {err:?}"
        );
    }
}
