//! Parquet writer for generated row sets.
//!
//! [`write_fixture`] is the single write operation of the crate: it
//! assembles typed Arrow arrays from a [`RowSet`], validates every column
//! against the declared [`FixtureSchema`] (the declared types are applied
//! exactly, never inferred from values), and serializes one Parquet file
//! at the destination path. An existing file at that path is overwritten
//! wholesale. The writer owns the file handle for the duration of the
//! call; `ArrowWriter::close` flushes and releases it before return.

use std::{fs::File, path::Path, sync::Arc};

use arrow::array::{
    ArrayRef, BooleanBuilder, Date32Builder, Date64Builder, Float64Builder, Int64Builder,
    StringBuilder, Time32MillisecondBuilder, Time32SecondBuilder, Time64MicrosecondBuilder,
    Time64NanosecondBuilder, TimestampMicrosecondBuilder, TimestampMillisecondBuilder,
    TimestampNanosecondBuilder, TimestampSecondBuilder,
};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use snafu::prelude::*;

use crate::error::{
    BatchAssemblySnafu, ColumnCountSnafu, ColumnLengthSnafu, ColumnNameSnafu, CreateFileSnafu,
    FixtureResult, TypeMismatchSnafu, UnexpectedNullSnafu, WriteParquetSnafu,
};
use crate::rowset::{ColumnValues, RowSet};
use crate::schema::{ColumnSpec, DateUnit, FixtureSchema, SemanticType, TimeUnit};

/// Assemble one Arrow array for a declared column, checking nullability
/// and declared-type/value compatibility.
fn build_array(spec: &ColumnSpec, values: &ColumnValues) -> FixtureResult<ArrayRef> {
    if !spec.nullable {
        if let Some(row) = values.first_null() {
            return UnexpectedNullSnafu {
                column: spec.name.clone(),
                row,
            }
            .fail();
        }
    }

    let array: ArrayRef = match (spec.data_type, values) {
        (SemanticType::Bool, ColumnValues::Bool(v)) => {
            let mut b = BooleanBuilder::with_capacity(v.len());
            for cell in v {
                b.append_option(*cell);
            }
            Arc::new(b.finish())
        }
        (SemanticType::Int64, ColumnValues::Int64(v)) => {
            let mut b = Int64Builder::with_capacity(v.len());
            for cell in v {
                b.append_option(*cell);
            }
            Arc::new(b.finish())
        }
        (SemanticType::Float64, ColumnValues::Float64(v)) => {
            let mut b = Float64Builder::with_capacity(v.len());
            for cell in v {
                b.append_option(*cell);
            }
            Arc::new(b.finish())
        }
        (SemanticType::Utf8, ColumnValues::Utf8(v)) => {
            let data_capacity = v.iter().flatten().map(String::len).sum();
            let mut b = StringBuilder::with_capacity(v.len(), data_capacity);
            for cell in v {
                b.append_option(cell.as_deref());
            }
            Arc::new(b.finish())
        }
        (SemanticType::Date { unit: DateUnit::Day }, ColumnValues::Date32(v)) => {
            let mut b = Date32Builder::with_capacity(v.len());
            for cell in v {
                b.append_option(*cell);
            }
            Arc::new(b.finish())
        }
        (SemanticType::Date { unit: DateUnit::Millis }, ColumnValues::Date64(v)) => {
            let mut b = Date64Builder::with_capacity(v.len());
            for cell in v {
                b.append_option(*cell);
            }
            Arc::new(b.finish())
        }
        (SemanticType::Timestamp { unit }, ColumnValues::Timestamp(v)) => match unit {
            TimeUnit::Seconds => {
                let mut b = TimestampSecondBuilder::with_capacity(v.len());
                for cell in v {
                    b.append_option(*cell);
                }
                Arc::new(b.finish())
            }
            TimeUnit::Millis => {
                let mut b = TimestampMillisecondBuilder::with_capacity(v.len());
                for cell in v {
                    b.append_option(*cell);
                }
                Arc::new(b.finish())
            }
            TimeUnit::Micros => {
                let mut b = TimestampMicrosecondBuilder::with_capacity(v.len());
                for cell in v {
                    b.append_option(*cell);
                }
                Arc::new(b.finish())
            }
            TimeUnit::Nanos => {
                let mut b = TimestampNanosecondBuilder::with_capacity(v.len());
                for cell in v {
                    b.append_option(*cell);
                }
                Arc::new(b.finish())
            }
        },
        // The 32/64-bit width split is part of the declared type: coarse
        // units only ever pair with Time32 cells, fine units with Time64.
        (
            SemanticType::Time {
                unit: TimeUnit::Seconds,
            },
            ColumnValues::Time32(v),
        ) => {
            let mut b = Time32SecondBuilder::with_capacity(v.len());
            for cell in v {
                b.append_option(*cell);
            }
            Arc::new(b.finish())
        }
        (
            SemanticType::Time {
                unit: TimeUnit::Millis,
            },
            ColumnValues::Time32(v),
        ) => {
            let mut b = Time32MillisecondBuilder::with_capacity(v.len());
            for cell in v {
                b.append_option(*cell);
            }
            Arc::new(b.finish())
        }
        (
            SemanticType::Time {
                unit: TimeUnit::Micros,
            },
            ColumnValues::Time64(v),
        ) => {
            let mut b = Time64MicrosecondBuilder::with_capacity(v.len());
            for cell in v {
                b.append_option(*cell);
            }
            Arc::new(b.finish())
        }
        (
            SemanticType::Time {
                unit: TimeUnit::Nanos,
            },
            ColumnValues::Time64(v),
        ) => {
            let mut b = Time64NanosecondBuilder::with_capacity(v.len());
            for cell in v {
                b.append_option(*cell);
            }
            Arc::new(b.finish())
        }
        (declared, actual) => {
            return TypeMismatchSnafu {
                column: spec.name.clone(),
                declared: declared.to_string(),
                actual: actual.kind().to_string(),
            }
            .fail();
        }
    };

    Ok(array)
}

/// Serialize a row set into a single Parquet file at `path`.
///
/// Returns the number of rows written. Fails if the row set does not
/// conform to the schema (column count, names, lengths, nullability,
/// value kinds) or if the filesystem/Parquet layer raises.
pub fn write_fixture(path: &Path, schema: &FixtureSchema, rows: &RowSet) -> FixtureResult<usize> {
    let specs = schema.columns();
    let columns = rows.columns();
    ensure!(
        specs.len() == columns.len(),
        ColumnCountSnafu {
            expected: specs.len(),
            actual: columns.len(),
        }
    );

    let row_count = rows.row_count();
    let mut arrays = Vec::with_capacity(columns.len());
    for (index, (spec, (name, values))) in specs.iter().zip(columns).enumerate() {
        ensure!(
            spec.name == *name,
            ColumnNameSnafu {
                column: name.clone(),
                declared: spec.name.clone(),
                index,
            }
        );
        ensure!(
            values.len() == row_count,
            ColumnLengthSnafu {
                column: name.clone(),
                expected: row_count,
                actual: values.len(),
            }
        );
        arrays.push(build_array(spec, values)?);
    }

    let path_str = path.display().to_string();
    let arrow_schema = schema.to_arrow_schema_ref();
    let batch = RecordBatch::try_new(arrow_schema.clone(), arrays).context(BatchAssemblySnafu {
        path: path_str.clone(),
    })?;

    // std::fs::File because the Arrow writer requires std::io::Write;
    // File::create truncates, which is the overwrite-wholesale contract.
    let file = File::create(path).context(CreateFileSnafu {
        path: path_str.clone(),
    })?;

    let mut writer = ArrowWriter::try_new(file, arrow_schema, None).context(WriteParquetSnafu {
        path: path_str.clone(),
    })?;
    writer.write(&batch).context(WriteParquetSnafu {
        path: path_str.clone(),
    })?;
    writer.close().context(WriteParquetSnafu { path: path_str })?;

    log::debug!("wrote {row_count} rows to {}", path.display());
    Ok(row_count)
}
