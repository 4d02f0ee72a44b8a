//! Write fixture files and read them back through the Parquet reader,
//! checking that the declared schema and values survive the trip.

use std::fs::File;
use std::path::Path;

use arrow::array::{Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, TimeUnit as ArrowTimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, TimeZone, Utc};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use parquet_fixgen_core::fileset::{run_pattern, Pattern};
use parquet_fixgen_core::writer::write_fixture;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid UTC timestamp")
}

fn read_back(path: &Path) -> Result<(arrow::datatypes::SchemaRef, Vec<RecordBatch>), Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let batches = builder.build()?.collect::<Result<Vec<_>, _>>()?;
    Ok((schema, batches))
}

fn total_rows(batches: &[RecordBatch]) -> usize {
    batches.iter().map(RecordBatch::num_rows).sum()
}

#[test]
fn users_pattern_round_trips_names_types_and_values() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("users.parquet");

    let mut rng = StdRng::seed_from_u64(42);
    let schema = Pattern::Users.schema();
    let rows = Pattern::Users.rows(&mut rng, fixed_now(), 10);
    write_fixture(&path, &schema, &rows)?;

    let (read_schema, batches) = read_back(&path)?;
    let names: Vec<&str> = read_schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, ["id", "name", "age", "score", "active", "created_at"]);
    assert_eq!(total_rows(&batches), 10);

    let batch = &batches[0];
    let ids = batch
        .column(0)
        .as_any()
        .downcast_ref::<Int64Array>()
        .expect("id as int64");
    let expected: Vec<i64> = (1..=10).collect();
    assert_eq!(ids.values().to_vec(), expected);

    let user_names = batch
        .column(1)
        .as_any()
        .downcast_ref::<StringArray>()
        .expect("name as utf8");
    for (i, name) in user_names.iter().enumerate() {
        assert_eq!(name, Some(format!("User_{}", i + 1).as_str()));
    }

    for field in read_schema.fields() {
        assert!(!field.is_nullable(), "unexpected nullable user column");
    }
    Ok(())
}

#[test]
fn inventory_pattern_reads_back_with_declared_schema_despite_nulls() -> TestResult {
    let tmp = TempDir::new()?;
    let out_dir = run_pattern(
        tmp.path(),
        Pattern::Inventory,
        &mut StdRng::seed_from_u64(42),
        fixed_now(),
    )?;
    assert!(out_dir.ends_with("test_data2"));

    let path = out_dir.join("small2.parquet");
    let (read_schema, batches) = read_back(&path)?;
    assert_eq!(total_rows(&batches), 10);

    let declared = Pattern::Inventory.schema();
    for (spec, field) in declared.columns().iter().zip(read_schema.fields()) {
        assert_eq!(&spec.name, field.name());
        assert_eq!(&spec.data_type.to_arrow_datatype(), field.data_type());
        assert_eq!(spec.nullable, field.is_nullable(), "nullability for {}", spec.name);
    }
    Ok(())
}

#[test]
fn datetime_pattern_preserves_declared_units_and_widths() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("datetimes.parquet");

    let mut rng = StdRng::seed_from_u64(42);
    let schema = Pattern::DateTimes.schema();
    let rows = Pattern::DateTimes.rows(&mut rng, fixed_now(), 100);
    write_fixture(&path, &schema, &rows)?;

    let (read_schema, batches) = read_back(&path)?;
    assert_eq!(total_rows(&batches), 100);

    let expect = |name: &str, data_type: DataType| {
        let field = read_schema
            .field_with_name(name)
            .unwrap_or_else(|_| panic!("missing column {name}"));
        assert_eq!(field.data_type(), &data_type, "data type for {name}");
    };

    expect("発売日_Date32", DataType::Date32);
    expect("登録日_Date64", DataType::Date64);
    // A second-precision timestamp must not silently gain sub-second
    // precision on the way through the file.
    expect(
        "作成日時_Timestamp秒",
        DataType::Timestamp(ArrowTimeUnit::Second, None),
    );
    expect(
        "更新日時_Timestampミリ秒",
        DataType::Timestamp(ArrowTimeUnit::Millisecond, None),
    );
    expect(
        "処理日時_Timestampマイクロ秒",
        DataType::Timestamp(ArrowTimeUnit::Microsecond, None),
    );
    expect(
        "ログ日時_Timestampナノ秒",
        DataType::Timestamp(ArrowTimeUnit::Nanosecond, None),
    );
    expect("開始時刻_Time32秒", DataType::Time32(ArrowTimeUnit::Second));
    expect(
        "終了時刻_Time32ミリ秒",
        DataType::Time32(ArrowTimeUnit::Millisecond),
    );
    expect(
        "計測時刻_Time64マイクロ秒",
        DataType::Time64(ArrowTimeUnit::Microsecond),
    );
    expect(
        "精密時刻_Time64ナノ秒",
        DataType::Time64(ArrowTimeUnit::Nanosecond),
    );
    Ok(())
}

#[test]
fn every_configured_scale_writes_the_declared_row_count() -> TestResult {
    let tmp = TempDir::new()?;
    let mut rng = StdRng::seed_from_u64(42);
    let now = fixed_now();

    for pattern in [Pattern::Users, Pattern::Inventory, Pattern::DateTimes] {
        let out_dir = run_pattern(tmp.path(), pattern, &mut rng, now)?;
        for (filename, count) in pattern.file_plan() {
            let path = out_dir.join(filename);
            let (read_schema, batches) = read_back(&path)?;
            assert_eq!(
                total_rows(&batches),
                *count,
                "row count for {}",
                path.display()
            );
            assert_eq!(
                read_schema.fields().len(),
                pattern.schema().columns().len(),
                "column count for {}",
                path.display()
            );
        }
    }
    Ok(())
}

#[test]
fn rerunning_a_pattern_overwrites_in_place() -> TestResult {
    let tmp = TempDir::new()?;
    let mut rng = StdRng::seed_from_u64(42);
    let now = fixed_now();

    let first = run_pattern(tmp.path(), Pattern::DateTimes, &mut rng, now)?;
    let second = run_pattern(tmp.path(), Pattern::DateTimes, &mut rng, now)?;
    assert_eq!(first, second);

    let (_, batches) = read_back(&second.join("small3.parquet"))?;
    assert_eq!(total_rows(&batches), 10);
    Ok(())
}

#[test]
fn zero_rows_still_produce_a_readable_file() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("empty.parquet");

    let mut rng = StdRng::seed_from_u64(42);
    let schema = Pattern::Users.schema();
    let rows = Pattern::Users.rows(&mut rng, fixed_now(), 0);
    write_fixture(&path, &schema, &rows)?;

    let (read_schema, batches) = read_back(&path)?;
    assert_eq!(total_rows(&batches), 0);
    assert_eq!(read_schema.fields().len(), 6);
    Ok(())
}
