//! Pattern 3: exhaustive matrix of date/time-typed columns.
//!
//! Twelve columns covering both date widths, all four timestamp
//! precision units and all four time-of-day precision units, anchored at
//! a fixed window start rather than the wall clock. The nanosecond
//! columns reuse the microsecond-range draw scaled by 1000, matching the
//! fixtures this generator replaces.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rand::Rng;

use crate::patterns::days_since_epoch;
use crate::rowset::{ColumnValues, RowSet};
use crate::schema::{ColumnSpec, DateUnit, FixtureSchema, SemanticType, TimeUnit};

/// Calendar window width for the date columns, in days.
const WINDOW_DAYS: i64 = 1825;
/// Timestamp window width, in seconds (five years).
const WINDOW_SECS: i64 = 157_680_000;

const MILLIS_PER_DAY: i64 = 86_400_000;

fn window_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid window start date")
}

fn window_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .expect("valid UTC timestamp")
}

/// Uniform second-of-day drawn the way a clock face reads: independent
/// hour, minute and second draws.
fn random_second_of_day<R: Rng>(rng: &mut R) -> i64 {
    let hour: i64 = rng.gen_range(0..24);
    let minute: i64 = rng.gen_range(0..60);
    let second: i64 = rng.gen_range(0..60);
    hour * 3600 + minute * 60 + second
}

/// Declared schema for the date/time-matrix pattern.
pub fn schema() -> FixtureSchema {
    FixtureSchema::new(vec![
        ColumnSpec::new("ID", SemanticType::Int64, false),
        ColumnSpec::new(
            "発売日_Date32",
            SemanticType::Date { unit: DateUnit::Day },
            false,
        ),
        ColumnSpec::new(
            "登録日_Date64",
            SemanticType::Date {
                unit: DateUnit::Millis,
            },
            false,
        ),
        ColumnSpec::new(
            "作成日時_Timestamp秒",
            SemanticType::Timestamp {
                unit: TimeUnit::Seconds,
            },
            false,
        ),
        ColumnSpec::new(
            "更新日時_Timestampミリ秒",
            SemanticType::Timestamp {
                unit: TimeUnit::Millis,
            },
            false,
        ),
        ColumnSpec::new(
            "処理日時_Timestampマイクロ秒",
            SemanticType::Timestamp {
                unit: TimeUnit::Micros,
            },
            false,
        ),
        ColumnSpec::new(
            "ログ日時_Timestampナノ秒",
            SemanticType::Timestamp {
                unit: TimeUnit::Nanos,
            },
            false,
        ),
        ColumnSpec::new(
            "開始時刻_Time32秒",
            SemanticType::Time {
                unit: TimeUnit::Seconds,
            },
            false,
        ),
        ColumnSpec::new(
            "終了時刻_Time32ミリ秒",
            SemanticType::Time {
                unit: TimeUnit::Millis,
            },
            false,
        ),
        ColumnSpec::new(
            "計測時刻_Time64マイクロ秒",
            SemanticType::Time {
                unit: TimeUnit::Micros,
            },
            false,
        ),
        ColumnSpec::new(
            "精密時刻_Time64ナノ秒",
            SemanticType::Time {
                unit: TimeUnit::Nanos,
            },
            false,
        ),
        ColumnSpec::new("説明", SemanticType::Utf8, false),
    ])
    .expect("date/time pattern schema is statically valid")
}

/// Generate `count` date/time-matrix records.
pub fn rows<R: Rng>(rng: &mut R, count: usize) -> RowSet {
    let start_date = window_start_date();
    let start = window_start();

    let ids = (1..=count as i64).map(Some).collect();
    let date32 = (0..count)
        .map(|_| {
            let date = start_date + Duration::days(rng.gen_range(0..=WINDOW_DAYS));
            Some(days_since_epoch(date))
        })
        .collect();
    let date64 = (0..count)
        .map(|_| {
            let date = start_date + Duration::days(rng.gen_range(0..=WINDOW_DAYS));
            Some(days_since_epoch(date) as i64 * MILLIS_PER_DAY)
        })
        .collect();
    let ts_seconds = (0..count)
        .map(|_| Some(start.timestamp() + rng.gen_range(0..=WINDOW_SECS)))
        .collect();
    let ts_millis = (0..count)
        .map(|_| Some(start.timestamp_millis() + rng.gen_range(0..=WINDOW_SECS * 1_000)))
        .collect();
    let ts_micros = (0..count)
        .map(|_| Some(start.timestamp_micros() + rng.gen_range(0..=WINDOW_SECS * 1_000_000)))
        .collect();
    // Micros-range draw scaled up, not a true nanosecond-resolution draw.
    let ts_nanos = (0..count)
        .map(|_| {
            Some((start.timestamp_micros() + rng.gen_range(0..=WINDOW_SECS * 1_000_000)) * 1_000)
        })
        .collect();
    let time32_seconds = (0..count)
        .map(|_| Some(random_second_of_day(rng) as i32))
        .collect();
    let time32_millis = (0..count)
        .map(|_| {
            let micros: i64 = rng.gen_range(0..=999_999);
            Some((random_second_of_day(rng) * 1_000 + micros / 1_000) as i32)
        })
        .collect();
    let time64_micros = (0..count)
        .map(|_| {
            let micros: i64 = rng.gen_range(0..=999_999);
            Some(random_second_of_day(rng) * 1_000_000 + micros)
        })
        .collect();
    let time64_nanos = (0..count)
        .map(|_| {
            let micros: i64 = rng.gen_range(0..=999_999);
            Some((random_second_of_day(rng) * 1_000_000 + micros) * 1_000)
        })
        .collect();
    let descriptions = (1..=count)
        .map(|i| Some(format!("サンプルデータ{i}")))
        .collect();

    RowSet::new(vec![
        ("ID".to_string(), ColumnValues::Int64(ids)),
        ("発売日_Date32".to_string(), ColumnValues::Date32(date32)),
        ("登録日_Date64".to_string(), ColumnValues::Date64(date64)),
        (
            "作成日時_Timestamp秒".to_string(),
            ColumnValues::Timestamp(ts_seconds),
        ),
        (
            "更新日時_Timestampミリ秒".to_string(),
            ColumnValues::Timestamp(ts_millis),
        ),
        (
            "処理日時_Timestampマイクロ秒".to_string(),
            ColumnValues::Timestamp(ts_micros),
        ),
        (
            "ログ日時_Timestampナノ秒".to_string(),
            ColumnValues::Timestamp(ts_nanos),
        ),
        (
            "開始時刻_Time32秒".to_string(),
            ColumnValues::Time32(time32_seconds),
        ),
        (
            "終了時刻_Time32ミリ秒".to_string(),
            ColumnValues::Time32(time32_millis),
        ),
        (
            "計測時刻_Time64マイクロ秒".to_string(),
            ColumnValues::Time64(time64_micros),
        ),
        (
            "精密時刻_Time64ナノ秒".to_string(),
            ColumnValues::Time64(time64_nanos),
        ),
        ("説明".to_string(), ColumnValues::Utf8(descriptions)),
    ])
}
