//! Pattern 1: generic user records.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::patterns::round_to;
use crate::rowset::{ColumnValues, RowSet};
use crate::schema::{ColumnSpec, FixtureSchema, SemanticType};

/// Widest backward offset (in days) for `created_at`.
const CREATED_WINDOW_DAYS: i64 = 365;

/// Declared schema for the user-record pattern. No column is nullable.
pub fn schema() -> FixtureSchema {
    FixtureSchema::new(vec![
        ColumnSpec::new("id", SemanticType::Int64, false),
        ColumnSpec::new("name", SemanticType::Utf8, false),
        ColumnSpec::new("age", SemanticType::Int64, false),
        ColumnSpec::new("score", SemanticType::Float64, false),
        ColumnSpec::new("active", SemanticType::Bool, false),
        ColumnSpec::new("created_at", SemanticType::Utf8, false),
    ])
    .expect("user pattern schema is statically valid")
}

/// Generate `count` user records anchored at `now`.
pub fn rows<R: Rng>(rng: &mut R, now: DateTime<Utc>, count: usize) -> RowSet {
    let ids = (1..=count as i64).map(Some).collect();
    let names = (1..=count).map(|i| Some(format!("User_{i}"))).collect();
    let ages = (0..count)
        .map(|_| Some(rng.gen_range(18..=80)))
        .collect();
    let scores = (0..count)
        .map(|_| Some(round_to(rng.gen_range(0.0..=100.0), 2)))
        .collect();
    let actives = (0..count).map(|_| Some(rng.gen_bool(0.5))).collect();
    let created = (0..count)
        .map(|_| {
            let dt = now - Duration::days(rng.gen_range(0..=CREATED_WINDOW_DAYS));
            Some(dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string())
        })
        .collect();

    RowSet::new(vec![
        ("id".to_string(), ColumnValues::Int64(ids)),
        ("name".to_string(), ColumnValues::Utf8(names)),
        ("age".to_string(), ColumnValues::Int64(ages)),
        ("score".to_string(), ColumnValues::Float64(scores)),
        ("active".to_string(), ColumnValues::Bool(actives)),
        ("created_at".to_string(), ColumnValues::Utf8(created)),
    ])
}
