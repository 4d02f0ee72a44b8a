//! Per-pattern file plans and the build loop that materializes them.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rand::Rng;
use snafu::prelude::*;

use crate::error::{CreateDirSnafu, FixtureResult};
use crate::patterns::{datetimes, inventory, users};
use crate::rowset::RowSet;
use crate::schema::FixtureSchema;
use crate::writer::write_fixture;

/// Fixture pattern selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Pattern 1: generic user records.
    Users,
    /// Pattern 2: product-inventory records with nullable columns.
    Inventory,
    /// Pattern 3: date/time type matrix.
    DateTimes,
}

impl Pattern {
    /// Subdirectory (under the base directory) this pattern writes into.
    pub fn subdir(self) -> &'static str {
        match self {
            Pattern::Users => "test_data",
            Pattern::Inventory => "test_data2",
            Pattern::DateTimes => "test_data3",
        }
    }

    /// Fixed, ordered (filename, row count) plan for this pattern.
    pub fn file_plan(self) -> &'static [(&'static str, usize)] {
        match self {
            Pattern::Users => &[
                ("small.parquet", 10),
                ("medium.parquet", 100),
                ("large.parquet", 1000),
                ("xlarge.parquet", 10000),
            ],
            Pattern::Inventory => &[
                ("small2.parquet", 10),
                ("medium2.parquet", 100),
                ("large2.parquet", 1000),
                ("xlarge2.parquet", 10000),
            ],
            Pattern::DateTimes => &[("small3.parquet", 10), ("medium3.parquet", 100)],
        }
    }

    /// Declared schema for this pattern.
    pub fn schema(self) -> FixtureSchema {
        match self {
            Pattern::Users => users::schema(),
            Pattern::Inventory => inventory::schema(),
            Pattern::DateTimes => datetimes::schema(),
        }
    }

    /// Generate `count` rows for this pattern. The date/time matrix is
    /// anchored at a fixed window start and ignores `now`.
    pub fn rows<R: Rng>(self, rng: &mut R, now: DateTime<Utc>, count: usize) -> RowSet {
        match self {
            Pattern::Users => users::rows(rng, now, count),
            Pattern::Inventory => inventory::rows(rng, now, count),
            Pattern::DateTimes => datetimes::rows(rng, count),
        }
    }
}

/// Materialize every file in `pattern`'s plan under `base_dir`.
///
/// Creates `base_dir/<subdir>` first (parents included; an existing
/// directory is not an error), then generates and writes each
/// (filename, row count) pair in order, printing one confirmation line
/// per file and a final summary naming the output directory. Returns
/// that directory. The first failure aborts the run; files written
/// earlier in the same run are left in place.
pub fn run_pattern<R: Rng>(
    base_dir: &Path,
    pattern: Pattern,
    rng: &mut R,
    now: DateTime<Utc>,
) -> FixtureResult<PathBuf> {
    let out_dir = base_dir.join(pattern.subdir());
    fs::create_dir_all(&out_dir).context(CreateDirSnafu {
        path: out_dir.display().to_string(),
    })?;
    log::debug!("generating pattern files in {}", out_dir.display());

    let schema = pattern.schema();
    for (filename, count) in pattern.file_plan() {
        let path = out_dir.join(filename);
        let rows = pattern.rows(rng, now, *count);
        let written = write_fixture(&path, &schema, &rows)?;
        println!("Created: {} ({written} rows)", path.display());
    }

    println!("\nAll fixture files created in: {}", out_dir.display());
    Ok(out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_plans_match_the_configured_scales() {
        let counts: Vec<usize> = Pattern::Users.file_plan().iter().map(|(_, n)| *n).collect();
        assert_eq!(counts, vec![10, 100, 1000, 10000]);
        assert_eq!(
            Pattern::Inventory.file_plan().len(),
            Pattern::Users.file_plan().len()
        );
        assert_eq!(Pattern::DateTimes.file_plan().len(), 2);
    }

    #[test]
    fn subdirs_are_distinct_per_pattern() {
        let subdirs = [
            Pattern::Users.subdir(),
            Pattern::Inventory.subdir(),
            Pattern::DateTimes.subdir(),
        ];
        assert_eq!(subdirs, ["test_data", "test_data2", "test_data3"]);
    }

    #[test]
    fn schema_and_rows_agree_on_column_order() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();

        for pattern in [Pattern::Users, Pattern::Inventory, Pattern::DateTimes] {
            let schema = pattern.schema();
            let rows = pattern.rows(&mut rng, now, 3);
            assert_eq!(schema.columns().len(), rows.columns().len());
            for (spec, (name, values)) in schema.columns().iter().zip(rows.columns()) {
                assert_eq!(&spec.name, name);
                assert_eq!(values.len(), 3);
            }
        }
    }
}
