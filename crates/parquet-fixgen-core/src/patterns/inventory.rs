//! Pattern 2: product-inventory records with Japanese column names.
//!
//! Four numeric columns are nullable, each with its own fixed null
//! probability. The value draw always happens first; nulling is an
//! independent per-cell override afterwards.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::patterns::{days_since_epoch, round_to};
use crate::rowset::{ColumnValues, RowSet};
use crate::schema::{ColumnSpec, DateUnit, FixtureSchema, SemanticType, TimeUnit};

/// Product categories drawn for `カテゴリ`.
pub const CATEGORIES: [&str; 7] = [
    "Electronics",
    "Clothing",
    "Food",
    "Books",
    "Toys",
    "Home",
    "Sports",
];

/// Stock statuses drawn for `ステータス`.
pub const STATUSES: [&str; 4] = ["in_stock", "out_of_stock", "discontinued", "pre_order"];

/// Tag vocabulary sampled for `タグ`.
pub const TAGS: [&str; 6] = ["new", "sale", "popular", "limited", "eco-friendly", "premium"];

/// Null probability for `価格`.
pub const PRICE_NULL_RATE: f64 = 0.10;
/// Null probability for `在庫数`.
pub const STOCK_NULL_RATE: f64 = 0.15;
/// Null probability for `評価`.
pub const RATING_NULL_RATE: f64 = 0.20;
/// Null probability for `割引率`.
pub const DISCOUNT_NULL_RATE: f64 = 0.30;

/// Release dates fall within this many days of the window start.
const RELEASE_WINDOW_DAYS: i64 = 1825;
/// `最終更新日時` offsets reach back this many hours from `now`.
const UPDATE_WINDOW_HOURS: i64 = 8760;

fn release_window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid window start date")
}

/// Replace `value` with the null marker at probability `rate`.
fn maybe_null<R: Rng, T>(rng: &mut R, rate: f64, value: T) -> Option<T> {
    if rng.gen::<f64>() < rate {
        None
    } else {
        Some(value)
    }
}

/// Comma-joined random subset (size 0..=3, no repeats) of [`TAGS`];
/// empty string when the subset is empty.
fn draw_tags<R: Rng>(rng: &mut R) -> String {
    let mut pool = TAGS;
    pool.shuffle(rng);
    let size = rng.gen_range(0..=3);
    pool[..size].join(",")
}

/// Declared schema for the product-inventory pattern.
pub fn schema() -> FixtureSchema {
    FixtureSchema::new(vec![
        ColumnSpec::new("商品ID", SemanticType::Utf8, false),
        ColumnSpec::new("商品名", SemanticType::Utf8, false),
        ColumnSpec::new("カテゴリ", SemanticType::Utf8, false),
        ColumnSpec::new("価格", SemanticType::Float64, true),
        ColumnSpec::new("在庫数", SemanticType::Int64, true),
        ColumnSpec::new("ステータス", SemanticType::Utf8, false),
        ColumnSpec::new("評価", SemanticType::Float64, true),
        ColumnSpec::new("レビュー数", SemanticType::Int64, false),
        ColumnSpec::new("発売日", SemanticType::Date { unit: DateUnit::Day }, false),
        ColumnSpec::new(
            "最終更新日時",
            SemanticType::Timestamp {
                unit: TimeUnit::Micros,
            },
            false,
        ),
        ColumnSpec::new("割引率", SemanticType::Float64, true),
        ColumnSpec::new("在庫警告", SemanticType::Bool, false),
        ColumnSpec::new("タグ", SemanticType::Utf8, false),
    ])
    .expect("inventory pattern schema is statically valid")
}

/// Generate `count` inventory records anchored at `now`.
pub fn rows<R: Rng>(rng: &mut R, now: DateTime<Utc>, count: usize) -> RowSet {
    let window_start = release_window_start();

    let product_ids = (1..=count)
        .map(|i| Some(format!("PROD-{i:06}")))
        .collect();
    let product_names = (1..=count)
        .map(|i| {
            let letter = (b'A' + (i % 26) as u8) as char;
            Some(format!("Product {letter}{i}"))
        })
        .collect();
    let categories = (0..count)
        .map(|_| Some(CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string()))
        .collect();
    let prices = (0..count)
        .map(|_| {
            let price = round_to(rng.gen_range(10.0..=9999.99), 2);
            maybe_null(rng, PRICE_NULL_RATE, price)
        })
        .collect();
    let stock_counts = (0..count)
        .map(|_| {
            let stock = rng.gen_range(0..=1000);
            maybe_null(rng, STOCK_NULL_RATE, stock)
        })
        .collect();
    let statuses = (0..count)
        .map(|_| Some(STATUSES[rng.gen_range(0..STATUSES.len())].to_string()))
        .collect();
    let ratings = (0..count)
        .map(|_| {
            let rating = round_to(rng.gen_range(0.0..=5.0), 1);
            maybe_null(rng, RATING_NULL_RATE, rating)
        })
        .collect();
    let review_counts = (0..count)
        .map(|_| Some(rng.gen_range(0..=10_000)))
        .collect();
    let release_dates = (0..count)
        .map(|_| {
            let date = window_start + Duration::days(rng.gen_range(0..=RELEASE_WINDOW_DAYS));
            Some(days_since_epoch(date))
        })
        .collect();
    let updated_at = (0..count)
        .map(|_| {
            let dt = now - Duration::hours(rng.gen_range(0..=UPDATE_WINDOW_HOURS));
            Some(dt.timestamp_micros())
        })
        .collect();
    let discount_rates = (0..count)
        .map(|_| {
            let discount = round_to(rng.gen_range(0.0..=50.0), 1);
            maybe_null(rng, DISCOUNT_NULL_RATE, discount)
        })
        .collect();
    let stock_alerts = (0..count).map(|_| Some(rng.gen_bool(0.5))).collect();
    let tags = (0..count).map(|_| Some(draw_tags(rng))).collect();

    RowSet::new(vec![
        ("商品ID".to_string(), ColumnValues::Utf8(product_ids)),
        ("商品名".to_string(), ColumnValues::Utf8(product_names)),
        ("カテゴリ".to_string(), ColumnValues::Utf8(categories)),
        ("価格".to_string(), ColumnValues::Float64(prices)),
        ("在庫数".to_string(), ColumnValues::Int64(stock_counts)),
        ("ステータス".to_string(), ColumnValues::Utf8(statuses)),
        ("評価".to_string(), ColumnValues::Float64(ratings)),
        ("レビュー数".to_string(), ColumnValues::Int64(review_counts)),
        ("発売日".to_string(), ColumnValues::Date32(release_dates)),
        ("最終更新日時".to_string(), ColumnValues::Timestamp(updated_at)),
        ("割引率".to_string(), ColumnValues::Float64(discount_rates)),
        ("在庫警告".to_string(), ColumnValues::Bool(stock_alerts)),
        ("タグ".to_string(), ColumnValues::Utf8(tags)),
    ])
}
