//! Core engine for generating synthetic Parquet fixture files.
//!
//! This crate provides the pieces behind `parquet-fixgen`:
//!
//! - A small logical schema model (`schema` module) that declares column
//!   names, semantic types and nullability, and converts to Arrow schemas.
//! - In-memory row sets of generated values (`rowset` module), with `None`
//!   as the designated null marker.
//! - Three fixed fixture patterns (`patterns` module): generic user
//!   records, product-inventory records with Japanese column names and
//!   nullable columns, and an exhaustive matrix of date/time-typed
//!   columns.
//! - A Parquet writer (`writer` module) that applies the declared schema
//!   exactly, never inferring types from values.
//! - A file-set builder (`fileset` module) that materializes each pattern
//!   at its configured row-count scales.
//!
//! Generators take their random source and "now" anchor as explicit
//! parameters, so callers (and tests) control reproducibility; the CLI
//! crate feeds an unseeded thread-local RNG and the current wall clock.
#![deny(missing_docs)]
pub mod error;
pub mod fileset;
pub mod patterns;
pub mod rowset;
pub mod schema;
pub mod writer;
