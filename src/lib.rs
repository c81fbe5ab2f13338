// Record Cleaning Engine

//! # Record Cleaning Engine
//!
//! A record-cleaning engine for tabular data written in Rust.
//!
//! ## Features
//!
//! - Exact duplicate-row removal (first occurrence wins)
//! - Whitespace trimming of string cells
//! - Date standardization across mixed input formats
//! - Missing-value handling (flag, remove or fill)
//! - Aggregate statistics for every run
//! - CSV and JSON adapters for loading and saving tables
//!
//! ## Example
//!
//! ```rust
//! use record_cleaning_engine::{
//!     cleaning::{clean_all, CleaningConfig, DateFormat, MissingValueConfig,
//!                MissingValueStrategy},
//!     data::{Row, Table, Value},
//! };
//!
//! // Build a table of string-keyed rows
//! let mut table = Table::new();
//! table.add_row(Row::from_pairs(vec![
//!     ("name", Value::String("  Alice  ".to_string())),
//!     ("signup", Value::String("15-02-2023".to_string())),
//! ]));
//! table.add_row(Row::from_pairs(vec![
//!     ("name", Value::String("Bob".to_string())),
//!     ("signup", Value::String(String::new())),
//! ]));
//!
//! // Configure the pipeline
//! let config = CleaningConfig {
//!     remove_duplicates: true,
//!     trim_whitespace: true,
//!     date_columns: vec!["signup".to_string()],
//!     date_format: DateFormat::Iso,
//!     missing_values: MissingValueConfig {
//!         strategy: MissingValueStrategy::Fill,
//!         fill_value: "N/A".to_string(),
//!     },
//! };
//!
//! // Run it
//! let result = clean_all(&table, &config).unwrap();
//!
//! assert_eq!(result.stats.original_rows, 2);
//! assert_eq!(result.stats.cells_trimmed, 1);
//! assert_eq!(result.stats.dates_fixed, 1);
//! assert_eq!(result.stats.missing_values_handled, 1);
//! assert_eq!(
//!     result.data.rows[0].get("signup"),
//!     Some(&Value::String("2023-02-15".to_string()))
//! );
//! ```

pub mod cleaning;
pub mod data;
pub mod utils;

// Re-export main types
pub use cleaning::{clean_all, CleaningConfig, CleaningResult, CleaningStats};
pub use data::{Row, Table, Value};
pub use utils::Config;
