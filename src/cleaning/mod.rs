// Cleaning module: the transform pipeline and its configuration

mod dates;
mod dedupe;
mod missing;
mod trim;

pub use dates::{format_date, parse_date, standardize_dates};
pub use dedupe::remove_duplicate_rows;
pub use missing::handle_missing_values;
pub use trim::trim_whitespace;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::Table;

/// Marker written into a cell whose date could not be parsed.
pub const INVALID_DATE_MARKER: &str = "[INVALID DATE] ";

/// Marker written into a missing cell under the `Flag` strategy.
pub const MISSING_MARKER: &str = "[MISSING]";

/// Target format for standardized dates.
///
/// The named variants cover the common layouts; `Custom` holds a pattern
/// with literal `YYYY`, `MM` and `DD` tokens and arbitrary separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateFormat {
    Iso,
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
    Custom(String),
}

impl DateFormat {
    /// The pattern string this format renders as.
    pub fn pattern(&self) -> &str {
        match self {
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::YearMonthDay => "YYYY/MM/DD",
            DateFormat::Custom(p) => p,
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat::Iso
    }
}

impl From<String> for DateFormat {
    fn from(s: String) -> Self {
        match s.as_str() {
            "YYYY-MM-DD" => DateFormat::Iso,
            "DD/MM/YYYY" => DateFormat::DayMonthYear,
            "MM/DD/YYYY" => DateFormat::MonthDayYear,
            "YYYY/MM/DD" => DateFormat::YearMonthDay,
            _ => DateFormat::Custom(s),
        }
    }
}

impl From<DateFormat> for String {
    fn from(f: DateFormat) -> Self {
        f.pattern().to_string()
    }
}

/// Strategy for cells that are null or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingValueStrategy {
    Flag,
    Remove,
    Fill,
}

impl Default for MissingValueStrategy {
    fn default() -> Self {
        MissingValueStrategy::Flag
    }
}

/// Missing-value stage configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MissingValueConfig {
    #[serde(default)]
    pub strategy: MissingValueStrategy,
    #[serde(default)]
    pub fill_value: String,
}

/// Describes one pipeline run. Caller-owned, never retained by the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CleaningConfig {
    #[serde(default)]
    pub remove_duplicates: bool,
    #[serde(default)]
    pub trim_whitespace: bool,
    #[serde(default)]
    pub date_columns: Vec<String>,
    #[serde(default)]
    pub date_format: DateFormat,
    #[serde(default)]
    pub missing_values: MissingValueConfig,
}

/// Aggregate counters for one pipeline run.
///
/// `missing_values_handled` counts rows under the `Remove` strategy and
/// cells under `Flag`/`Fill`; the unit is strategy-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleaningStats {
    pub original_rows: usize,
    pub final_rows: usize,
    pub duplicates_removed: usize,
    pub dates_fixed: usize,
    pub cells_trimmed: usize,
    pub missing_values_handled: usize,
}

/// Result of a pipeline run: the cleaned table and what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct CleaningResult {
    pub data: Table,
    pub stats: CleaningStats,
}

/// Represents an invocation-level error in the cleaning module.
///
/// Per-cell data problems (unparseable dates, missing fields) are never
/// errors; they are resolved in place by the stages themselves.
#[derive(Debug, Error)]
pub enum CleaningError {
    #[error("invalid date pattern '{0}': expected at least one of the YYYY, MM, DD tokens")]
    InvalidDatePattern(String),
}

fn validate_config(config: &CleaningConfig) -> Result<(), CleaningError> {
    if let DateFormat::Custom(pattern) = &config.date_format {
        if !pattern.contains("YYYY") && !pattern.contains("MM") && !pattern.contains("DD") {
            return Err(CleaningError::InvalidDatePattern(pattern.clone()));
        }
    }
    Ok(())
}

/// Run the configured cleaning stages over a table.
///
/// Stage order is fixed: duplicate removal, whitespace trim, date
/// standardization, missing-value handling. Each stage consumes the
/// previous stage's output; the missing-value stage always runs. The
/// input table is never mutated.
pub fn clean_all(table: &Table, config: &CleaningConfig) -> Result<CleaningResult, CleaningError> {
    validate_config(config)?;

    let mut stats = CleaningStats {
        original_rows: table.len(),
        ..CleaningStats::default()
    };

    let mut current = table.clone();

    if config.remove_duplicates {
        let (data, removed) = remove_duplicate_rows(&current);
        debug!("duplicate removal dropped {} rows", removed);
        current = data;
        stats.duplicates_removed = removed;
    }

    if config.trim_whitespace {
        let (data, trimmed) = trim_whitespace(&current);
        debug!("whitespace trim touched {} cells", trimmed);
        current = data;
        stats.cells_trimmed = trimmed;
    }

    if !config.date_columns.is_empty() {
        let (data, fixed) = standardize_dates(&current, &config.date_columns, &config.date_format);
        debug!("date standardization fixed {} cells", fixed);
        current = data;
        stats.dates_fixed = fixed;
    }

    let (data, handled) = handle_missing_values(&current, &config.missing_values);
    debug!("missing-value handling affected {}", handled);
    current = data;
    stats.missing_values_handled = handled;

    stats.final_rows = current.len();

    Ok(CleaningResult {
        data: current,
        stats,
    })
}
