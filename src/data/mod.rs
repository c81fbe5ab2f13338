// Data module for the row/table model and format adapters

mod csv;
mod json;

pub use csv::*;
pub use json::*;

use indexmap::IndexMap;
use thiserror::Error;

/// Represents a generic data source
pub trait DataSource {
    /// Read data from the source
    fn read(&self) -> Result<Table, DataError>;

    /// Get the source name
    fn name(&self) -> &str;

    /// Get the source type
    fn source_type(&self) -> SourceType;
}

/// Represents a generic data sink
pub trait DataSink {
    /// Write data to the sink
    fn write(&self, data: &Table) -> Result<(), DataError>;

    /// Get the sink name
    fn name(&self) -> &str;

    /// Get the sink type
    fn sink_type(&self) -> SinkType;
}

/// Represents a scalar cell value.
///
/// A column that is absent from a row has no `Value` at all; `Null` is an
/// explicitly empty cell (e.g. an empty CSV field).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// A cell is missing when it is null or an empty string. A
    /// whitespace-only string is not missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The string form of the value, as used by date parsing.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
        }
    }
}

/// Represents a row in a table: an insertion-ordered mapping from column
/// name to value. The column set is not guaranteed identical across rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub values: IndexMap<String, Value>,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Row {
            values: IndexMap::new(),
        }
    }

    /// Create a row from (column, value) pairs, preserving order
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Row {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Get a reference to a value by column name
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Set a value for a column, appending the column if it is new
    pub fn set(&mut self, column: &str, value: Value) {
        self.values.insert(column.to_string(), value);
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Represents an ordered table of rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table
    pub fn new() -> Self {
        Table { rows: Vec::new() }
    }

    /// Create a table from existing rows
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Table { rows }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the number of rows in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a reference to a row by index
    pub fn get_row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Union of column names across all rows, in first-seen order.
    /// Used by sinks to build a stable header when rows are ragged.
    pub fn columns(&self) -> Vec<String> {
        let mut seen: IndexMap<String, ()> = IndexMap::new();
        for row in &self.rows {
            for key in row.values.keys() {
                seen.entry(key.clone()).or_insert(());
            }
        }
        seen.into_iter().map(|(k, _)| k).collect()
    }
}

/// Represents an error in the data module
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Not supported: {0}")]
    NotSupported(String),
}

/// Represents a source type
#[derive(Debug, Clone, PartialEq)]
pub enum SourceType {
    File,
    Stream,
    Custom(String),
}

/// Represents a sink type
#[derive(Debug, Clone, PartialEq)]
pub enum SinkType {
    File,
    Stream,
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cells() {
        assert!(Value::Null.is_missing());
        assert!(Value::String(String::new()).is_missing());
        assert!(!Value::String("   ".to_string()).is_missing());
        assert!(!Value::Integer(0).is_missing());
    }

    #[test]
    fn column_union_keeps_first_seen_order() {
        let mut table = Table::new();
        table.add_row(Row::from_pairs(vec![
            ("b", Value::Integer(1)),
            ("a", Value::Integer(2)),
        ]));
        table.add_row(Row::from_pairs(vec![
            ("a", Value::Integer(3)),
            ("c", Value::Integer(4)),
        ]));

        assert_eq!(table.columns(), vec!["b", "a", "c"]);
    }
}
