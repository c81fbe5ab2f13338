// CSV data source and sink implementation

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::{DataError, DataSink, DataSource, Row, SinkType, SourceType, Table, Value};

/// CSV data source
pub struct CsvSource {
    path: String,
    delimiter: char,
}

impl CsvSource {
    /// Create a new CSV data source. The first record is taken as the header.
    pub fn new<P: AsRef<Path>>(path: P, delimiter: char) -> Self {
        CsvSource {
            path: path.as_ref().to_string_lossy().to_string(),
            delimiter,
        }
    }
}

impl DataSource for CsvSource {
    fn read(&self) -> Result<Table, DataError> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter as u8)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| DataError::Parse(e.to_string()))?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut table = Table::new();

        for result in csv_reader.records() {
            let record = result.map_err(|e| DataError::Parse(e.to_string()))?;

            let mut row = Row::new();
            for (i, field) in record.iter().enumerate() {
                let column = match headers.get(i) {
                    Some(name) => name.clone(),
                    None => format!("column_{}", i),
                };

                let value = if field.is_empty() {
                    Value::Null
                } else {
                    Value::String(field.to_string())
                };

                row.values.insert(column, value);
            }

            table.add_row(row);
        }

        Ok(table)
    }

    fn name(&self) -> &str {
        &self.path
    }

    fn source_type(&self) -> SourceType {
        SourceType::File
    }
}

/// CSV data sink
pub struct CsvSink {
    path: String,
    delimiter: char,
}

impl CsvSink {
    /// Create a new CSV data sink
    pub fn new<P: AsRef<Path>>(path: P, delimiter: char) -> Self {
        CsvSink {
            path: path.as_ref().to_string_lossy().to_string(),
            delimiter,
        }
    }
}

/// Neutralize cells that a spreadsheet would interpret as formulas.
/// String values beginning with `=`, `+` or `@` are prefixed with `'`.
pub fn sanitize_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => {
            if s.starts_with('=') || s.starts_with('+') || s.starts_with('@') {
                format!("'{}", s)
            } else {
                s.clone()
            }
        }
    }
}

impl DataSink for CsvSink {
    fn write(&self, data: &Table) -> Result<(), DataError> {
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter as u8)
            .from_writer(writer);

        let columns = data.columns();

        csv_writer
            .write_record(&columns)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        for row in &data.rows {
            let record: Vec<String> = columns
                .iter()
                .map(|col| match row.get(col) {
                    Some(value) => sanitize_cell(value),
                    None => String::new(),
                })
                .collect();

            csv_writer
                .write_record(&record)
                .map_err(|e| DataError::Parse(e.to_string()))?;
        }

        csv_writer.flush()?;

        Ok(())
    }

    fn name(&self) -> &str {
        &self.path
    }

    fn sink_type(&self) -> SinkType {
        SinkType::File
    }
}
