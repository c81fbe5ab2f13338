// JSON data source and sink implementation

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use super::{DataError, DataSink, DataSource, Row, SinkType, SourceType, Table, Value};

/// JSON data source. Expects the root to be an array of flat objects.
pub struct JsonSource {
    path: String,
}

impl JsonSource {
    /// Create a new JSON data source
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonSource {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }

    fn json_to_value(column: &str, json: &JsonValue) -> Result<Value, DataError> {
        match json {
            JsonValue::Null => Ok(Value::Null),
            JsonValue::Bool(b) => Ok(Value::Boolean(*b)),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else {
                    // as_f64 is total for serde_json numbers
                    Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            JsonValue::String(s) => Ok(Value::String(s.clone())),
            JsonValue::Array(_) | JsonValue::Object(_) => Err(DataError::Parse(format!(
                "Column '{}' holds a nested value; rows must be flat scalar mappings",
                column
            ))),
        }
    }
}

impl DataSource for JsonSource {
    fn read(&self) -> Result<Table, DataError> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let json: JsonValue =
            serde_json::from_reader(reader).map_err(|e| DataError::Parse(e.to_string()))?;

        let array = json
            .as_array()
            .ok_or_else(|| DataError::Parse("JSON root is not an array".to_string()))?;

        let mut table = Table::new();

        for (index, entry) in array.iter().enumerate() {
            let object = entry.as_object().ok_or_else(|| {
                DataError::Parse(format!("Element {} is not an object", index))
            })?;

            let mut row = Row::new();
            for (key, value) in object {
                row.values
                    .insert(key.clone(), Self::json_to_value(key, value)?);
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

/// JSON data sink. Writes a pretty-printed array of objects.
pub struct JsonSink {
    path: String,
}

impl JsonSink {
    /// Create a new JSON data sink
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonSink {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }

    fn value_to_json(value: &Value) -> JsonValue {
        match value {
            Value::Null => JsonValue::Null,
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Integer(i) => JsonValue::from(*i),
            Value::Float(f) => {
                serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number)
            }
            Value::String(s) => JsonValue::String(s.clone()),
        }
    }
}

impl DataSink for JsonSink {
    fn write(&self, data: &Table) -> Result<(), DataError> {
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);

        let array: Vec<JsonValue> = data
            .rows
            .iter()
            .map(|row| {
                let mut object = Map::new();
                for (key, value) in &row.values {
                    object.insert(key.clone(), Self::value_to_json(value));
                }
                JsonValue::Object(object)
            })
            .collect();

        serde_json::to_writer_pretty(writer, &array)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        Ok(())
    }

    fn name(&self) -> &str {
        &self.path
    }

    fn sink_type(&self) -> SinkType {
        SinkType::File
    }
}
