// Duplicate-row removal

use std::collections::HashSet;

use crate::data::{Row, Table, Value};

/// Append a field as `<byte length>:<content>`. The length prefix makes
/// the encoding injective: no field content can forge a boundary.
fn push_field(out: &mut String, field: &str) {
    out.push_str(&field.len().to_string());
    out.push(':');
    out.push_str(field);
}

/// Build a canonical serialization of a row: key-sorted, length-prefixed
/// fields, with a type tag per value so that e.g. the string "1" and the
/// integer 1 never collide. Rows are equal iff their canonical keys are
/// equal. Floats compare by bit pattern, so 0.0 and -0.0 (and NaNs with
/// different payloads) are distinct rows.
fn canonical_key(row: &Row) -> String {
    let mut keys: Vec<&String> = row.values.keys().collect();
    keys.sort();

    let mut out = String::new();
    for key in keys {
        push_field(&mut out, key);
        let (tag, repr) = match &row.values[key.as_str()] {
            Value::Null => ('n', String::new()),
            Value::Boolean(b) => ('b', (if *b { "1" } else { "0" }).to_string()),
            Value::Integer(i) => ('i', i.to_string()),
            Value::Float(f) => ('f', f.to_bits().to_string()),
            Value::String(s) => ('s', s.clone()),
        };
        out.push(tag);
        push_field(&mut out, &repr);
    }
    out
}

/// Remove exact duplicate rows, keeping the first occurrence in original
/// order. Two rows are duplicates iff they have the same column set and
/// the same value for every column, regardless of insertion order.
/// Runs in O(n) over a set of canonical row keys.
pub fn remove_duplicate_rows(table: &Table) -> (Table, usize) {
    let mut seen = HashSet::with_capacity(table.len());
    let mut removed = 0;
    let mut result = Table::new();

    for row in &table.rows {
        if seen.insert(canonical_key(row)) {
            result.add_row(row.clone());
        } else {
            removed += 1;
        }
    }

    (result, removed)
}
