// Adapter tests for the CSV and JSON sources and sinks

use std::fs;
use std::io::Write;

use tempfile::tempdir;

use record_cleaning_engine::data::{
    CsvSink, CsvSource, DataSink, DataSource, JsonSink, JsonSource, Row, Table, Value,
};

fn s(text: &str) -> Value {
    Value::String(text.to_string())
}

#[test]
fn csv_round_trip_preserves_rows_and_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");

    let mut input = fs::File::create(&path).unwrap();
    writeln!(input, "id,name,city").unwrap();
    writeln!(input, "1,Alice,Paris").unwrap();
    writeln!(input, "2,Bob,").unwrap();
    drop(input);

    let table = CsvSource::new(&path, ',').read().unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].get("name"), Some(&s("Alice")));
    // empty CSV fields decode to Null
    assert_eq!(table.rows[1].get("city"), Some(&Value::Null));

    let out_path = dir.path().join("out.csv");
    CsvSink::new(&out_path, ',').write(&table).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("id,name,city"));
    assert_eq!(lines.next(), Some("1,Alice,Paris"));
    assert_eq!(lines.next(), Some("2,Bob,"));
}

#[test]
fn csv_sink_neutralizes_formula_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let table = Table::from_rows(vec![Row::from_pairs(vec![
        ("name", s("=HYPERLINK(\"http://evil\")")),
        ("note", s("plain")),
    ])]);

    CsvSink::new(&path, ',').write(&table).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("'=HYPERLINK"));
    assert!(!written.contains("\n=HYPERLINK"));
}

#[test]
fn csv_sink_pads_ragged_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let table = Table::from_rows(vec![
        Row::from_pairs(vec![("a", s("1"))]),
        Row::from_pairs(vec![("a", s("2")), ("b", s("3"))]),
    ]);

    CsvSink::new(&path, ',').write(&table).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("a,b"));
    assert_eq!(lines.next(), Some("1,"));
    assert_eq!(lines.next(), Some("2,3"));
}

#[test]
fn json_source_reads_array_of_objects() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rows.json");

    fs::write(
        &path,
        r#"[{"id": 1, "name": "Alice", "score": 9.5, "active": true, "note": null}]"#,
    )
    .unwrap();

    let table = JsonSource::new(&path).read().unwrap();

    assert_eq!(table.len(), 1);
    let row = &table.rows[0];
    assert_eq!(row.get("id"), Some(&Value::Integer(1)));
    assert_eq!(row.get("name"), Some(&s("Alice")));
    assert_eq!(row.get("score"), Some(&Value::Float(9.5)));
    assert_eq!(row.get("active"), Some(&Value::Boolean(true)));
    assert_eq!(row.get("note"), Some(&Value::Null));
}

#[test]
fn json_source_rejects_nested_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rows.json");

    fs::write(&path, r#"[{"id": 1, "tags": ["a", "b"]}]"#).unwrap();

    assert!(JsonSource::new(&path).read().is_err());
}

#[test]
fn json_source_rejects_non_array_root() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rows.json");

    fs::write(&path, r#"{"id": 1}"#).unwrap();

    assert!(JsonSource::new(&path).read().is_err());
}

#[test]
fn json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    let table = Table::from_rows(vec![Row::from_pairs(vec![
        ("id", Value::Integer(7)),
        ("name", s("Grace")),
        ("email", Value::Null),
    ])]);

    JsonSink::new(&path).write(&table).unwrap();
    let reread = JsonSource::new(&path).read().unwrap();

    assert_eq!(reread, table);
}
