// Simple cleaning pipeline example

use record_cleaning_engine::{
    cleaning::{
        clean_all, CleaningConfig, DateFormat, MissingValueConfig, MissingValueStrategy,
    },
    data::{Row, Table, Value},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a messy table
    let mut table = Table::new();

    table.add_row(Row::from_pairs(vec![
        ("id", Value::String("1".to_string())),
        ("name", Value::String("  Alice  ".to_string())),
        ("signup", Value::String("03/15/2023".to_string())),
        ("email", Value::String("alice@example.com".to_string())),
    ]));

    table.add_row(Row::from_pairs(vec![
        ("id", Value::String("1".to_string())),
        ("name", Value::String("  Alice  ".to_string())),
        ("signup", Value::String("03/15/2023".to_string())),
        ("email", Value::String("alice@example.com".to_string())),
    ]));

    table.add_row(Row::from_pairs(vec![
        ("id", Value::String("2".to_string())),
        ("name", Value::String("Bob".to_string())),
        ("signup", Value::String("16-03-2023".to_string())),
        ("email", Value::String(String::new())),
    ]));

    table.add_row(Row::from_pairs(vec![
        ("id", Value::String("3".to_string())),
        ("name", Value::String("Carol".to_string())),
        ("signup", Value::String("not a date".to_string())),
        ("email", Value::String("carol@example.com".to_string())),
    ]));

    // Configure the pipeline
    let config = CleaningConfig {
        remove_duplicates: true,
        trim_whitespace: true,
        date_columns: vec!["signup".to_string()],
        date_format: DateFormat::Iso,
        missing_values: MissingValueConfig {
            strategy: MissingValueStrategy::Fill,
            fill_value: "N/A".to_string(),
        },
    };

    // Run it
    let result = clean_all(&table, &config)?;

    println!("Cleaned table:");
    for row in &result.data.rows {
        let cells: Vec<String> = row
            .values
            .iter()
            .map(|(k, v)| format!("{}={}", k, v.to_display_string()))
            .collect();
        println!("  {}", cells.join(", "));
    }

    let stats = result.stats;
    println!("\nStats:");
    println!("  rows: {} -> {}", stats.original_rows, stats.final_rows);
    println!("  duplicates removed: {}", stats.duplicates_removed);
    println!("  cells trimmed: {}", stats.cells_trimmed);
    println!("  dates fixed: {}", stats.dates_fixed);
    println!("  missing values handled: {}", stats.missing_values_handled);

    Ok(())
}
