// Record Cleaning Engine - Command line executable

use std::path::Path;

use anyhow::{bail, Context};
use clap::{App, Arg};
use log::info;

use record_cleaning_engine::{
    cleaning::{clean_all, MissingValueStrategy},
    data::{CsvSink, CsvSource, DataSink, DataSource, JsonSink, JsonSource, Table},
    utils::{init_logging, Config},
};

fn read_table(path: &str) -> anyhow::Result<Table> {
    let table = match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("csv") | Some("txt") => CsvSource::new(path, ',').read()?,
        Some("json") => JsonSource::new(path).read()?,
        _ => bail!("unsupported input format: {}", path),
    };
    Ok(table)
}

fn write_table(path: &str, table: &Table) -> anyhow::Result<()> {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("csv") | Some("txt") => CsvSink::new(path, ',').write(table)?,
        Some("json") => JsonSink::new(path).write(table)?,
        _ => bail!("unsupported output format: {}", path),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let matches = App::new("Record Cleaning Engine")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cleans tabular records: deduplication, trimming, date normalization, missing values")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Input file (.csv or .json)")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (.csv or .json)")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file (JSON or YAML)")
                .takes_value(true),
        )
        .arg(
            Arg::new("dedupe")
                .long("dedupe")
                .help("Remove exact duplicate rows"),
        )
        .arg(
            Arg::new("trim")
                .long("trim")
                .help("Trim whitespace from string cells"),
        )
        .arg(
            Arg::new("date-column")
                .long("date-column")
                .value_name("COLUMN")
                .help("Column to standardize as a date (repeatable)")
                .takes_value(true)
                .multiple_occurrences(true)
                .number_of_values(1),
        )
        .arg(
            Arg::new("date-format")
                .long("date-format")
                .value_name("FORMAT")
                .help("Target date format (e.g. YYYY-MM-DD, DD/MM/YYYY, or a custom pattern)")
                .takes_value(true),
        )
        .arg(
            Arg::new("missing")
                .long("missing")
                .value_name("STRATEGY")
                .help("Missing-value strategy: flag, remove or fill")
                .takes_value(true),
        )
        .arg(
            Arg::new("fill-value")
                .long("fill-value")
                .value_name("VALUE")
                .help("Replacement used with the fill strategy")
                .takes_value(true),
        )
        .get_matches();

    // Load configuration
    let mut config = if let Some(config_path) = matches.value_of("config") {
        Config::from_file(config_path)
            .with_context(|| format!("failed to load config file '{}'", config_path))?
    } else {
        Config::default()
    };

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }

    // Command line flags override the config file
    if matches.is_present("dedupe") {
        config.cleaning.remove_duplicates = true;
    }
    if matches.is_present("trim") {
        config.cleaning.trim_whitespace = true;
    }
    if let Some(columns) = matches.values_of("date-column") {
        config.cleaning.date_columns = columns.map(|c| c.to_string()).collect();
    }
    if let Some(format) = matches.value_of("date-format") {
        config.cleaning.date_format = format.to_string().into();
    }
    if let Some(strategy) = matches.value_of("missing") {
        config.cleaning.missing_values.strategy = match strategy {
            "flag" => MissingValueStrategy::Flag,
            "remove" => MissingValueStrategy::Remove,
            "fill" => MissingValueStrategy::Fill,
            other => bail!("unknown missing-value strategy '{}'", other),
        };
    }
    if let Some(fill) = matches.value_of("fill-value") {
        config.cleaning.missing_values.fill_value = fill.to_string();
    }

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();

    let table = read_table(input).with_context(|| format!("failed to read '{}'", input))?;
    info!("loaded {} rows from {}", table.len(), input);

    let result = clean_all(&table, &config.cleaning)?;
    let stats = result.stats;

    write_table(output, &result.data).with_context(|| format!("failed to write '{}'", output))?;
    info!("wrote {} rows to {}", result.data.len(), output);

    println!("Rows: {} -> {}", stats.original_rows, stats.final_rows);
    println!("Duplicates removed:     {}", stats.duplicates_removed);
    println!("Cells trimmed:          {}", stats.cells_trimmed);
    println!("Dates fixed:            {}", stats.dates_fixed);
    println!("Missing values handled: {}", stats.missing_values_handled);

    Ok(())
}
