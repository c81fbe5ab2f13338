// Configuration utilities

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cleaning::CleaningConfig;

use super::{AppError, AppResult};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cleaning: CleaningConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cleaning: CleaningConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON or YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(&path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = if path.as_ref().extension().map_or(false, |ext| ext == "json") {
            serde_json::from_str(&contents)
                .map_err(|e| AppError::Config(e.to_string()))?
        } else if path
            .as_ref()
            .extension()
            .map_or(false, |ext| ext == "yaml" || ext == "yml")
        {
            serde_yaml::from_str(&contents)
                .map_err(|e| AppError::Config(e.to_string()))?
        } else {
            return Err(AppError::Config(
                "Unsupported config file format".to_string(),
            ));
        };

        Ok(config)
    }

    /// Get the log level filter
    pub fn log_level_filter(&self) -> log::LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::{DateFormat, MissingValueStrategy};

    #[test]
    fn cleaning_config_parses_from_yaml() {
        let yaml = r#"
cleaning:
  remove_duplicates: true
  trim_whitespace: true
  date_columns: ["signup_date"]
  date_format: "DD/MM/YYYY"
  missing_values:
    strategy: fill
    fill_value: "N/A"
logging:
  level: debug
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert!(config.cleaning.remove_duplicates);
        assert_eq!(config.cleaning.date_columns, vec!["signup_date"]);
        assert_eq!(config.cleaning.date_format, DateFormat::DayMonthYear);
        assert_eq!(
            config.cleaning.missing_values.strategy,
            MissingValueStrategy::Fill
        );
        assert_eq!(config.cleaning.missing_values.fill_value, "N/A");
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn defaults_apply_to_omitted_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert!(!config.cleaning.remove_duplicates);
        assert_eq!(config.cleaning.date_format, DateFormat::Iso);
        assert_eq!(
            config.cleaning.missing_values.strategy,
            MissingValueStrategy::Flag
        );
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
