use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::report::ReportFormat;

/// Stop-check runner configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "stopcheck")]
#[command(about = "Run underwriting stop checks against a single client record")]
pub struct Config {
    /// Path to the client record file
    #[arg(long, default_value = "client_Ivan.txt", env = "STOPCHECK_CLIENT_PATH")]
    pub client_path: PathBuf,

    /// Evaluation date (YYYY-MM-DD), defaults to today's local date
    #[arg(long, env = "STOPCHECK_AS_OF")]
    pub as_of: Option<NaiveDate>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text, env = "STOPCHECK_FORMAT")]
    pub format: ReportFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Print metrics in Prometheus text format after the report
    #[arg(long, default_value = "false", env = "STOPCHECK_PRINT_METRICS")]
    pub print_metrics: bool,
}

impl Config {
    /// The date ages and milestones are computed against.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            client_path: PathBuf::from("client_Ivan.txt"),
            as_of: None,
            format: ReportFormat::Text,
            log_level: "info".to_string(),
            print_metrics: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.client_path, PathBuf::from("client_Ivan.txt"));
        assert_eq!(config.format, ReportFormat::Text);
        assert!(!config.print_metrics);
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "stopcheck",
            "--client-path",
            "client_Petr.json",
            "--as-of",
            "2024-05-20",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.client_path, PathBuf::from("client_Petr.json"));
        assert_eq!(config.evaluation_date(), NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn test_rejects_bad_as_of() {
        assert!(Config::try_parse_from(["stopcheck", "--as-of", "20.05.2024"]).is_err());
    }
}
