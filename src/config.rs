//! Command-line configuration

use std::path::PathBuf;

use clap::{Args, Parser};

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Plain text lines.
    Plain,

    /// Tables with formatted money amounts.
    Table,
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Tender CLI
#[derive(Debug, Parser)]
#[command(
    name = "tender",
    about = "Choose the cheapest way to pay for a batch of orders",
    long_about = None
)]
pub struct Cli {
    /// Orders file (JSON, or YAML with a .yml/.yaml extension)
    pub orders: PathBuf,

    /// Payment methods file (JSON, or YAML with a .yml/.yaml extension)
    pub payment_methods: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Plain)]
    pub format: ReportFormat,

    /// Currency used by the table report (PLN, GBP, USD, EUR)
    #[arg(short, long, default_value = "PLN")]
    pub currency: String,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn positional_paths_and_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["tender", "orders.json", "paymentmethods.json"])?;

        assert_eq!(cli.orders, PathBuf::from("orders.json"));
        assert_eq!(cli.payment_methods, PathBuf::from("paymentmethods.json"));
        assert_eq!(cli.format, ReportFormat::Plain);
        assert_eq!(cli.currency, "PLN");

        Ok(())
    }

    #[test]
    fn table_format_and_currency() -> TestResult {
        let cli = Cli::try_parse_from([
            "tender",
            "orders.yml",
            "methods.yml",
            "--format",
            "table",
            "--currency",
            "EUR",
            "--log-format",
            "json",
        ])?;

        assert_eq!(cli.format, ReportFormat::Table);
        assert_eq!(cli.currency, "EUR");
        assert_eq!(cli.logging.log_format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn missing_payment_methods_path_is_rejected() {
        assert!(Cli::try_parse_from(["tender", "orders.json"]).is_err());
    }
}
