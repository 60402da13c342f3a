use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the reporting CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub report: ReportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let decimals = env::var("APP_REPORT_DECIMALS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidDecimals)?;

        let default_snapshot = env::var("APP_SNAPSHOT_PATH").ok().map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            report: ReportConfig {
                decimals,
                default_snapshot,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling report rendering.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Decimal places when printing module values.
    pub decimals: u8,
    /// Snapshot file used when a command does not name one.
    pub default_snapshot: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDecimals,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDecimals => {
                write!(f, "APP_REPORT_DECIMALS must be a small non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
