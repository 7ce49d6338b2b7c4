use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the application.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub catalogs: CatalogPaths,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalogs = CatalogPaths {
            assessment: optional_path("APP_ASSESSMENT_CATALOG")?,
            quiz: optional_path("APP_QUIZ_CATALOG")?,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            catalogs,
        })
    }
}

fn optional_path(variable: &'static str) -> Result<Option<PathBuf>, ConfigError> {
    match env::var(variable) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::BlankPath { variable }),
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(_) => Ok(None),
    }
}

/// Optional file locations for the externally supplied catalogs.
#[derive(Debug, Clone, Default)]
pub struct CatalogPaths {
    pub assessment: Option<PathBuf>,
    pub quiz: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    BlankPath { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BlankPath { variable } => {
                write!(f, "{} is set but blank; unset it or provide a file path", variable)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_ASSESSMENT_CATALOG");
        env::remove_var("APP_QUIZ_CATALOG");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.catalogs.assessment.is_none());
        assert!(config.catalogs.quiz.is_none());
    }

    #[test]
    fn reads_catalog_paths_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ASSESSMENT_CATALOG", "catalogs/assessment.json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.catalogs.assessment,
            Some(PathBuf::from("catalogs/assessment.json"))
        );
        reset_env();
    }

    #[test]
    fn blank_catalog_path_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_QUIZ_CATALOG", "   ");
        match AppConfig::load() {
            Err(ConfigError::BlankPath { variable }) => assert_eq!(variable, "APP_QUIZ_CATALOG"),
            other => panic!("expected blank path error, got {other:?}"),
        }
        reset_env();
    }
}
