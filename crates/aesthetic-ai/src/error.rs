use crate::assessment::CatalogError;
use crate::config::ConfigError;
use crate::intake::SubjectImportError;
use crate::quiz::DefinitionError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Catalog(CatalogError),
    Quiz(DefinitionError),
    Intake(SubjectImportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Catalog(err) => write!(f, "assessment catalog error: {}", err),
            AppError::Quiz(err) => write!(f, "quiz definition error: {}", err),
            AppError::Intake(err) => write!(f, "subject intake error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Quiz(err) => Some(err),
            AppError::Intake(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<DefinitionError> for AppError {
    fn from(value: DefinitionError) -> Self {
        Self::Quiz(value)
    }
}

impl From<SubjectImportError> for AppError {
    fn from(value: SubjectImportError) -> Self {
        Self::Intake(value)
    }
}
