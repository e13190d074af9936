use crate::config::ConfigError;
use crate::form::encode::EncodeError;
use crate::form::field::ChoiceError;
use crate::telemetry::TelemetryError;
use std::fmt;

/// Top-level error for the binary's exit path. Wire failures never appear
/// here; those resolve into the form outcome instead.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Choice(ChoiceError),
    Encode(EncodeError),
    Render(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Choice(err) => write!(f, "invalid field value: {}", err),
            AppError::Encode(err) => write!(f, "invalid field value: {}", err),
            AppError::Render(err) => write!(f, "output error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Choice(err) => Some(err),
            AppError::Encode(err) => Some(err),
            AppError::Render(err) => Some(err),
            AppError::Io(err) => Some(err),
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

impl From<ChoiceError> for AppError {
    fn from(value: ChoiceError) -> Self {
        Self::Choice(value)
    }
}

impl From<EncodeError> for AppError {
    fn from(value: EncodeError) -> Self {
        Self::Encode(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
