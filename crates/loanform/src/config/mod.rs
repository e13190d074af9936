use std::env;
use std::fmt;

use url::Url;

/// Distinguishes runtime behavior for different stages of the tool.
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
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

/// Default deployment of the scoring model.
pub const DEFAULT_ENDPOINT: &str = "https://stoik-api.onrender.com/predict/";

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let endpoint =
            env::var("SCORING_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let scoring = ScoringConfig::from_raw(&endpoint)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the outbound scoring exchange.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub endpoint: Url,
}

impl ScoringConfig {
    pub fn from_raw(raw: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidEndpoint {
            value: raw.to_string(),
            source,
        })?;

        match endpoint.scheme() {
            "http" | "https" => Ok(Self { endpoint }),
            scheme => Err(ConfigError::UnsupportedScheme {
                scheme: scheme.to_string(),
            }),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidEndpoint {
        value: String,
        source: url::ParseError,
    },
    UnsupportedScheme {
        scheme: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEndpoint { value, .. } => {
                write!(f, "SCORING_ENDPOINT '{}' is not an absolute URL", value)
            }
            ConfigError::UnsupportedScheme { scheme } => {
                write!(f, "SCORING_ENDPOINT must use http or https, got '{}'", scheme)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidEndpoint { source, .. } => Some(source),
            ConfigError::UnsupportedScheme { .. } => None,
        }
    }
}

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
        env::remove_var("SCORING_ENDPOINT");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.scoring.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn endpoint_override_is_validated() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        env::set_var("SCORING_ENDPOINT", "http://localhost:8080/predict/");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scoring.endpoint.port(), Some(8080));

        env::set_var("SCORING_ENDPOINT", "not a url");
        AppConfig::load().expect_err("relative endpoint rejected");

        env::set_var("SCORING_ENDPOINT", "ftp://example.com/predict");
        let err = AppConfig::load().expect_err("non-http scheme rejected");
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));

        reset_env();
    }
}
