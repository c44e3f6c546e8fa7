//! Errors raised while loading a snapshot and writing its output.

use promline_core::MetricError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid snapshot: {0}")]
    Invalid(String),
    #[error(transparent)]
    Metric(#[from] MetricError),
}

impl ConfigError {
    /// Stable short code, used in log fields and tests.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io(_) => "IO",
            ConfigError::Yaml(_) => "BAD_YAML",
            ConfigError::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            ConfigError::Invalid(_) => "INVALID",
            ConfigError::Metric(e) => e.code(),
        }
    }
}
