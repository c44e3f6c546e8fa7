//! Error type for metric construction and parsing.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricError>;

/// Errors surfaced by the core.
///
/// Rendering and value updates are total; only construction and type-name
/// parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown metric type: {0}")]
    UnknownType(String),
}

impl MetricError {
    /// Stable short code, suitable for log fields.
    pub fn code(&self) -> &'static str {
        match self {
            MetricError::InvalidArgument(_) => "INVALID_ARGUMENT",
            MetricError::UnknownType(_) => "UNKNOWN_TYPE",
        }
    }
}
