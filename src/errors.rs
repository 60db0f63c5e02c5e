use thiserror::Error;

use crate::types::Float;

#[derive(Debug, Error)]
pub enum SwingupError {
    #[error("invalid parameter `{name}`: {value} (must be finite and positive)")]
    InvalidParameter { name: &'static str, value: Float },
    #[error("iteration budget must be at least 1")]
    ZeroIterations,
    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("plot failed: {0}")]
    Plot(String),
}

/// Reject values that are NaN, infinite, zero or negative.
pub fn check_positive(name: &'static str, value: Float) -> Result<(), SwingupError> {
    if value.is_finite() && value > 0. {
        Ok(())
    } else {
        Err(SwingupError::InvalidParameter { name, value })
    }
}
