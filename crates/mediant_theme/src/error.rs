//! Theme error types

use mediant_core::TableError;
use thiserror::Error;

/// Theme loading errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme file is not valid TOML or has the wrong shape
    #[error("invalid theme config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Theme could not be written back as TOML
    #[error("failed to serialize theme config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Breakpoint table rejected
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("base font size must be positive, got {0}")]
    InvalidBaseFontSize(f64),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
