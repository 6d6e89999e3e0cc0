//! Error types for breakpoint parsing and resolution

use thiserror::Error;

/// A size literal could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    /// Input was empty or whitespace only
    #[error("empty size")]
    Empty,

    /// No leading number (e.g. `px`, `wide`)
    #[error("`{0}` does not start with a number")]
    NotANumber(String),

    /// Number followed by a suffix we do not emit media bounds for
    #[error("unsupported unit `{unit}` in `{input}`")]
    UnsupportedUnit { input: String, unit: String },
}

/// A breakpoint table could not be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("breakpoint labels must not be empty")]
    EmptyLabel,

    #[error("duplicate breakpoint label `{0}`")]
    DuplicateLabel(String),

    #[error("invalid size for breakpoint `{label}`: {source}")]
    InvalidSize {
        label: String,
        #[source]
        source: SizeError,
    },
}

/// A breakpoint reference could not be turned into a media bound
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Reference is neither a table label nor a numeric size
    #[error("`{reference}` is not a known breakpoint or a valid size")]
    InvalidBreakpoint { reference: String },

    /// Reference is the last breakpoint, so there is no exclusive upper bound
    #[error("`{label}` has no next breakpoint to bound it{}", suggestion_hint(.penultimate))]
    OutOfRange {
        label: String,
        penultimate: Option<String>,
    },
}

fn suggestion_hint(penultimate: &Option<String>) -> String {
    match penultimate {
        Some(label) => format!(", use `{label}` instead"),
        None => String::new(),
    }
}

/// Result type for resolution operations
pub type Result<T> = std::result::Result<T, ResolveError>;
