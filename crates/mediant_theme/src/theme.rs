//! Theme values

use mediant_core::{BreakpointTable, MediaGenerator};

use crate::error::Result;

/// Name of the built-in theme
pub const DEFAULT_THEME_NAME: &str = "default";

/// A named theme carrying the breakpoint table media rules are built from
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    name: String,
    breakpoints: BreakpointTable,
}

impl Theme {
    pub fn new(name: impl Into<String>, breakpoints: BreakpointTable) -> Self {
        Self {
            name: name.into(),
            breakpoints,
        }
    }

    /// Build a theme from `(label, size)` text pairs
    pub fn from_pairs<I, L, S>(name: impl Into<String>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: AsRef<str>,
    {
        Ok(Self::new(name, BreakpointTable::new(pairs)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    /// Media rule generator over this theme's breakpoints
    pub fn media(&self) -> MediaGenerator {
        MediaGenerator::new(self.breakpoints.clone())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(DEFAULT_THEME_NAME, BreakpointTable::default())
    }
}
