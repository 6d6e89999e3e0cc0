//! TOML theme configuration
//!
//! ```toml
//! name = "docs"
//! units = "em"          # optional: "px" (default), "em" or "rem"
//! base_font_size = 16   # optional, used by em/rem conversion
//!
//! [breakpoints]         # smallest first; document order is kept
//! mobile = "576px"
//! tablet = "768px"
//! desktop = "992px"
//! ```

use mediant_core::{BreakpointTable, DEFAULT_BASE_FONT_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::theme::{Theme, DEFAULT_THEME_NAME};

/// Unit breakpoints are emitted in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputUnits {
    #[default]
    Px,
    Em,
    Rem,
}

/// On-disk theme description
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub units: OutputUnits,

    #[serde(default = "default_base_font_size")]
    pub base_font_size: f64,

    #[serde(default)]
    pub breakpoints: BreakpointTable,
}

fn default_name() -> String {
    DEFAULT_THEME_NAME.to_string()
}

fn default_base_font_size() -> f64 {
    DEFAULT_BASE_FONT_SIZE
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            units: OutputUnits::default(),
            base_font_size: default_base_font_size(),
            breakpoints: BreakpointTable::default(),
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(src)?;
        if config.base_font_size <= 0.0 || !config.base_font_size.is_finite() {
            return Err(ThemeError::InvalidBaseFontSize(config.base_font_size));
        }
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the theme, converting breakpoints to the configured units
    pub fn into_theme(self) -> Theme {
        let breakpoints = match self.units {
            OutputUnits::Px => self.breakpoints,
            OutputUnits::Em => self.breakpoints.to_em(self.base_font_size),
            OutputUnits::Rem => self.breakpoints.to_rem(self.base_font_size),
        };
        Theme::new(self.name, breakpoints)
    }
}

impl From<&Theme> for ThemeConfig {
    fn from(theme: &Theme) -> Self {
        Self {
            name: theme.name().to_string(),
            breakpoints: theme.breakpoints().clone(),
            ..Self::default()
        }
    }
}
