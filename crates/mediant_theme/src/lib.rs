//! Mediant Theme
//!
//! Themes carry the breakpoint table that media rules are generated from.
//!
//! ```rust
//! use mediant_theme::{Theme, ThemeConfig};
//!
//! let theme = ThemeConfig::from_toml_str(
//!     r#"
//!     name = "docs"
//!
//!     [breakpoints]
//!     narrow = "480px"
//!     wide = "1280px"
//!     "#,
//! )
//! .unwrap()
//! .into_theme();
//!
//! assert_eq!(
//!     theme.media().below("narrow").query(),
//!     "screen and (max-width: 1279.98px)"
//! );
//! ```
//!
//! Applications that share one theme install it in [`ThemeState`] at
//! startup and read it back wherever rules are built.

pub mod config;
pub mod error;
pub mod state;
pub mod theme;

pub use config::{OutputUnits, ThemeConfig};
pub use error::{Result, ThemeError};
pub use state::{set_change_callback, ThemeState};
pub use theme::{Theme, DEFAULT_THEME_NAME};
