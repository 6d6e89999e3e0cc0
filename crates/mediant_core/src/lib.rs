//! Mediant Core
//!
//! Breakpoint-driven CSS media query generation.
//!
//! - **Breakpoint tables**: ordered label -> size maps (`mobile`, `tablet`, ...)
//! - **Resolution**: labels or raw sizes to concrete bounds, with exclusive
//!   upper bounds taken just below the next breakpoint
//! - **Media rules**: `above`, `below`, `only` and `between` query shapes
//!
//! # Example
//!
//! ```rust
//! use mediant_core::{BreakpointTable, MediaGenerator};
//!
//! let media = MediaGenerator::new(BreakpointTable::default());
//!
//! let css = media.between("mobile", "desktop").css("padding: 8px;");
//! assert_eq!(
//!     css,
//!     "@media screen and (min-width: 576px) and (max-width: 991.98px) { padding: 8px; }"
//! );
//! ```
//!
//! # Errors
//!
//! Bad breakpoint references never abort generation by default. The plain
//! generator methods log a `warn` through `tracing` and leave the bound
//! empty; the `try_*` methods return a [`ResolveError`] instead.

pub mod convert;
pub mod error;
pub mod legacy;
pub mod media;
pub mod resolve;
pub mod size;
pub mod table;

pub use convert::{to_em, to_rem, DEFAULT_BASE_FONT_SIZE};
pub use error::{ResolveError, SizeError, TableError};
pub use legacy::{LegacyMedia, LegacyRule};
pub use media::{generate_media, MediaGenerator, MediaRule, WidthCondition, WidthFeature};
pub use resolve::{next_boundary_or_warn, resolve_next_boundary, resolve_value, value_or_warn};
pub use size::{Size, Unit, BOUNDARY_EPSILON};
pub use table::{BreakpointTable, DEFAULT_BREAKPOINTS};
