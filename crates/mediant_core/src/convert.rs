//! Pixel to em/rem conversion for whole breakpoint tables

use tracing::warn;

use crate::size::{Size, Unit};
use crate::table::BreakpointTable;

/// Browser default root font size in pixels
pub const DEFAULT_BASE_FONT_SIZE: f64 = 16.0;

/// Convert every pixel breakpoint to `em`, dividing by `base` pixels.
/// A `base` that is not a positive finite number leaves the table as is.
pub fn to_em(table: &BreakpointTable, base: f64) -> BreakpointTable {
    convert(table, base, Unit::Em)
}

/// Convert every pixel breakpoint to `rem`, dividing by `base` pixels
pub fn to_rem(table: &BreakpointTable, base: f64) -> BreakpointTable {
    convert(table, base, Unit::Rem)
}

fn convert(table: &BreakpointTable, base: f64, unit: Unit) -> BreakpointTable {
    if !(base.is_finite() && base > 0.0) {
        warn!(
            "base font size {} is not a positive number; breakpoints left in px",
            base
        );
        return table.clone();
    }
    table.map_sizes(|label, size| match size.unit {
        Unit::Px | Unit::Unitless => Size::new(size.value / base, unit),
        _ => {
            warn!(
                "breakpoint `{}` is {}, not px; left unconverted",
                label, size
            );
            size
        }
    })
}

impl BreakpointTable {
    /// See [`to_em`]
    pub fn to_em(&self, base: f64) -> BreakpointTable {
        to_em(self, base)
    }

    /// See [`to_rem`]
    pub fn to_rem(&self, base: f64) -> BreakpointTable {
        to_rem(self, base)
    }
}
