//! Breakpoint resolution
//!
//! Turns a breakpoint reference into a concrete [`Size`]. A reference is
//! either a label in the [`BreakpointTable`] or a raw size literal like
//! `"500"` or `"640px"`. Table labels always win over raw parsing.
//!
//! The `resolve_*` functions return errors. The `*_or_warn` twins log the
//! error at `warn` level and return `None`, which is what the non-fatal
//! media generators build on.

use tracing::warn;

use crate::error::{ResolveError, Result};
use crate::size::{Size, BOUNDARY_EPSILON};
use crate::table::BreakpointTable;

/// Concrete size of `reference`: the table entry, or the reference itself
/// when it parses as a size
pub fn resolve_value(reference: &str, table: &BreakpointTable) -> Result<Size> {
    if let Some(size) = table.get(reference) {
        return Ok(size);
    }
    parse_raw(reference)
}

/// Exclusive upper bound for `reference`: the next breakpoint minus
/// [`BOUNDARY_EPSILON`], or the raw size minus the epsilon
pub fn resolve_next_boundary(reference: &str, table: &BreakpointTable) -> Result<Size> {
    if table.contains(reference) {
        let Some((next_label, next)) = table.successor(reference) else {
            return Err(ResolveError::OutOfRange {
                label: reference.to_string(),
                penultimate: table.penultimate().map(str::to_string),
            });
        };
        if !next.is_px() {
            warn!(
                "breakpoint `{}` is {}; the {} boundary epsilon assumes px",
                next_label, next, BOUNDARY_EPSILON
            );
        }
        return Ok(next.exclusive_upper());
    }
    parse_raw(reference).map(Size::exclusive_upper)
}

/// Raw references need a non-zero integer part; `"0px"` or `"0.5em"` is
/// treated as a typo rather than a bound
fn parse_raw(reference: &str) -> Result<Size> {
    match Size::parse(reference) {
        Ok(size) if size.value.trunc() != 0.0 => Ok(size),
        _ => Err(ResolveError::InvalidBreakpoint {
            reference: reference.to_string(),
        }),
    }
}

/// [`resolve_value`], logging failures instead of returning them
pub fn value_or_warn(reference: &str, table: &BreakpointTable) -> Option<Size> {
    log_failure(resolve_value(reference, table))
}

/// [`resolve_next_boundary`], logging failures instead of returning them
pub fn next_boundary_or_warn(reference: &str, table: &BreakpointTable) -> Option<Size> {
    log_failure(resolve_next_boundary(reference, table))
}

fn log_failure(result: Result<Size>) -> Option<Size> {
    match result {
        Ok(size) => Some(size),
        Err(err) => {
            warn!("mediant: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::Unit;

    #[test]
    fn test_label_lookup() {
        let table = BreakpointTable::default();
        for (label, size) in table.iter() {
            assert_eq!(resolve_value(label, &table), Ok(size));
        }
    }

    #[test]
    fn test_raw_sizes() {
        let table = BreakpointTable::default();
        assert_eq!(
            resolve_value("500", &table),
            Ok(Size::new(500.0, Unit::Unitless))
        );
        assert_eq!(resolve_value("640px", &table), Ok(Size::px(640.0)));
        assert_eq!(
            resolve_next_boundary("500", &table).map(|s| s.to_string()),
            Ok("499.98".to_string())
        );
    }

    #[test]
    fn test_invalid_reference() {
        let table = BreakpointTable::default();
        let err = ResolveError::InvalidBreakpoint {
            reference: "phablet".to_string(),
        };
        assert_eq!(resolve_value("phablet", &table), Err(err.clone()));
        assert_eq!(resolve_next_boundary("phablet", &table), Err(err));
    }

    #[test]
    fn test_zero_raw_reference_is_invalid() {
        let table = BreakpointTable::default();
        for reference in ["0", "0px", "0.5em"] {
            assert_eq!(
                resolve_value(reference, &table),
                Err(ResolveError::InvalidBreakpoint {
                    reference: reference.to_string(),
                })
            );
            assert!(resolve_next_boundary(reference, &table).is_err());
        }
    }

    #[test]
    fn test_zero_table_entry_resolves() {
        let table = BreakpointTable::new([("xs", "0px"), ("sm", "576px")]).unwrap();
        assert_eq!(resolve_value("xs", &table), Ok(Size::px(0.0)));
    }

    #[test]
    fn test_overflowing_raw_reference_is_invalid() {
        let table = BreakpointTable::default();
        let huge = "9".repeat(400);
        assert_eq!(
            resolve_value(&huge, &table),
            Err(ResolveError::InvalidBreakpoint {
                reference: huge.clone(),
            })
        );
        assert_eq!(value_or_warn(&huge, &table), None);
    }

    #[test]
    fn test_next_boundary_of_each_label() {
        let table = BreakpointTable::default();
        let bounds: Vec<String> = ["mobile", "tablet", "desktop"]
            .iter()
            .map(|label| resolve_next_boundary(label, &table).unwrap().to_string())
            .collect();
        assert_eq!(bounds, vec!["767.98px", "991.98px", "1199.98px"]);
    }

    #[test]
    fn test_last_label_is_out_of_range() {
        let table = BreakpointTable::default();
        assert_eq!(
            resolve_next_boundary("lgDesktop", &table),
            Err(ResolveError::OutOfRange {
                label: "lgDesktop".to_string(),
                penultimate: Some("desktop".to_string()),
            })
        );
        assert_eq!(next_boundary_or_warn("lgDesktop", &table), None);
    }

    #[test]
    fn test_label_shadows_numeric_parse() {
        let table = BreakpointTable::new([("100", "320px"), ("200", "640px")]).unwrap();
        assert_eq!(resolve_value("100", &table), Ok(Size::px(320.0)));
        assert_eq!(
            resolve_next_boundary("100", &table).map(|s| s.to_string()),
            Ok("639.98px".to_string())
        );
    }

    #[test]
    fn test_em_successor_keeps_unit() {
        let table = BreakpointTable::new([("sm", "36em"), ("md", "48em")]).unwrap();
        assert_eq!(
            resolve_next_boundary("sm", &table),
            Ok(Size::new(48.0, Unit::Em).exclusive_upper())
        );
    }
}
