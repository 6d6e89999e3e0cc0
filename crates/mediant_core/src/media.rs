//! Media query generation
//!
//! [`MediaGenerator`] binds a [`BreakpointTable`] and hands out
//! [`MediaRule`]s for four query shapes:
//!
//! - `above(bp)`: width >= `bp`
//! - `below(bp)`: width <= just below the breakpoint after `bp`
//! - `only(bp)`: both of the above for a single band
//! - `between(a, b)`: from `a` up to just below the breakpoint after `b`
//!
//! Generation is two-stage. The first call binds the breakpoint
//! references and returns a rule; [`MediaRule::css`] then wraps a block of
//! declarations in the `@media` condition.
//!
//! ```rust
//! use mediant_core::MediaGenerator;
//!
//! let media = MediaGenerator::default();
//! let block = media.above("tablet").css("display: flex;");
//! assert_eq!(block, "@media screen and (min-width: 768px) { display: flex; }");
//! ```
//!
//! The plain methods never fail: an unresolvable reference is logged at
//! `warn` level and its bound is rendered empty (`(min-width: )`). Browsers
//! drop a block with an empty bound, so a bad breakpoint disables one rule
//! rather than the whole stylesheet. Use the `try_*` methods to get the
//! [`ResolveError`](crate::ResolveError) instead.

use std::fmt;

use crate::error::Result;
use crate::resolve::{next_boundary_or_warn, resolve_next_boundary, resolve_value, value_or_warn};
use crate::size::Size;
use crate::table::BreakpointTable;

/// Media type every generated rule is scoped to
pub const MEDIA_TYPE: &str = "screen";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthFeature {
    MinWidth,
    MaxWidth,
}

impl WidthFeature {
    pub const fn name(self) -> &'static str {
        match self {
            WidthFeature::MinWidth => "min-width",
            WidthFeature::MaxWidth => "max-width",
        }
    }
}

/// One `(min-width: ..)` / `(max-width: ..)` condition
///
/// `size` is `None` when the breakpoint could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthCondition {
    pub feature: WidthFeature,
    pub size: Option<Size>,
}

impl fmt::Display for WidthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            Some(size) => write!(f, "({}: {})", self.feature.name(), size),
            None => write!(f, "({}: )", self.feature.name()),
        }
    }
}

/// A bound media condition, waiting for the CSS it guards
#[derive(Clone, Debug, PartialEq)]
pub struct MediaRule {
    conditions: Vec<WidthCondition>,
}

impl MediaRule {
    fn new(min: Option<Option<Size>>, max: Option<Option<Size>>) -> Self {
        let mut conditions = Vec::with_capacity(2);
        if let Some(size) = min {
            conditions.push(WidthCondition {
                feature: WidthFeature::MinWidth,
                size,
            });
        }
        if let Some(size) = max {
            conditions.push(WidthCondition {
                feature: WidthFeature::MaxWidth,
                size,
            });
        }
        Self { conditions }
    }

    pub fn conditions(&self) -> &[WidthCondition] {
        &self.conditions
    }

    pub fn min_width(&self) -> Option<Size> {
        self.bound(WidthFeature::MinWidth)
    }

    pub fn max_width(&self) -> Option<Size> {
        self.bound(WidthFeature::MaxWidth)
    }

    fn bound(&self, feature: WidthFeature) -> Option<Size> {
        self.conditions
            .iter()
            .find(|c| c.feature == feature)
            .and_then(|c| c.size)
    }

    /// Whether every bound resolved to a size
    pub fn is_complete(&self) -> bool {
        self.conditions.iter().all(|c| c.size.is_some())
    }

    /// The condition without the `@media` keyword, e.g.
    /// `screen and (min-width: 768px)`
    pub fn query(&self) -> String {
        let mut query = String::from(MEDIA_TYPE);
        for condition in &self.conditions {
            query.push_str(" and ");
            query.push_str(&condition.to_string());
        }
        query
    }

    /// Wrap `body` in this media condition
    pub fn css(&self, body: &str) -> String {
        format!("{} {{ {} }}", self, body.trim())
    }
}

impl fmt::Display for MediaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@media {}", self.query())
    }
}

/// Media rule factory for one breakpoint table
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaGenerator {
    table: BreakpointTable,
}

impl MediaGenerator {
    pub fn new(table: BreakpointTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    /// Active when the viewport is at least `reference` wide
    pub fn above(&self, reference: &str) -> MediaRule {
        MediaRule::new(Some(value_or_warn(reference, &self.table)), None)
    }

    /// Active up to just below the breakpoint after `reference`
    pub fn below(&self, reference: &str) -> MediaRule {
        MediaRule::new(None, Some(next_boundary_or_warn(reference, &self.table)))
    }

    /// Active only inside the band that starts at `reference`
    pub fn only(&self, reference: &str) -> MediaRule {
        MediaRule::new(
            Some(value_or_warn(reference, &self.table)),
            Some(next_boundary_or_warn(reference, &self.table)),
        )
    }

    /// Active from `from` up to just below the breakpoint after `to`.
    /// `from` is not checked to come before `to`.
    pub fn between(&self, from: &str, to: &str) -> MediaRule {
        MediaRule::new(
            Some(value_or_warn(from, &self.table)),
            Some(next_boundary_or_warn(to, &self.table)),
        )
    }

    pub fn try_above(&self, reference: &str) -> Result<MediaRule> {
        let min = resolve_value(reference, &self.table)?;
        Ok(MediaRule::new(Some(Some(min)), None))
    }

    pub fn try_below(&self, reference: &str) -> Result<MediaRule> {
        let max = resolve_next_boundary(reference, &self.table)?;
        Ok(MediaRule::new(None, Some(Some(max))))
    }

    pub fn try_only(&self, reference: &str) -> Result<MediaRule> {
        self.try_between(reference, reference)
    }

    pub fn try_between(&self, from: &str, to: &str) -> Result<MediaRule> {
        let min = resolve_value(from, &self.table)?;
        let max = resolve_next_boundary(to, &self.table)?;
        Ok(MediaRule::new(Some(Some(min)), Some(Some(max))))
    }
}

/// Build a generator for `table`
pub fn generate_media(table: BreakpointTable) -> MediaGenerator {
    MediaGenerator::new(table)
}

impl From<BreakpointTable> for MediaGenerator {
    fn from(table: BreakpointTable) -> Self {
        Self::new(table)
    }
}
