//! Size literals used as media bounds
//!
//! A [`Size`] is a number plus an optional CSS length unit. Parsing accepts a
//! leading number followed by a recognised unit suffix (`576px`, `36em`,
//! `48.5rem`, `50%`, `992`). Printing uses the shortest decimal that
//! round-trips, so `992 - 0.02` renders as `991.98px`.

use std::fmt;
use std::str::FromStr;

use crate::error::SizeError;

/// Amount subtracted from the next breakpoint to form an exclusive upper bound
pub const BOUNDARY_EPSILON: f64 = 0.02;

/// Length unit attached to a breakpoint size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    Px,
    Em,
    Rem,
    Percent,
    /// Bare number, as produced by raw numeric references like `"500"`
    Unitless,
}

impl Unit {
    /// CSS suffix for this unit
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::Unitless => "",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "px" => Some(Unit::Px),
            "em" => Some(Unit::Em),
            "rem" => Some(Unit::Rem),
            "%" => Some(Unit::Percent),
            "" => Some(Unit::Unitless),
            _ => None,
        }
    }
}

/// A numeric CSS length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub value: f64,
    pub unit: Unit,
}

impl Size {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// Parse a size literal such as `768px` or `500`
    pub fn parse(input: &str) -> Result<Self, SizeError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(SizeError::Empty);
        }

        let split = numeric_prefix_len(text);
        if split == 0 {
            return Err(SizeError::NotANumber(input.to_string()));
        }

        let (number, suffix) = text.split_at(split);
        let value: f64 = number
            .parse()
            .map_err(|_| SizeError::NotANumber(input.to_string()))?;
        // Digit runs past f64::MAX parse to infinity
        if !value.is_finite() {
            return Err(SizeError::NotANumber(input.to_string()));
        }
        let unit = Unit::from_suffix(suffix.trim()).ok_or_else(|| SizeError::UnsupportedUnit {
            input: input.to_string(),
            unit: suffix.trim().to_string(),
        })?;

        Ok(Self { value, unit })
    }

    /// Same unit, value reduced by `amount`
    #[must_use]
    pub fn minus(self, amount: f64) -> Self {
        Self {
            value: self.value - amount,
            unit: self.unit,
        }
    }

    /// Bound just below this size, used as an exclusive upper limit
    #[must_use]
    pub fn exclusive_upper(self) -> Self {
        self.minus(BOUNDARY_EPSILON)
    }

    pub fn is_px(&self) -> bool {
        self.unit == Unit::Px
    }
}

/// Length of the `[+-]?digits[.digits]` prefix, 0 if there are no digits
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        0
    } else {
        end
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::parse(s)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}
