//! Ordered breakpoint tables
//!
//! A [`BreakpointTable`] maps labels to sizes. Order is significant: it is
//! the progression from the smallest to the largest breakpoint and is what
//! "next breakpoint" means when computing exclusive upper bounds. Entries
//! keep the order they were inserted in; nothing is sorted.

use crate::error::TableError;
use crate::size::Size;

/// Default breakpoints as `(label, size)` pairs, smallest first
pub const DEFAULT_BREAKPOINTS: [(&str, Size); 4] = [
    ("mobile", Size::px(576.0)),
    ("tablet", Size::px(768.0)),
    ("desktop", Size::px(992.0)),
    ("lgDesktop", Size::px(1200.0)),
];

/// An ordered label -> size mapping
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointTable {
    entries: Vec<(String, Size)>,
}

impl BreakpointTable {
    /// Build a table from `(label, size text)` pairs
    pub fn new<I, L, S>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: AsRef<str>,
    {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (label, size) in pairs {
            let label = label.into();
            let size = Size::parse(size.as_ref()).map_err(|source| TableError::InvalidSize {
                label: label.clone(),
                source,
            })?;
            table.push(label, size)?;
        }
        Ok(table)
    }

    /// Build a table from already parsed sizes
    pub fn from_sizes<I, L>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (L, Size)>,
        L: Into<String>,
    {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (label, size) in pairs {
            table.push(label.into(), size)?;
        }
        Ok(table)
    }

    fn push(&mut self, label: String, size: Size) -> Result<(), TableError> {
        if label.trim().is_empty() {
            return Err(TableError::EmptyLabel);
        }
        if self.contains(&label) {
            return Err(TableError::DuplicateLabel(label));
        }
        self.entries.push((label, size));
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<Size> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, size)| *size)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// Index of `label` in breakpoint order
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|(l, _)| l == label)
    }

    /// The entry directly after `label`, if `label` exists and is not last
    pub fn successor(&self, label: &str) -> Option<(&str, Size)> {
        let next = self.position(label)? + 1;
        self.entries
            .get(next)
            .map(|(label, size)| (label.as_str(), *size))
    }

    /// Second-to-last label: the largest one that still has a successor
    pub fn penultimate(&self) -> Option<&str> {
        let len = self.entries.len();
        if len < 2 {
            return None;
        }
        Some(self.entries[len - 2].0.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Size)> + '_ {
        self.entries.iter().map(|(label, size)| (label.as_str(), *size))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild the table with every size transformed by `f`
    pub(crate) fn map_sizes(&self, mut f: impl FnMut(&str, Size) -> Size) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(label, size)| (label.clone(), f(label, *size)))
                .collect(),
        }
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_BREAKPOINTS
                .iter()
                .map(|(label, size)| (label.to_string(), *size))
                .collect(),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use indexmap::IndexMap;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::BreakpointTable;

    impl Serialize for BreakpointTable {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let map: IndexMap<&str, String> = self
                .iter()
                .map(|(label, size)| (label, size.to_string()))
                .collect();
            map.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for BreakpointTable {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let map = IndexMap::<String, String>::deserialize(deserializer)?;
            BreakpointTable::new(map).map_err(D::Error::custom)
        }
    }
}
