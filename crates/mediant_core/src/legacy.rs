//! Deprecated per-label accessors
//!
//! Older stylesheets wrote `media.to.mobile` and `media.from.mobile`. These
//! map onto [`MediaGenerator::below`] and [`MediaGenerator::above`], and
//! every rendered block logs a deprecation warning. Nothing in the core
//! depends on this module.

use tracing::warn;

use crate::media::{MediaGenerator, MediaRule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    To,
    From,
}

/// `to` / `from` view over a generator
#[derive(Clone, Copy, Debug)]
pub struct LegacyMedia<'a> {
    media: &'a MediaGenerator,
}

impl<'a> LegacyMedia<'a> {
    pub fn new(media: &'a MediaGenerator) -> Self {
        Self { media }
    }

    /// Old spelling of `below(label)`; `None` if `label` is not in the table
    #[deprecated(note = "use `MediaGenerator::below` instead")]
    pub fn to(&self, label: &str) -> Option<LegacyRule<'a>> {
        self.rule(label, Direction::To)
    }

    /// Old spelling of `above(label)`; `None` if `label` is not in the table
    #[deprecated(note = "use `MediaGenerator::above` instead")]
    pub fn from(&self, label: &str) -> Option<LegacyRule<'a>> {
        self.rule(label, Direction::From)
    }

    /// Labels that have `to` / `from` accessors
    pub fn labels(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.media.table().labels()
    }

    fn rule(&self, label: &str, direction: Direction) -> Option<LegacyRule<'a>> {
        let label = self.media.table().labels().find(|l| *l == label)?;
        Some(LegacyRule {
            media: self.media,
            label,
            direction,
        })
    }
}

/// A legacy accessor bound to one label
#[derive(Clone, Copy, Debug)]
pub struct LegacyRule<'a> {
    media: &'a MediaGenerator,
    label: &'a str,
    direction: Direction,
}

impl LegacyRule<'_> {
    pub fn label(&self) -> &str {
        self.label
    }

    /// Equivalent canonical rule, without the deprecation warning
    pub fn canonical(&self) -> MediaRule {
        match self.direction {
            Direction::To => self.media.below(self.label),
            Direction::From => self.media.above(self.label),
        }
    }

    /// Wrap `body`, logging one deprecation warning per call
    pub fn css(&self, body: &str) -> String {
        match self.direction {
            Direction::To => warn!(
                "mediant: use media.below('{}') instead of old media.to.{}",
                self.label, self.label
            ),
            Direction::From => warn!(
                "mediant: use media.above('{}') instead of old media.from.{}",
                self.label, self.label
            ),
        }
        self.canonical().css(body)
    }
}

impl MediaGenerator {
    /// Deprecated `to` / `from` accessors for this generator
    pub fn legacy(&self) -> LegacyMedia<'_> {
        LegacyMedia::new(self)
    }
}
