//! Blips and their sanitized spreadsheet form

use crate::ring::Ring;
use serde::Serialize;
use std::sync::Arc;

/// One spreadsheet row after normalization
///
/// Produced from exactly one raw row and never mutated afterward. Cells the
/// row did not carry are empty strings; `is_new` is `false` unless the cell
/// said `true` in any casing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SanitizedBlip {
    /// Blip name
    pub name: String,
    /// Quadrant name as written in the sheet
    pub quadrant: String,
    /// Ring name as written in the sheet
    pub ring: String,
    /// Whether the blip is new on this edition
    pub is_new: bool,
    /// Optional topic label
    pub topic: String,
    /// Description markup (restricted tag set)
    pub description: String,
}

impl SanitizedBlip {
    /// Create blip record with the fields assembly needs
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        quadrant: impl Into<String>,
        ring: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quadrant: quadrant.into(),
            ring: ring.into(),
            ..Self::default()
        }
    }

    /// Mark as new
    #[inline]
    #[must_use]
    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    /// With topic
    #[inline]
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A tracked item placed on the radar
///
/// The ring is shared, not owned: every blip in the same ring points at the
/// same [`Ring`] instance. `number` is assigned by [`crate::Radar`] when the
/// owning quadrant is added and stays `None` until then.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blip {
    name: String,
    ring: Arc<Ring>,
    is_new: bool,
    topic: String,
    description: String,
    number: Option<usize>,
}

impl Blip {
    /// Create blip bound to a ring
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ring: Arc<Ring>,
        is_new: bool,
        topic: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ring,
            is_new,
            topic: topic.into(),
            description: description.into(),
            number: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn ring(&self) -> &Arc<Ring> {
        &self.ring
    }

    #[inline]
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    #[inline]
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// 1-based display number, once placed on a radar
    #[inline]
    #[must_use]
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    pub(crate) fn set_number(&mut self, number: usize) {
        self.number = Some(number);
    }
}
