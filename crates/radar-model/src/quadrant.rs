//! Radar quadrants

use crate::blip::Blip;
use serde::Serialize;

/// One sector of the radar
///
/// Owns its blips and keeps them in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quadrant {
    name: String,
    blips: Vec<Blip>,
}

impl Quadrant {
    /// Create empty quadrant
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blips: Vec::new(),
        }
    }

    /// Append a blip
    #[inline]
    pub fn add(&mut self, blip: Blip) {
        self.blips.push(blip);
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn blips(&self) -> &[Blip] {
        &self.blips
    }

    pub(crate) fn blips_mut(&mut self) -> &mut [Blip] {
        &mut self.blips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::Ring;
    use std::sync::Arc;

    #[test]
    fn quadrant_keeps_insertion_order() {
        let ring = Arc::new(Ring::new("Trial", 0));
        let mut quadrant = Quadrant::new("Tools");
        quadrant.add(Blip::new("b", Arc::clone(&ring), false, "", ""));
        quadrant.add(Blip::new("a", ring, false, "", ""));

        let names: Vec<_> = quadrant.blips().iter().map(Blip::name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(quadrant.name(), "Tools");
    }
}
