//! Root aggregate

use crate::error::MalformedDataError;
use crate::quadrant::Quadrant;
use crate::ring::Ring;
use serde::Serialize;
use std::sync::Arc;

/// Maximum number of quadrants a radar can hold
pub const MAX_QUADRANTS: usize = 4;

/// The assembled radar handed to a renderer
///
/// Owns its quadrants. Blips are numbered 1.. across quadrants in the order
/// quadrants are added.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Radar {
    quadrants: Vec<Quadrant>,
}

impl Radar {
    /// Create empty radar
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quadrant and number its blips
    ///
    /// # Errors
    /// `MalformedDataError::TooManyQuadrants` if the radar already holds
    /// [`MAX_QUADRANTS`] quadrants.
    pub fn add_quadrant(&mut self, mut quadrant: Quadrant) -> Result<(), MalformedDataError> {
        if self.quadrants.len() == MAX_QUADRANTS {
            return Err(MalformedDataError::TooManyQuadrants { max: MAX_QUADRANTS });
        }

        let first = self.blip_count() + 1;
        for (number, blip) in (first..).zip(quadrant.blips_mut()) {
            blip.set_number(number);
        }
        self.quadrants.push(quadrant);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn quadrants(&self) -> &[Quadrant] {
        &self.quadrants
    }

    /// Find quadrant by display name
    #[must_use]
    pub fn quadrant(&self, name: &str) -> Option<&Quadrant> {
        self.quadrants.iter().find(|q| q.name() == name)
    }

    /// Distinct rings referenced by any blip, sorted by order
    #[must_use]
    pub fn rings(&self) -> Vec<Arc<Ring>> {
        let mut rings: Vec<Arc<Ring>> = Vec::new();
        for blip in self.quadrants.iter().flat_map(Quadrant::blips) {
            if !rings.iter().any(|r| r.name() == blip.ring().name()) {
                rings.push(Arc::clone(blip.ring()));
            }
        }
        rings.sort_by_key(|r| r.order());
        rings
    }

    /// Total blips across quadrants
    #[must_use]
    pub fn blip_count(&self) -> usize {
        self.quadrants.iter().map(|q| q.blips().len()).sum()
    }
}
