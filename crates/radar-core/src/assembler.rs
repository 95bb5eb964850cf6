//! Domain assembly
//!
//! Builds the Ring/Quadrant/Blip graph from sanitized rows:
//! - Rings in order of first appearance, at most [`MAX_RINGS`]
//! - Quadrants in order of first appearance, display name capitalized
//! - Blips appended to their quadrant in row order

use indexmap::{IndexMap, IndexSet};
use radar_model::{Blip, MalformedDataError, Quadrant, Radar, Ring, SanitizedBlip};
use std::sync::Arc;

/// Maximum number of distinct rings
pub const MAX_RINGS: usize = 4;

/// Ring discovery result: ring names in first-appearance order, and for each
/// input blip the index of its ring in that list
#[derive(Debug, Clone, PartialEq, Eq)]
struct RingPlan<'a> {
    names: IndexSet<&'a str>,
    ring_of_blip: Vec<usize>,
}

/// Assembles radars from sanitized blips
#[derive(Debug, Clone, Copy, Default)]
pub struct RadarAssembler;

impl RadarAssembler {
    /// Create assembler
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build a radar from blips in sheet order
    ///
    /// # Errors
    /// - `MalformedDataError::TooManyRings` on a 5th distinct ring name
    /// - `MalformedDataError::TooManyQuadrants` on a 5th distinct quadrant
    pub fn assemble(&self, blips: &[SanitizedBlip]) -> Result<Radar, MalformedDataError> {
        let plan = Self::plan_rings(blips)?;

        let rings: Vec<Arc<Ring>> = plan
            .names
            .iter()
            .enumerate()
            .map(|(order, name)| Arc::new(Ring::new(*name, order)))
            .collect();

        let mut quadrants: IndexMap<&str, Quadrant> = IndexMap::new();
        for (blip, ring_index) in blips.iter().zip(&plan.ring_of_blip) {
            quadrants
                .entry(blip.quadrant.as_str())
                .or_insert_with(|| Quadrant::new(capitalize(&blip.quadrant)))
                .add(Blip::new(
                    blip.name.clone(),
                    Arc::clone(&rings[*ring_index]),
                    blip.is_new,
                    blip.topic.clone(),
                    blip.description.clone(),
                ));
        }

        let mut radar = Radar::new();
        for quadrant in quadrants.into_values() {
            radar.add_quadrant(quadrant)?;
        }

        tracing::debug!(
            rings = rings.len(),
            quadrants = radar.quadrants().len(),
            blips = radar.blip_count(),
            "assembled radar"
        );
        Ok(radar)
    }

    /// Discover rings and bind every blip to one in a single pass
    ///
    /// Fails on the first name past [`MAX_RINGS`], before any ring is built.
    fn plan_rings(blips: &[SanitizedBlip]) -> Result<RingPlan<'_>, MalformedDataError> {
        let mut names = IndexSet::new();
        let mut ring_of_blip = Vec::with_capacity(blips.len());

        for blip in blips {
            let (index, _) = names.insert_full(blip.ring.as_str());
            if index == MAX_RINGS {
                tracing::warn!(ring = %blip.ring, max = MAX_RINGS, "too many rings");
                return Err(MalformedDataError::TooManyRings { max: MAX_RINGS });
            }
            ring_of_blip.push(index);
        }

        Ok(RingPlan {
            names,
            ring_of_blip,
        })
    }
}

/// Upper-case the first character, lower-case the rest
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
