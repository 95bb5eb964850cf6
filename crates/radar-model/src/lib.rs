//! Radar Domain Model
//!
//! The object graph a technology radar is rendered from.
//!
//! # Core Concepts
//!
//! - [`Ring`]: Concentric maturity band, ordered by first appearance
//! - [`Quadrant`]: Sector that owns an ordered list of blips
//! - [`Blip`]: One tracked item, bound to a shared [`Ring`]
//! - [`Radar`]: Root aggregate holding at most [`MAX_QUADRANTS`] quadrants
//! - [`SanitizedBlip`]: Normalized spreadsheet row, input to assembly
//!
//! # Example
//!
//! ```rust
//! use radar_model::{Blip, Quadrant, Radar, Ring};
//! use std::sync::Arc;
//!
//! let adopt = Arc::new(Ring::new("Adopt", 0));
//! let mut platforms = Quadrant::new("Platforms");
//! platforms.add(Blip::new("Kubernetes", adopt, true, "", "Container orchestration"));
//!
//! let mut radar = Radar::new();
//! radar.add_quadrant(platforms).unwrap();
//! assert_eq!(radar.blip_count(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod blip;
mod error;
mod quadrant;
mod radar;
mod ring;

pub use blip::{Blip, SanitizedBlip};
pub use error::MalformedDataError;
pub use quadrant::Quadrant;
pub use radar::{Radar, MAX_QUADRANTS};
pub use ring::Ring;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn shared_ring_across_quadrants() {
        let hold = Arc::new(Ring::new("Hold", 3));

        let mut tools = Quadrant::new("Tools");
        tools.add(Blip::new("Ant", Arc::clone(&hold), false, "", ""));
        let mut languages = Quadrant::new("Languages");
        languages.add(Blip::new("Perl", Arc::clone(&hold), false, "", ""));

        let mut radar = Radar::new();
        radar.add_quadrant(tools).unwrap();
        radar.add_quadrant(languages).unwrap();

        let rings = radar.rings();
        assert_eq!(rings.len(), 1);
        assert!(Arc::ptr_eq(&rings[0], &hold));
        assert_eq!(Arc::strong_count(&hold), 4);
    }

    #[test]
    fn radar_serializes_rings_by_value() {
        let trial = Arc::new(Ring::new("Trial", 1));
        let mut techniques = Quadrant::new("Techniques");
        techniques.add(Blip::new("Pairing", trial, false, "team", "<b>Do it</b>"));

        let mut radar = Radar::new();
        radar.add_quadrant(techniques).unwrap();

        let json = serde_json::to_value(&radar).unwrap();
        let blip = &json["quadrants"][0]["blips"][0];
        assert_eq!(blip["ring"]["name"], "Trial");
        assert_eq!(blip["ring"]["order"], 1);
        assert_eq!(blip["number"], 1);
    }
}
