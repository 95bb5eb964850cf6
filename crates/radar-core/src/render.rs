//! Output seams
//!
//! The pipeline hands a finished radar to a [`RadarRenderer`] and a failure
//! message to an [`ErrorDisplay`]. Layout and presentation live behind
//! these traits.

use radar_model::Radar;

/// Draws a finished radar
pub trait RadarRenderer: Send + Sync {
    /// Render `radar` into a square of `size` pixels
    fn render(&self, size: u32, radar: &Radar);
}

/// Shows a failure to the user
pub trait ErrorDisplay: Send + Sync {
    /// Display one message; called at most once per run
    fn show_error(&self, message: &str);
}
