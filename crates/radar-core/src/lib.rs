//! Radar Core - sheet to rendered radar
//!
//! Drives one run from a spreadsheet reference to a finished radar:
//! - Checks the sheet is reachable before reading it
//! - Picks a tab and fetches it under a timeout
//! - Validates, sanitizes and assembles the rows into a [`radar_model::Radar`]
//! - Hands the result to a renderer, or one message to an error display
//!
//! # Example
//!
//! ```rust,ignore
//! use radar_core::{PipelineConfig, RadarPipeline};
//! use radar_ingest::{GoogleSheetsClient, SheetsConfig};
//! use std::sync::Arc;
//!
//! # async fn example(renderer: Arc<dyn radar_core::RadarRenderer>, display: Arc<dyn radar_core::ErrorDisplay>) -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(GoogleSheetsClient::new(SheetsConfig::default())?);
//! let pipeline = RadarPipeline::new(PipelineConfig::new(), client.clone(), client, renderer, display);
//!
//! let built = pipeline.build(&"https://docs.google.com/spreadsheets/d/abc/edit".into(), None).await?;
//! println!("{}: {} blips", built.title, built.radar.blip_count());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod assembler;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod types;

// Re-exports for convenience
pub use assembler::{capitalize, RadarAssembler, MAX_RINGS};
pub use error::{
    ConfigError, DisplayableError, ErrorKind, PipelineError, Stage, LOADING_PROBLEM_MESSAGE,
    SHEET_NOT_FOUND_MESSAGE,
};
pub use pipeline::RadarPipeline;
pub use render::{ErrorDisplay, RadarRenderer};
pub use types::{BuiltRadar, PipelineConfig, RadarConfig, API_KEY_ENV, DEFAULT_FAQ_URL};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Radar Core
    pub use crate::{
        BuiltRadar, DisplayableError, ErrorDisplay, ErrorKind, PipelineConfig, RadarAssembler,
        RadarConfig, RadarPipeline, RadarRenderer,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
