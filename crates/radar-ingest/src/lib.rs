//! Radar Ingestion Layer
//!
//! The boundary between an external spreadsheet and the radar domain model.
//!
//! # Core Operations
//!
//! - **Locate**: Resolve a URL or bare identifier to a [`SheetId`]
//! - **Check**: Confirm the sheet is reachable ([`SheetAvailability`])
//! - **Fetch**: Read a tab as column names plus rows ([`TabularSource`])
//! - **Validate**: Reject empty data and missing headers ([`ContentValidator`])
//! - **Sanitize**: Normalize each row into a [`radar_model::SanitizedBlip`]
//!
//! # Architecture
//!
//! ```text
//! reference → SheetLocator → SheetAvailability → TabularSource → ContentValidator → RowSanitizer
//!                                  ↑___________________↑
//!                                   GoogleSheetsClient (reqwest)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use radar_ingest::{ContentValidator, GoogleSheetsClient, RowSanitizer, SheetLocator, SheetsConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GoogleSheetsClient::new(SheetsConfig::default())?;
//! let sheet_id = SheetLocator::resolve(&"https://docs.google.com/spreadsheets/d/abc/edit".into());
//!
//! client.check(&sheet_id).await?;
//! let table = client.fetch(&sheet_id, "Sheet1").await?;
//!
//! let validator = ContentValidator::new(&table.column_names);
//! validator.verify_content(&table.rows)?;
//! validator.verify_headers()?;
//!
//! let sanitizer = RowSanitizer::new();
//! let blips: Vec<_> = table.rows.iter().map(|row| sanitizer.sanitize(row)).collect();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod availability;
pub mod error;
pub mod google;
pub mod locator;
pub mod sanitizer;
pub mod source;
pub mod validator;

// Re-exports for convenience
pub use availability::SheetAvailability;
pub use error::{FetchError, SheetNotFoundError};
pub use google::{GoogleSheetsClient, SheetsConfig};
pub use locator::{SheetId, SheetLocator, SheetReference};
pub use sanitizer::{MarkupPolicy, RowSanitizer};
pub use source::{RawRow, SheetTable, TabularSource, WorkbookInfo};
pub use validator::{ContentValidator, OPTIONAL_COLUMNS, REQUIRED_COLUMNS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the ingestion layer
    pub use crate::availability::SheetAvailability;
    pub use crate::error::{FetchError, SheetNotFoundError};
    pub use crate::locator::{SheetId, SheetLocator, SheetReference};
    pub use crate::sanitizer::RowSanitizer;
    pub use crate::source::{RawRow, SheetTable, TabularSource, WorkbookInfo};
    pub use crate::validator::ContentValidator;
    pub use radar_model::{MalformedDataError, SanitizedBlip};
}
