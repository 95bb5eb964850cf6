//! Error types for the ingestion layer
//!
//! Provides error handling for:
//! - Availability checks (sheet cannot be reached)
//! - Fetch operations (workbook description and tab contents)
//!
//! Schema violations live in [`radar_model::MalformedDataError`].

use crate::locator::SheetId;

/// The resolved sheet could not be reached
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sheet not found: {sheet_id} ({reason})")]
pub struct SheetNotFoundError {
    /// Sheet that was checked
    pub sheet_id: SheetId,
    /// Status or transport detail, for logs only
    pub reason: String,
}

impl SheetNotFoundError {
    /// Create not-found error for sheet
    pub fn new(sheet_id: SheetId, reason: impl Into<String>) -> Self {
        Self {
            sheet_id,
            reason: reason.into(),
        }
    }
}

/// Errors while reading tabular data
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Spreadsheet does not exist or is not shared
    #[error("spreadsheet not found: {0}")]
    NotFound(SheetId),

    /// Requested tab is not in the workbook
    #[error("tab '{name}' not found in spreadsheet {sheet_id}")]
    TabNotFound {
        /// Spreadsheet searched
        sheet_id: SheetId,
        /// Tab requested
        name: String,
    },

    /// API answered with a non-success status
    #[error("sheets API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        message: String,
    },

    /// Request transport failed
    #[error("transport error: {0}")]
    Transport(String),

    /// Response payload could not be decoded
    #[error("parse error: {0}")]
    Parse(String),

    /// Client is misconfigured
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl FetchError {
    /// Create tab-not-found error
    pub fn tab_not_found(sheet_id: SheetId, name: impl Into<String>) -> Self {
        Self::TabNotFound {
            sheet_id,
            name: name.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::Parse(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
