//! Content validation for fetched sheets
//!
//! Column shape is checked wholesale before any row is touched, so a wrong
//! schema yields one clear error instead of a cascade of per-row failures.

use crate::source::RawRow;
use radar_model::MalformedDataError;

/// Columns every radar sheet must carry, in canonical order
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "ring", "quadrant", "isNew", "description"];

/// Columns read when present
pub const OPTIONAL_COLUMNS: [&str; 1] = ["topic"];

/// Validates the column set and row count of a fetched tab
#[derive(Debug, Clone)]
pub struct ContentValidator {
    column_names: Vec<String>,
}

impl ContentValidator {
    /// Create validator for the columns a fetch produced
    #[must_use]
    pub fn new(column_names: &[impl AsRef<str>]) -> Self {
        Self {
            column_names: column_names
                .iter()
                .map(|c| c.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Fail if there are no data rows
    ///
    /// # Errors
    /// `MalformedDataError::MissingContent` when `rows` is empty.
    pub fn verify_content(&self, rows: &[RawRow]) -> Result<(), MalformedDataError> {
        if rows.is_empty() {
            tracing::warn!(columns = self.column_names.len(), "sheet has no data rows");
            return Err(MalformedDataError::MissingContent);
        }
        Ok(())
    }

    /// Fail if any required column is absent
    ///
    /// # Errors
    /// `MalformedDataError::MissingHeaders` listing every absent required
    /// column.
    pub fn verify_headers(&self) -> Result<(), MalformedDataError> {
        let missing = self.missing_columns();
        if missing.is_empty() {
            return Ok(());
        }

        tracing::warn!(?missing, "sheet is missing required headers");
        Err(MalformedDataError::missing_headers(missing))
    }

    /// Required columns not present, compared case-insensitively
    #[must_use]
    pub fn missing_columns(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|required| !self.has_column(required))
            .collect()
    }

    /// Whether a column is present, ignoring case
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names
            .iter()
            .any(|c| c.eq_ignore_ascii_case(name))
    }

    /// Trimmed column names
    #[inline]
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }
}
