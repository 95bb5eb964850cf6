//! Sheet availability checks
//!
//! The first network interaction of every run: confirm the resolved sheet is
//! reachable before any data is fetched.

use crate::error::SheetNotFoundError;
use crate::locator::SheetId;
use async_trait::async_trait;

/// Confirms a sheet can be reached
///
/// Implementations deliver exactly one outcome per call and never retry.
/// Any failure to reach the sheet, including transport errors, is reported
/// as [`SheetNotFoundError`] rather than a separate error kind.
#[async_trait]
pub trait SheetAvailability: Send + Sync {
    /// Check that `sheet_id` is reachable
    ///
    /// # Errors
    /// `SheetNotFoundError` when the sheet is missing, private or unreachable.
    async fn check(&self, sheet_id: &SheetId) -> Result<(), SheetNotFoundError>;
}
