//! Sheet references and identifiers
//!
//! Provides [`SheetLocator`] for turning whatever the user pasted (a full
//! spreadsheet URL or a bare key) into the canonical [`SheetId`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

static SPREADSHEET_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://docs\.google\.com/spreadsheets/d/([^/?]+)")
        .unwrap_or_else(|e| unreachable!("spreadsheet URL pattern is valid: {e}"))
});

/// Reference to a sheet as supplied by the caller
///
/// Either a spreadsheet URL or a bare identifier. Never modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetReference(String);

impl SheetReference {
    /// Wrap a caller-supplied reference
    #[inline]
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Raw reference text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SheetReference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SheetReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for SheetReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical spreadsheet identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SheetId(String);

impl SheetId {
    /// Wrap an already-canonical identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SheetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves sheet references to identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetLocator;

impl SheetLocator {
    /// Resolve a reference to its sheet identifier
    ///
    /// For `https://docs.google.com/spreadsheets/d/<ID>...` returns `<ID>`,
    /// the segment up to the next `/`, `?` or end of input. Anything else is
    /// returned unchanged.
    #[must_use]
    pub fn resolve(reference: &SheetReference) -> SheetId {
        let id = SPREADSHEET_URL
            .captures(reference.as_str())
            .and_then(|caps| caps.get(1))
            .map_or(reference.as_str(), |m| m.as_str());
        SheetId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(reference: &str) -> String {
        SheetLocator::resolve(&SheetReference::from(reference)).to_string()
    }

    #[test]
    fn resolves_edit_url() {
        assert_eq!(
            resolve("https://docs.google.com/spreadsheets/d/1khvJxbjy79I9J4j6PtarNS2cJksotT4oEKdRmtXxuPA/edit"),
            "1khvJxbjy79I9J4j6PtarNS2cJksotT4oEKdRmtXxuPA"
        );
    }

    #[test]
    fn resolves_url_with_query_and_bare_end() {
        assert_eq!(
            resolve("https://docs.google.com/spreadsheets/d/abc123?usp=sharing"),
            "abc123"
        );
        assert_eq!(resolve("https://docs.google.com/spreadsheets/d/abc123"), "abc123");
        assert_eq!(resolve("https://docs.google.com/spreadsheets/d/abc123/"), "abc123");
    }

    #[test]
    fn url_found_anywhere_in_reference() {
        assert_eq!(resolve(" https://docs.google.com/spreadsheets/d/abc/edit"), "abc");
        assert_eq!(resolve("\thttps://docs.google.com/spreadsheets/d/abc?usp=sharing\n"), "abc");
        assert_eq!(resolve("sheet: https://docs.google.com/spreadsheets/d/abc"), "abc");
    }

    #[test]
    fn bare_id_is_identity() {
        assert_eq!(resolve("1hsmS0u7tiOpZAPT"), "1hsmS0u7tiOpZAPT");
    }

    #[test]
    fn other_urls_are_identity() {
        let other = "https://example.com/spreadsheets/d/abc/edit";
        assert_eq!(resolve(other), other);
        let http = "http://docs.google.com/spreadsheets/d/abc/edit";
        assert_eq!(resolve(http), http);
    }

    #[test]
    fn empty_id_segment_is_identity() {
        let reference = "https://docs.google.com/spreadsheets/d/";
        assert_eq!(resolve(reference), reference);
    }
}
