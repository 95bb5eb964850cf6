//! Error types for radar data
//!
//! Every rule a sheet can break on its way into a [`crate::Radar`]: missing
//! content, missing headers, and ring/quadrant capacity.

/// Schema or cardinality violation in the source data
///
/// The `Display` text is the reason shown to the end user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedDataError {
    /// The sheet has no data rows
    #[error("Document is missing content.")]
    MissingContent,

    /// Required columns are absent
    #[error(
        "Document is missing required headers or they are misspelled: {}. Check that your document contains headers for \"name\", \"ring\", \"quadrant\", \"isNew\", \"description\".",
        quoted(.missing)
    )]
    MissingHeaders { missing: Vec<String> },

    /// More distinct ring names than the radar can draw
    #[error("More than {max} rings.")]
    TooManyRings { max: usize },

    /// More distinct quadrant names than the radar can draw
    #[error("There are more than {max} quadrant names listed in your data. Check the quadrant column for errors.")]
    TooManyQuadrants { max: usize },
}

impl MalformedDataError {
    /// Create missing-headers error
    pub fn missing_headers<S: Into<String>>(missing: impl IntoIterator<Item = S>) -> Self {
        Self::MissingHeaders {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("\"{n}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
