//! Error types for the radar pipeline
//!
//! Provides:
//! - [`PipelineError`]: every way a run can fail, with its source
//! - [`ErrorKind`]: the three user-facing failure categories
//! - [`DisplayableError`]: the single message a failed run hands to the user
//! - [`ConfigError`]: configuration loading failures

use radar_ingest::{FetchError, SheetNotFoundError};
use radar_model::MalformedDataError;
use serde::Serialize;

/// Message shown when the sheet cannot be reached
pub const SHEET_NOT_FOUND_MESSAGE: &str =
    "Oops! We can't find the Google Sheet you've entered. Can you check the URL?";

/// Prefix for data problems and unclassified failures
pub const LOADING_PROBLEM_MESSAGE: &str =
    "Oops! It seems like there are some problems with loading your data. ";

/// Pipeline stage an external call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Availability check
    Availability,
    /// Workbook description or tab fetch
    Fetch,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Availability => f.write_str("availability check"),
            Stage::Fetch => f.write_str("fetch"),
        }
    }
}

/// Main pipeline error type
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Sheet could not be reached
    #[error("sheet unavailable: {0}")]
    SheetUnavailable(#[from] SheetNotFoundError),

    /// Schema or cardinality violation
    #[error("malformed data: {0}")]
    MalformedData(#[from] MalformedDataError),

    /// Reading the sheet failed
    #[error("fetch failed: {0}")]
    Fetch(FetchError),

    /// External call did not complete in time
    #[error("{stage} timed out after {duration_secs}s")]
    Timeout {
        /// Stage that timed out
        stage: Stage,
        /// Configured limit
        duration_secs: u64,
    },
}

impl PipelineError {
    /// User-facing category
    ///
    /// An availability check that times out counts as an unavailable sheet;
    /// every other timeout is unclassified.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SheetUnavailable(_)
            | Self::Timeout {
                stage: Stage::Availability,
                ..
            } => ErrorKind::SheetUnavailable,
            Self::MalformedData(_) => ErrorKind::MalformedData,
            Self::Fetch(_) | Self::Timeout { .. } => ErrorKind::Unclassified,
        }
    }
}

impl From<FetchError> for PipelineError {
    /// A spreadsheet the fetch cannot find is reported as unavailable
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::NotFound(sheet_id) => {
                Self::SheetUnavailable(SheetNotFoundError::new(sheet_id, "not found during fetch"))
            }
            other => Self::Fetch(other),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`crate::RadarConfig`]
    #[error("invalid config: {0}")]
    InvalidToml(#[from] toml::de::Error),
}

/// User-facing failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The sheet could not be reached
    SheetUnavailable,
    /// The sheet's data breaks a schema or capacity rule
    MalformedData,
    /// Anything else; details go to the log only
    Unclassified,
}

/// The one message a failed run shows to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct DisplayableError {
    /// Failure category
    pub kind: ErrorKind,
    /// Markup to display
    pub message: String,
}

impl DisplayableError {
    /// Convert a pipeline error into its displayable message
    ///
    /// Malformed data shows its reason; an unavailable sheet shows the fixed
    /// not-found text; anything else shows the generic text only. All three
    /// end with a pointer to the FAQ.
    #[must_use]
    pub fn from_pipeline_error(error: &PipelineError, faq_url: &str) -> Self {
        let kind = error.kind();
        let mut message = match (&kind, error) {
            (ErrorKind::MalformedData, PipelineError::MalformedData(reason)) => {
                format!("{LOADING_PROBLEM_MESSAGE}{reason}")
            }
            (ErrorKind::SheetUnavailable, _) => SHEET_NOT_FOUND_MESSAGE.to_string(),
            _ => LOADING_PROBLEM_MESSAGE.to_string(),
        };
        message.push_str(&faq_guidance(faq_url));

        Self { kind, message }
    }
}

fn faq_guidance(faq_url: &str) -> String {
    format!(
        "<br/>Please check <a href=\"{}\">FAQs</a> for possible solutions.",
        faq_url.replace('"', "&quot;")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_ingest::SheetId;

    const FAQ: &str = "https://example.com/faq";

    #[test]
    fn kinds() {
        let unavailable = PipelineError::from(SheetNotFoundError::new(SheetId::new("x"), "404"));
        assert_eq!(unavailable.kind(), ErrorKind::SheetUnavailable);

        let malformed = PipelineError::from(MalformedDataError::MissingContent);
        assert_eq!(malformed.kind(), ErrorKind::MalformedData);

        let fetch = PipelineError::from(FetchError::Transport("reset".to_string()));
        assert_eq!(fetch.kind(), ErrorKind::Unclassified);

        let tab = PipelineError::from(FetchError::tab_not_found(SheetId::new("x"), "2019"));
        assert_eq!(tab.kind(), ErrorKind::Unclassified);
    }

    #[test]
    fn fetch_not_found_is_unavailable() {
        let err = PipelineError::from(FetchError::NotFound(SheetId::new("x")));
        assert!(matches!(err, PipelineError::SheetUnavailable(ref e) if e.sheet_id == SheetId::new("x")));
        assert_eq!(err.kind(), ErrorKind::SheetUnavailable);
    }

    #[test]
    fn timeout_kind_depends_on_stage() {
        let availability = PipelineError::Timeout {
            stage: Stage::Availability,
            duration_secs: 30,
        };
        assert_eq!(availability.kind(), ErrorKind::SheetUnavailable);

        let fetch = PipelineError::Timeout {
            stage: Stage::Fetch,
            duration_secs: 60,
        };
        assert_eq!(fetch.kind(), ErrorKind::Unclassified);
        assert_eq!(fetch.to_string(), "fetch timed out after 60s");
    }

    #[test]
    fn malformed_message_has_reason_and_faq() {
        let err = PipelineError::from(MalformedDataError::TooManyRings { max: 4 });
        let displayable = DisplayableError::from_pipeline_error(&err, FAQ);

        assert_eq!(
            displayable.message,
            "Oops! It seems like there are some problems with loading your data. More than 4 rings.<br/>Please check <a href=\"https://example.com/faq\">FAQs</a> for possible solutions."
        );
    }

    #[test]
    fn unavailable_message_is_fixed() {
        let err = PipelineError::from(SheetNotFoundError::new(SheetId::new("x"), "status 403"));
        let displayable = DisplayableError::from_pipeline_error(&err, FAQ);

        assert!(displayable.message.starts_with(SHEET_NOT_FOUND_MESSAGE));
        assert!(!displayable.message.contains("403"));
    }

    #[test]
    fn unclassified_message_hides_detail() {
        let err = PipelineError::from(FetchError::Parse("expected value at line 1".to_string()));
        let displayable = DisplayableError::from_pipeline_error(&err, FAQ);

        assert_eq!(displayable.kind, ErrorKind::Unclassified);
        assert!(displayable.message.starts_with(LOADING_PROBLEM_MESSAGE));
        assert!(!displayable.message.contains("expected value"));
        assert_eq!(displayable.to_string(), displayable.message);
    }
}
