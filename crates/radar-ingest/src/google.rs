//! Google Sheets adapter
//!
//! Implements [`SheetAvailability`] and [`TabularSource`] against the Sheets
//! v4 REST API. Every request is parameterized by the resolved [`SheetId`].

use crate::availability::SheetAvailability;
use crate::error::{FetchError, SheetNotFoundError};
use crate::locator::SheetId;
use crate::source::{SheetTable, TabularSource, WorkbookInfo};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Sheets API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    /// Spreadsheets collection endpoint
    pub base_url: String,
    /// API key appended as `key=`; public sheets need one
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl SheetsConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// With base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sheets.googleapis.com/v4/spreadsheets".to_string(),
            api_key: None,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    properties: TitleProperties,
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: TitleProperties,
}

#[derive(Debug, Deserialize)]
struct TitleProperties {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// HTTP client for Google Sheets
#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    config: SheetsConfig,
}

impl GoogleSheetsClient {
    /// Create client
    ///
    /// # Errors
    /// `FetchError::Configuration` if the base URL is unusable or the HTTP
    /// client cannot be built.
    pub fn new(config: SheetsConfig) -> Result<Self, FetchError> {
        Url::parse(&config.base_url)
            .map_err(|e| FetchError::Configuration(format!("invalid base url: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| FetchError::Configuration(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// URL of a spreadsheet resource, with path segments percent-encoded
    ///
    /// # Errors
    /// `FetchError::Configuration` if the base URL cannot take a path.
    pub fn spreadsheet_url(&self, sheet_id: &SheetId, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| FetchError::Configuration(format!("invalid base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::Configuration("base url cannot hold a path".to_string()))?
            .pop_if_empty()
            .push(sheet_id.as_str())
            .extend(segments);

        if let Some(key) = &self.config.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        sheet_id: &SheetId,
        url: Url,
    ) -> Result<T, FetchError> {
        tracing::debug!(%sheet_id, path = url.path(), "sheets request");
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(sheet_id.clone()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Quote a tab name as an A1 range covering the whole tab
fn tab_range(sheet_name: &str) -> String {
    format!("'{}'", sheet_name.replace('\'', "''"))
}

#[async_trait]
impl SheetAvailability for GoogleSheetsClient {
    async fn check(&self, sheet_id: &SheetId) -> Result<(), SheetNotFoundError> {
        let mut url = self
            .spreadsheet_url(sheet_id, &[])
            .map_err(|e| SheetNotFoundError::new(sheet_id.clone(), e.to_string()))?;
        url.query_pairs_mut().append_pair("fields", "spreadsheetId");

        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(%sheet_id, "sheet is available");
                Ok(())
            }
            Ok(response) => Err(SheetNotFoundError::new(
                sheet_id.clone(),
                format!("status {}", response.status().as_u16()),
            )),
            Err(e) => Err(SheetNotFoundError::new(sheet_id.clone(), e.to_string())),
        }
    }
}

#[async_trait]
impl TabularSource for GoogleSheetsClient {
    async fn describe(&self, sheet_id: &SheetId) -> Result<WorkbookInfo, FetchError> {
        let mut url = self.spreadsheet_url(sheet_id, &[])?;
        url.query_pairs_mut()
            .append_pair("fields", "properties.title,sheets.properties.title");

        let meta: SpreadsheetMeta = self.get_json(sheet_id, url).await?;
        Ok(WorkbookInfo::new(
            meta.properties.title,
            meta.sheets.into_iter().map(|s| s.properties.title),
        ))
    }

    async fn fetch(&self, sheet_id: &SheetId, sheet_name: &str) -> Result<SheetTable, FetchError> {
        let range = tab_range(sheet_name);
        let mut url = self.spreadsheet_url(sheet_id, &["values", &range])?;
        url.query_pairs_mut().append_pair("majorDimension", "ROWS");

        let values: ValueRange = self.get_json(sheet_id, url).await?;
        let table = SheetTable::from_grid(values.values);
        tracing::debug!(
            %sheet_id,
            sheet_name,
            columns = table.column_names.len(),
            rows = table.rows.len(),
            "fetched tab"
        );
        Ok(table)
    }
}
