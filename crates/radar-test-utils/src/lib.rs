//! Testing utilities for the radar workspace
//!
//! Shared fixtures and in-memory collaborators for pipeline tests.

#![allow(missing_docs)]

use async_trait::async_trait;
use radar_core::{ErrorDisplay, PipelineConfig, RadarPipeline, RadarRenderer};
use radar_ingest::{
    FetchError, RawRow, SheetAvailability, SheetId, SheetNotFoundError, SheetTable, TabularSource,
    WorkbookInfo,
};
use radar_model::{Radar, SanitizedBlip};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const STANDARD_COLUMNS: [&str; 5] = ["name", "ring", "quadrant", "isNew", "description"];

pub fn raw_row(columns: &[&str], cells: &[&str]) -> RawRow {
    columns.iter().copied().zip(cells.iter().copied()).collect()
}

pub fn table(columns: &[&str], rows: &[&[&str]]) -> SheetTable {
    SheetTable::new(
        columns.iter().map(|c| (*c).to_string()).collect(),
        rows.iter().map(|cells| raw_row(columns, cells)).collect(),
    )
}

pub fn standard_table(rows: &[[&str; 5]]) -> SheetTable {
    let rows: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
    table(&STANDARD_COLUMNS, &rows)
}

pub fn sanitized(name: &str, quadrant: &str, ring: &str) -> SanitizedBlip {
    SanitizedBlip::new(name, quadrant, ring)
}

/// Availability check with a fixed answer
#[derive(Debug, Default)]
pub struct StaticAvailability {
    failure: Option<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticAvailability {
    pub fn available() -> Self {
        Self::default()
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SheetAvailability for StaticAvailability {
    async fn check(&self, sheet_id: &SheetId) -> Result<(), SheetNotFoundError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(reason) => Err(SheetNotFoundError::new(sheet_id.clone(), reason.clone())),
            None => Ok(()),
        }
    }
}

/// Workbook held in memory
#[derive(Debug, Default)]
pub struct InMemorySource {
    title: String,
    tabs: Vec<(String, SheetTable)>,
    missing: bool,
    delay: Option<Duration>,
    describe_calls: AtomicUsize,
    fetched: Mutex<Vec<String>>,
}

impl InMemorySource {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Source whose spreadsheet does not exist
    pub fn missing() -> Self {
        Self {
            missing: true,
            ..Self::default()
        }
    }

    pub fn with_tab(mut self, name: &str, table: SheetTable) -> Self {
        self.tabs.push((name.to_string(), table));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn describe_calls(&self) -> usize {
        self.describe_calls.load(Ordering::SeqCst)
    }

    pub fn fetched_tabs(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl TabularSource for InMemorySource {
    async fn describe(&self, sheet_id: &SheetId) -> Result<WorkbookInfo, FetchError> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if self.missing {
            return Err(FetchError::NotFound(sheet_id.clone()));
        }
        Ok(WorkbookInfo::new(
            self.title.clone(),
            self.tabs.iter().map(|(name, _)| name.clone()),
        ))
    }

    async fn fetch(&self, sheet_id: &SheetId, sheet_name: &str) -> Result<SheetTable, FetchError> {
        self.fetched.lock().unwrap().push(sheet_name.to_string());
        self.pause().await;
        if self.missing {
            return Err(FetchError::NotFound(sheet_id.clone()));
        }
        self.tabs
            .iter()
            .find(|(name, _)| name == sheet_name)
            .map(|(_, table)| table.clone())
            .ok_or_else(|| FetchError::tab_not_found(sheet_id.clone(), sheet_name))
    }
}

/// Renderer that records what it was given
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    renders: Mutex<Vec<(u32, Radar)>>,
}

impl RecordingRenderer {
    pub fn renders(&self) -> Vec<(u32, Radar)> {
        self.renders.lock().unwrap().clone()
    }
}

impl RadarRenderer for RecordingRenderer {
    fn render(&self, size: u32, radar: &Radar) {
        self.renders.lock().unwrap().push((size, radar.clone()));
    }
}

/// Error display that records messages
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    messages: Mutex<Vec<String>>,
}

impl RecordingDisplay {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorDisplay for RecordingDisplay {
    fn show_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Pipeline over in-memory collaborators, plus handles to inspect them
pub struct Harness {
    pub pipeline: RadarPipeline,
    pub availability: Arc<StaticAvailability>,
    pub source: Arc<InMemorySource>,
    pub renderer: Arc<RecordingRenderer>,
    pub display: Arc<RecordingDisplay>,
}

impl Harness {
    pub fn new(availability: StaticAvailability, source: InMemorySource) -> Self {
        Self::with_config(PipelineConfig::default(), availability, source)
    }

    pub fn with_config(
        config: PipelineConfig,
        availability: StaticAvailability,
        source: InMemorySource,
    ) -> Self {
        let availability = Arc::new(availability);
        let source = Arc::new(source);
        let renderer = Arc::new(RecordingRenderer::default());
        let display = Arc::new(RecordingDisplay::default());

        let pipeline = RadarPipeline::new(
            config,
            availability.clone(),
            source.clone(),
            renderer.clone(),
            display.clone(),
        );

        Self {
            pipeline,
            availability,
            source,
            renderer,
            display,
        }
    }
}
