//! Radar pipeline orchestration
//!
//! One run of [`RadarPipeline::build`]:
//! 1. Resolve the reference to a sheet ID
//! 2. Check the sheet is available (bounded by a timeout)
//! 3. Describe the workbook and pick a tab
//! 4. Fetch the tab (bounded by a timeout)
//! 5. Validate content, then headers
//! 6. Sanitize every row and assemble the radar
//! 7. Hand the radar to the renderer, or one message to the error display
//!
//! The run stops at the first failure. No partial radar is ever rendered.

use crate::assembler::RadarAssembler;
use crate::error::{DisplayableError, ErrorKind, PipelineError, Stage};
use crate::render::{ErrorDisplay, RadarRenderer};
use crate::types::{BuiltRadar, PipelineConfig};
use radar_ingest::{
    ContentValidator, FetchError, RowSanitizer, SheetAvailability, SheetId, SheetLocator,
    SheetReference, TabularSource, WorkbookInfo,
};
use radar_model::{MalformedDataError, SanitizedBlip};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Builds radars from spreadsheet references
pub struct RadarPipeline {
    config: PipelineConfig,
    availability: Arc<dyn SheetAvailability>,
    source: Arc<dyn TabularSource>,
    renderer: Arc<dyn RadarRenderer>,
    display: Arc<dyn ErrorDisplay>,
    sanitizer: RowSanitizer,
    assembler: RadarAssembler,
}

impl std::fmt::Debug for RadarPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadarPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RadarPipeline {
    /// Create pipeline over its collaborators
    #[must_use]
    pub fn new(
        config: PipelineConfig,
        availability: Arc<dyn SheetAvailability>,
        source: Arc<dyn TabularSource>,
        renderer: Arc<dyn RadarRenderer>,
        display: Arc<dyn ErrorDisplay>,
    ) -> Self {
        Self {
            config,
            availability,
            source,
            renderer,
            display,
            sanitizer: RowSanitizer::new(),
            assembler: RadarAssembler::new(),
        }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build and render the radar for `reference`
    ///
    /// Reads `sheet_name` when given, otherwise the workbook's first tab. On
    /// success the renderer has been called once; on failure the error
    /// display has been called once and the renderer not at all.
    ///
    /// # Errors
    /// The same [`DisplayableError`] that was handed to the error display.
    pub async fn build(
        &self,
        reference: &SheetReference,
        sheet_name: Option<&str>,
    ) -> Result<BuiltRadar, DisplayableError> {
        let sheet_id = SheetLocator::resolve(reference);
        tracing::info!(%sheet_id, sheet_name, "building radar");

        match self.run(&sheet_id, sheet_name).await {
            Ok(built) => {
                self.renderer.render(built.size, &built.radar);
                tracing::info!(
                    %sheet_id,
                    sheet_name = %built.sheet_name,
                    quadrants = built.radar.quadrants().len(),
                    rings = built.radar.rings().len(),
                    blips = built.radar.blip_count(),
                    size = built.size,
                    "radar rendered"
                );
                Ok(built)
            }
            Err(error) => Err(self.report(&sheet_id, &error)),
        }
    }

    async fn run(
        &self,
        sheet_id: &SheetId,
        sheet_name: Option<&str>,
    ) -> Result<BuiltRadar, PipelineError> {
        bounded(
            Stage::Availability,
            self.config.availability_timeout_secs,
            self.availability.check(sheet_id),
        )
        .await?;
        tracing::debug!(%sheet_id, "sheet available");

        let workbook = bounded(
            Stage::Fetch,
            self.config.fetch_timeout_secs,
            self.source.describe(sheet_id),
        )
        .await?;
        let tab = select_tab(sheet_id, &workbook, sheet_name)?;

        let table = bounded(
            Stage::Fetch,
            self.config.fetch_timeout_secs,
            self.source.fetch(sheet_id, &tab),
        )
        .await?;
        tracing::info!(%sheet_id, sheet_name = %tab, rows = table.rows.len(), "fetched sheet");

        let validator = ContentValidator::new(&table.column_names);
        validator.verify_content(&table.rows)?;
        validator.verify_headers()?;

        let blips: Vec<SanitizedBlip> = table
            .rows
            .iter()
            .map(|row| self.sanitizer.sanitize(row))
            .collect();
        let radar = self.assembler.assemble(&blips)?;

        Ok(BuiltRadar {
            title: workbook.title,
            sheet_name: tab,
            size: self.config.radar_size(),
            radar,
        })
    }

    fn report(&self, sheet_id: &SheetId, error: &PipelineError) -> DisplayableError {
        let displayable = DisplayableError::from_pipeline_error(error, &self.config.faq_url);
        match displayable.kind {
            ErrorKind::Unclassified => {
                tracing::error!(%sheet_id, %error, "radar build failed");
            }
            kind => {
                tracing::warn!(%sheet_id, ?kind, %error, "radar build rejected");
            }
        }

        self.display.show_error(&displayable.message);
        displayable
    }
}

/// Requested tab if the workbook lists it, else the first tab
fn select_tab(
    sheet_id: &SheetId,
    workbook: &WorkbookInfo,
    requested: Option<&str>,
) -> Result<String, PipelineError> {
    match requested {
        Some(name) if workbook.has_sheet(name) => Ok(name.to_string()),
        Some(name) => Err(FetchError::tab_not_found(sheet_id.clone(), name).into()),
        None => workbook
            .first_sheet()
            .map(str::to_string)
            .ok_or_else(|| MalformedDataError::MissingContent.into()),
    }
}

/// Await `future` for at most `secs` seconds
async fn bounded<T, E>(
    stage: Stage,
    secs: u64,
    future: impl Future<Output = Result<T, E>>,
) -> Result<T, PipelineError>
where
    PipelineError: From<E>,
{
    match tokio::time::timeout(Duration::from_secs(secs), future).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(PipelineError::Timeout {
            stage,
            duration_secs: secs,
        }),
    }
}
