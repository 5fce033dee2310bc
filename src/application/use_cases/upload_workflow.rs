// ============================================================
// UPLOAD WORKFLOW USE CASE
// ============================================================
// Orchestrate decode -> clean -> export for one upload session

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::clean_config::CleaningServiceConfig;
use crate::domain::error::{AppError, Result};
use crate::domain::session::Session;
use crate::domain::table::{RawTable, UploadedFile};
use crate::domain::threshold::ThresholdPercent;
use crate::infrastructure::cleaning_client::{CleanOutcome, CleanRequest, CleaningClient};
use crate::infrastructure::decoder::TabularDecoder;

use super::export::{ExportArtifact, ExportFormat, ResultExporter};

/// Owner of the upload/clean state machine.
///
/// States: Idle -> Decoding -> Requesting -> Success | Failed, re-entrant
/// from Success and Failed. The `Session` is replaced atomically on every
/// transition; at most one submission is in flight at a time, and a stale
/// response from a superseded submission is dropped by generation check.
pub struct UploadWorkflow {
    client: Arc<dyn CleaningClient + Send + Sync>,
    config: CleaningServiceConfig,
    decoder: TabularDecoder,
    exporter: ResultExporter,
    file: Option<UploadedFile>,
    threshold: ThresholdPercent,
    session: Session,
    generation: u64,
}

impl UploadWorkflow {
    pub fn new(client: Arc<dyn CleaningClient + Send + Sync>, config: CleaningServiceConfig) -> Self {
        let threshold = ThresholdPercent::default();
        Self {
            client,
            config,
            decoder: TabularDecoder::new(),
            exporter: ResultExporter::new(),
            file: None,
            threshold,
            session: Session::idle(threshold),
            generation: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Stage an uploaded file for the next submission
    pub fn select_file(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        let file = UploadedFile::new(name, bytes);
        info!(file = %file.name, size = file.bytes.len(), "File selected");
        self.file = Some(file);
    }

    /// Change the threshold; accepted in any state, takes effect on the
    /// next submission only
    pub fn set_threshold(&mut self, threshold: ThresholdPercent) {
        self.threshold = threshold;
    }

    /// Run the full pipeline for the currently selected file and threshold.
    ///
    /// A call that finds the session in `Decoding` or `Requesting` is
    /// rejected without touching it. Through `&mut self` alone that cannot
    /// happen (every call leaves Success or Failed before returning); the
    /// guard covers hosts that snapshot or restore a mid-pipeline session
    /// around the await points.
    pub async fn submit(&mut self) -> &Session {
        if self.session.status.is_busy() {
            warn!("Submission rejected: another submission is in flight");
            return &self.session;
        }

        let generation = self.begin_submission();
        let threshold = self.threshold;

        let file = match self.file.clone() {
            Some(file) => file,
            None => {
                warn!("Submission without a selected file");
                self.session =
                    Session::failed(None, threshold, AppError::NoFileSelected.to_string());
                return &self.session;
            }
        };

        self.session = Session::decoding(&file.name, threshold);

        let table = match self.decode_upload(&file) {
            Ok(table) => table,
            Err(e) => {
                self.apply_outcome(generation, &file.name, threshold, 0, Err(e));
                return &self.session;
            }
        };

        let initial_row_count = table.row_count();
        self.session = Session::requesting(&file.name, threshold, initial_row_count);

        let request = CleanRequest {
            data: table,
            threshold,
        };
        let outcome = self.client.clean(&self.config, &request).await;

        self.apply_outcome(generation, &file.name, threshold, initial_row_count, outcome);
        &self.session
    }

    /// Serialize the current cleaned data for download. A side query on the
    /// session, not a state transition: with no cleaned data it surfaces a
    /// local error and leaves the session untouched.
    pub fn export(&self, format: ExportFormat) -> Result<ExportArtifact> {
        self.exporter.export(&self.session.cleaned_data, format)
    }

    fn decode_upload(&self, file: &UploadedFile) -> Result<RawTable> {
        let kind = file.kind()?;
        self.decoder.decode(&file.bytes, kind)
    }

    /// Start a new submission generation; any response still in flight for
    /// an earlier generation becomes stale
    fn begin_submission(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply a pipeline outcome unless a newer submission has started since
    fn apply_outcome(
        &mut self,
        generation: u64,
        file_name: &str,
        threshold: ThresholdPercent,
        initial_row_count: usize,
        outcome: Result<CleanOutcome>,
    ) {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Ignoring stale response from superseded submission"
            );
            return;
        }

        match outcome {
            Ok(outcome) => {
                if outcome.cleaned_row_count > initial_row_count {
                    warn!(
                        cleaned = outcome.cleaned_row_count,
                        initial = initial_row_count,
                        "Service reported more cleaned rows than were submitted"
                    );
                }
                info!(
                    initial = initial_row_count,
                    cleaned = outcome.cleaned_row_count,
                    "Cleaning succeeded"
                );
                self.session = Session::success(
                    file_name,
                    threshold,
                    initial_row_count,
                    outcome.cleaned_data,
                    outcome.cleaned_row_count,
                );
            }
            Err(e) => {
                let message = e.to_string();
                error!(error = %message, "Cleaning pipeline failed");
                self.session = Session::failed(Some(file_name.to_string()), threshold, message);
            }
        }
    }
}
