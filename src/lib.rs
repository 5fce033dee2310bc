pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ExportArtifact, ExportFormat, ResultExporter, UploadWorkflow};
pub use domain::clean_config::CleaningServiceConfig;
pub use domain::error::{AppError, Result};
pub use domain::session::{Session, SessionStatus};
pub use domain::table::{FileKind, RawTable, Record, UploadedFile};
pub use domain::threshold::ThresholdPercent;
pub use infrastructure::cleaning_client::{
    CleanOutcome, CleanRequest, CleaningClient, HttpCleaningClient,
};
pub use infrastructure::decoder::TabularDecoder;

/// Install the default tracing subscriber for hosts that do not bring
/// their own
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
}
