pub mod use_cases;

pub use use_cases::export::{ExportArtifact, ExportFormat, ResultExporter};
pub use use_cases::upload_workflow::UploadWorkflow;
