pub mod export;
pub mod upload_workflow;
