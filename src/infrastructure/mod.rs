pub mod cleaning_client;
pub mod decoder;
