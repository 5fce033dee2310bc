pub mod clean_config;
pub mod error;
pub mod session;
pub mod table;
pub mod threshold;
