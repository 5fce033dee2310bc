use serde::{Deserialize, Serialize};

/// Connection settings for the remote cleaning service
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CleaningServiceConfig {
    /// Full URL of the cleaning endpoint
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CleaningServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/clean".to_string(),
            timeout_secs: 120,
        }
    }
}
