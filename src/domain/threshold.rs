use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Maximum tolerated percentage of missing values in a row before the
/// remote service drops it. Bounded to [0, 100], default 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdPercent(u8);

impl ThresholdPercent {
    /// Preset choices offered by the original upload form
    pub const PRESETS: [u8; 6] = [20, 40, 50, 60, 80, 100];

    pub fn new(value: u8) -> Result<Self, AppError> {
        if value > 100 {
            return Err(AppError::ValidationError(format!(
                "threshold must be between 0 and 100, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ThresholdPercent {
    fn default() -> Self {
        Self(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fifty() {
        assert_eq!(ThresholdPercent::default().value(), 50);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(ThresholdPercent::new(101).is_err());
        assert!(ThresholdPercent::new(100).is_ok());
        assert!(ThresholdPercent::new(0).is_ok());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let t = ThresholdPercent::new(80).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "80");
    }
}
