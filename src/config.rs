//! Reader configuration and validation.
//!
//! Provides the tunable parameters of the ICGEM reader. Defaults reproduce the
//! behaviour expected by the ICGEM format description.

use crate::constants::MAX_DATA_LINE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Smallest accepted line limit; shorter limits could not hold a record token plus degree/order
const MIN_LINE_LENGTH: usize = 16;

/// Configuration for reading ICGEM files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Maximum line length in bytes, line terminator included
    pub max_line_length: usize,

    /// Accept files that leave out C(1,0) and C(1,1), setting them to zero
    pub allow_implicit_degree_one: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_line_length: MAX_DATA_LINE,
            allow_implicit_degree_one: true,
        }
    }
}

impl ReaderConfig {
    /// Create configuration with a custom line length limit
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Require every coefficient, including C(1,0) and C(1,1), to be present
    pub fn strict(mut self) -> Self {
        self.allow_implicit_degree_one = false;
        self
    }

    /// Longest line content accepted, in bytes (the terminator takes one byte of the limit)
    pub fn max_line_content(&self) -> usize {
        self.max_line_length.saturating_sub(1)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_line_length < MIN_LINE_LENGTH {
            return Err(Error::configuration(format!(
                "max_line_length must be at least {} bytes, got {}",
                MIN_LINE_LENGTH, self.max_line_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.max_line_length, 512);
        assert_eq!(config.max_line_content(), 511);
        assert!(config.allow_implicit_degree_one);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ReaderConfig::default().with_max_line_length(1024).strict();
        assert_eq!(config.max_line_length, 1024);
        assert!(!config.allow_implicit_degree_one);
    }

    #[test]
    fn test_validate_rejects_tiny_limit() {
        let config = ReaderConfig::default().with_max_line_length(4);
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_zero_limit_content() {
        let config = ReaderConfig::default().with_max_line_length(0);
        assert_eq!(config.max_line_content(), 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ReaderConfig::default().strict();
        let json = serde_json::to_string(&config).unwrap();
        let restored: ReaderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
