//! Runtime knobs for payload assembly.
//!
//! Defaults match the format limits; hosts may only tighten them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::MAX_SHORT_UTF_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// JSON could not be parsed; carries the parser's message.
    #[error("config parse error: {0}")]
    Json(String),

    #[error("max_command_len must be within 1..={max}, got {have}")]
    InvalidMaxCommandLen { have: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayloadConfig {
    /// Cap on the command's modified UTF-8 byte length.
    pub max_command_len: usize,
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self { max_command_len: MAX_SHORT_UTF_LEN }
    }
}

impl PayloadConfig {
    /// Parse from JSON and validate. Missing fields take defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_command_len == 0 || self.max_command_len > MAX_SHORT_UTF_LEN {
            return Err(ConfigError::InvalidMaxCommandLen {
                have: self.max_command_len,
                max: MAX_SHORT_UTF_LEN,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PayloadConfig::from_json_str("{}").unwrap(), PayloadConfig::default());
    }

    #[test]
    fn tighter_cap_is_accepted() {
        let cfg = PayloadConfig::from_json_str(r#"{"max_command_len": 1024}"#).unwrap();
        assert_eq!(cfg.max_command_len, 1024);
    }

    #[test]
    fn cap_outside_format_limit_is_rejected() {
        let err = PayloadConfig::from_json_str(r#"{"max_command_len": 65536}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxCommandLen { have: 65536, .. }));
        let err = PayloadConfig::from_json_str(r#"{"max_command_len": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxCommandLen { have: 0, .. }));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = PayloadConfig::from_json_str(r#"{"max_len": 10}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
