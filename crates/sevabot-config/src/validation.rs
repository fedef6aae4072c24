// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty identities and positive limits.

use crate::diagnostic::ConfigError;
use crate::model::SevabotConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SevabotConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.intake.max_pending_documents == 0 {
        errors.push(ConfigError::Validation {
            message: "intake.max_pending_documents must be at least 1".to_string(),
        });
    }

    if config.intake.max_document_bytes == 0 {
        errors.push(ConfigError::Validation {
            message: "intake.max_document_bytes must be positive".to_string(),
        });
    }

    if config.intake.debounce_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "intake.debounce_secs must be at least 1".to_string(),
        });
    }

    if config.intake.supported_mime_types.is_empty() {
        errors.push(ConfigError::Validation {
            message: "intake.supported_mime_types must not be empty".to_string(),
        });
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of {valid_levels:?}, got `{}`",
                config.agent.log_level
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = SevabotConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_batch_capacity_rejected() {
        let mut config = SevabotConfig::default();
        config.intake.max_pending_documents = 0;
        let errors = validate_config(&config).expect_err("should fail");
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("max_pending_documents")));
    }

    #[test]
    fn bad_log_level_rejected() {
        let mut config = SevabotConfig::default();
        config.agent.log_level = "loud".into();
        let errors = validate_config(&config).expect_err("should fail");
        assert!(errors.iter().any(|e| e.to_string().contains("log_level")));
    }

    #[test]
    fn collects_all_errors_not_fail_fast() {
        let mut config = SevabotConfig::default();
        config.storage.database_path = "  ".into();
        config.intake.debounce_secs = 0;
        config.intake.supported_mime_types.clear();
        let errors = validate_config(&config).expect_err("should fail");
        assert_eq!(errors.len(), 3, "all three failures reported: {errors:?}");
    }
}
