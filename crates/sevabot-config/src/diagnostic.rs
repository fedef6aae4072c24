// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge.
//!
//! Converts Figment deserialization errors into miette diagnostics so that
//! startup failures render with codes and help text instead of a bare
//! Display string.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(sevabot::config::unknown_key),
        help("valid keys: {valid_keys}")
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// List of valid keys for the section.
        valid_keys: String,
    },

    /// A configuration value failed to deserialize.
    #[error("invalid configuration value: {detail}")]
    #[diagnostic(code(sevabot::config::invalid_value))]
    InvalidValue {
        /// Description of the deserialization failure.
        detail: String,
    },

    /// A semantic validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(sevabot::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(sevabot::config::other))]
    Other(String),
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A figment error may contain multiple underlying errors; each is converted
/// to the matching variant.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    use figment::error::Kind;

    let mut errors = Vec::new();

    for error in err {
        let config_error = match &error.kind {
            Kind::UnknownField(field, expected) => ConfigError::UnknownKey {
                key: field.clone(),
                valid_keys: expected.to_vec().join(", "),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidValue {
                detail: format!(
                    "{}: expected {expected}, found {actual}",
                    error.path.join(".")
                ),
            },
            other => ConfigError::Other(format!("{other}")),
        };
        errors.push(config_error);
    }

    errors
}

/// Render all configuration errors to stderr via miette's report handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        if handler.render_report(&mut buf, error).is_ok() {
            eprintln!("{buf}");
        } else {
            eprintln!("{error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_implements_diagnostic() {
        use miette::Diagnostic;

        let error = ConfigError::UnknownKey {
            key: "operater_id".to_string(),
            valid_keys: "operator_id, session_dir".to_string(),
        };

        assert!(error.code().is_some(), "should have diagnostic code");
        let help = error.help().expect("should have help text").to_string();
        assert!(help.contains("operator_id"), "help lists valid keys: {help}");
    }

    #[test]
    fn config_error_renders_with_miette() {
        use miette::GraphicalReportHandler;

        let error = ConfigError::Validation {
            message: "channel.operator_id must not be empty".to_string(),
        };

        let handler = GraphicalReportHandler::new();
        let mut buf = String::new();
        handler
            .render_report(&mut buf, &error)
            .expect("should render without error");
        assert!(buf.contains("operator_id"));
    }
}
