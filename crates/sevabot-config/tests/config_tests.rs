// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Sevabot configuration system.

use sevabot_config::model::SevabotConfig;
use sevabot_config::{load_and_validate_str, load_config_from_str, ConfigError};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_sevabot_config() {
    let toml = r#"
[agent]
name = "test-agent"
log_level = "debug"

[channel]
operator_id = "918080032223@c.us"
session_dir = "/tmp/wa-session"

[intake]
max_document_bytes = 5242880
max_pending_documents = 5
debounce_secs = 10
reason_timeout_secs = 120
admin_document_timeout_secs = 240
supported_mime_types = ["application/pdf"]

[storage]
database_path = "/tmp/test.db"
wal_mode = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-agent");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.channel.operator_id, "918080032223@c.us");
    assert_eq!(config.channel.session_dir.as_deref(), Some("/tmp/wa-session"));
    assert_eq!(config.intake.max_document_bytes, 5 * 1024 * 1024);
    assert_eq!(config.intake.max_pending_documents, 5);
    assert_eq!(config.intake.debounce_secs, 10);
    assert_eq!(config.intake.reason_timeout_secs, 120);
    assert_eq!(config.intake.admin_document_timeout_secs, 240);
    assert_eq!(config.intake.supported_mime_types, vec!["application/pdf"]);
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert!(!config.storage.wal_mode);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "sevabot");
    assert_eq!(config.agent.log_level, "info");
    assert!(config.channel.operator_id.is_empty());
    assert!(config.channel.session_dir.is_none());
    assert_eq!(config.intake.max_document_bytes, 10 * 1024 * 1024);
    assert_eq!(config.intake.max_pending_documents, 10);
    assert_eq!(config.intake.debounce_secs, 15);
    assert_eq!(config.intake.reason_timeout_secs, 300);
    assert_eq!(config.intake.admin_document_timeout_secs, 300);
    assert_eq!(config.intake.supported_mime_types.len(), 5);
    assert!(config.storage.wal_mode);
}

/// Unknown field in a section is rejected by deny_unknown_fields.
#[test]
fn unknown_field_in_channel_produces_error() {
    let toml = r#"
[channel]
operater_id = "oops"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("operater_id"),
        "error should mention the bad key, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    let err = load_config_from_str(toml).expect_err("unknown section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("logging"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Dot-notation override maps to intake.debounce_secs, the same shape the
/// SEVABOT_INTAKE_DEBOUNCE_SECS env var produces through Env::map.
#[test]
fn dotted_override_maps_to_intake_section() {
    use figment::{providers::Serialized, Figment};

    let config: SevabotConfig = Figment::new()
        .merge(Serialized::defaults(SevabotConfig::default()))
        .merge(("intake.debounce_secs", 3u64))
        .merge(("channel.operator_id", "91000@c.us"))
        .extract()
        .expect("should merge dotted overrides");

    assert_eq!(config.intake.debounce_secs, 3);
    assert_eq!(config.channel.operator_id, "91000@c.us");
}

/// Missing config files are silently skipped (Figment's Toml::file behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: SevabotConfig = Figment::new()
        .merge(Serialized::defaults(SevabotConfig::default()))
        .merge(Toml::file("/nonexistent/path/sevabot.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.agent.name, "sevabot");
}

/// Validation errors surface as ConfigError::Validation diagnostics.
#[test]
fn validation_catches_zero_debounce() {
    let toml = r#"
[intake]
debounce_secs = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero debounce should fail");
    let has_validation = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("debounce_secs"))
    });
    assert!(has_validation, "should have validation error, got: {errors:?}");
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[channel]
operator_id = "918080032223@c.us"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.channel.operator_id, "918080032223@c.us");
}
