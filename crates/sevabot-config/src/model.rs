// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Sevabot intake agent.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Sevabot configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SevabotConfig {
    /// Agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Messaging channel settings.
    #[serde(default)]
    pub channel: ChannelConfig,

    /// Intake state machine settings.
    #[serde(default)]
    pub intake: IntakeConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "sevabot".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Messaging channel configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelConfig {
    /// Messaging address of the single designated operator. Admin commands
    /// are parsed from this identity only.
    #[serde(default)]
    pub operator_id: String,

    /// Directory where the channel adapter keeps its login session state.
    #[serde(default)]
    pub session_dir: Option<String>,
}

/// Intake state machine configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntakeConfig {
    /// Maximum attachment payload size in bytes.
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: u64,

    /// Maximum documents queued per pending batch.
    #[serde(default = "default_max_pending_documents")]
    pub max_pending_documents: usize,

    /// Quiet period after the last attachment before a batch is considered
    /// complete. Restarts on every new attachment.
    #[serde(default = "default_debounce_secs")]
    pub debounce_secs: u64,

    /// Window for answering the "reason, name" prompt before the flag
    /// reverts. Queued documents survive expiry.
    #[serde(default = "default_reason_timeout_secs")]
    pub reason_timeout_secs: u64,

    /// Window for the operator to attach a completed-work document after a
    /// terminal status update.
    #[serde(default = "default_admin_document_timeout_secs")]
    pub admin_document_timeout_secs: u64,

    /// MIME types accepted as document attachments.
    #[serde(default = "default_supported_mime_types")]
    pub supported_mime_types: Vec<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: default_max_document_bytes(),
            max_pending_documents: default_max_pending_documents(),
            debounce_secs: default_debounce_secs(),
            reason_timeout_secs: default_reason_timeout_secs(),
            admin_document_timeout_secs: default_admin_document_timeout_secs(),
            supported_mime_types: default_supported_mime_types(),
        }
    }
}

fn default_max_document_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_max_pending_documents() -> usize {
    10
}

fn default_debounce_secs() -> u64 {
    15
}

fn default_reason_timeout_secs() -> u64 {
    300
}

fn default_admin_document_timeout_secs() -> u64 {
    300
}

fn default_supported_mime_types() -> Vec<String> {
    [
        "application/pdf",
        "image/jpeg",
        "image/png",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("sevabot").join("sevabot.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "sevabot.db".to_string())
}

fn default_wal_mode() -> bool {
    true
}
