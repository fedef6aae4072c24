// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Sevabot intake agent.

use thiserror::Error;

/// The primary error type used across all Sevabot adapter traits and core operations.
///
/// Variants map onto the intake failure taxonomy: `Validation` covers bad
/// attachments and malformed input, `Storage` covers persistence failures,
/// `Channel` covers outbound delivery failures (logged, never retried against
/// a committed order), and `NotFound` covers unknown order ids and unmatched
/// service names. A stale timer firing after its condition was superseded is
/// not an error at all -- it is absorbed as a no-op by the state machine.
#[derive(Debug, Error)]
pub enum SevabotError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Channel errors (connection failure, outbound delivery failure).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Fallback responder errors (upstream API failure, malformed reply).
    #[error("responder error: {message}")]
    Responder {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Input rejected without any state mutation (unsupported attachment type,
    /// oversized payload, batch at capacity, malformed reason/name pair,
    /// malformed admin command).
    #[error("validation failure: {0}")]
    Validation(String),

    /// A referenced entity does not exist (order id, service name).
    #[error("not found: {what}")]
    NotFound { what: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
