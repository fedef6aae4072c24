// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Sevabot service-intake agent.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Sevabot workspace. The messaging channel,
//! durable store, and natural-language fallback responder are external
//! collaborators that implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SevabotError;
pub use types::{
    is_terminal_status, AdapterType, CounterpartyId, DocumentRecord, HealthStatus, InboundMessage,
    MediaPayload, MessageId, Order, OrderFilter, OrderId, OutboundMessage, PendingDocument,
    STATUS_COMPLETED, STATUS_PENDING_REVIEW,
};

// Re-export all adapter traits at crate root.
pub use traits::{ChannelAdapter, FallbackResponder, PluginAdapter, StorageAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sevabot_error_has_all_variants() {
        let _config = SevabotError::Config("test".into());
        let _storage = SevabotError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _channel = SevabotError::Channel {
            message: "test".into(),
            source: None,
        };
        let _responder = SevabotError::Responder {
            message: "test".into(),
            source: None,
        };
        let _validation = SevabotError::Validation("bad attachment".into());
        let _not_found = SevabotError::NotFound {
            what: "order WO-1".into(),
        };
        let _internal = SevabotError::Internal("test".into());
    }

    #[test]
    fn counterparty_and_order_ids() {
        let cp = CounterpartyId("919999999999@c.us".into());
        let cp2 = cp.clone();
        assert_eq!(cp, cp2);
        assert_eq!(cp.to_string(), "919999999999@c.us");

        let oid = OrderId("WO-1700000000000-A1B2C3".into());
        assert_eq!(oid.as_str(), "WO-1700000000000-A1B2C3");
    }

    #[test]
    fn terminal_status_synonyms_are_case_insensitive() {
        for s in ["completed", "Complete", "DONE", "Done", "complete"] {
            assert!(types::is_terminal_status(s), "{s} should be terminal");
        }
        for s in ["pending review", "payment pending", "in progress", ""] {
            assert!(!types::is_terminal_status(s), "{s} should not be terminal");
        }
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // Compile-time check that every adapter seam is reachable through
        // the public API.
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_channel_adapter<T: ChannelAdapter>() {}
        fn _assert_storage_adapter<T: StorageAdapter>() {}
        fn _assert_responder<T: FallbackResponder>() {}
    }
}
