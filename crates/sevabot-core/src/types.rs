// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Sevabot intake engine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a counterparty: a customer or the single designated
/// operator, identified by a stable messaging address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterpartyId(pub String);

impl CounterpartyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CounterpartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a work order. Generated once at creation, immutable,
/// never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a message on the channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the type of adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Channel,
    Storage,
    Responder,
}

// --- Channel types ---

/// A document attachment held in memory before persistence.
///
/// Owned exclusively by a session's pending batch until the order lifecycle
/// manager takes it over; at that point the payload moves into durable
/// storage and no in-memory copy remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDocument {
    pub mime_type: String,
    pub filename: String,
    pub data: Vec<u8>,
}

/// An inbound event received from the messaging channel.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub id: MessageId,
    pub sender_id: CounterpartyId,
    /// Message text, if any. Media-only messages carry `None`.
    pub text: Option<String>,
    /// Downloaded attachment, if the message carried one.
    pub document: Option<PendingDocument>,
    /// Group-conversation events are ignored entirely by the intake core.
    pub is_group: bool,
    /// RFC3339 arrival timestamp.
    pub timestamp: String,
}

/// A media payload to attach to an outbound message.
#[derive(Debug, Clone)]
pub struct MediaPayload {
    pub mime_type: String,
    pub filename: String,
    pub data: Vec<u8>,
}

/// An outbound message to be sent via the channel adapter.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub recipient_id: CounterpartyId,
    pub text: String,
    pub media: Option<MediaPayload>,
}

impl OutboundMessage {
    /// Plain text message to a recipient.
    pub fn text(recipient_id: CounterpartyId, text: impl Into<String>) -> Self {
        Self {
            recipient_id,
            text: text.into(),
            media: None,
        }
    }

    /// Text message with an attached media payload.
    pub fn with_media(
        recipient_id: CounterpartyId,
        text: impl Into<String>,
        media: MediaPayload,
    ) -> Self {
        Self {
            recipient_id,
            text: text.into(),
            media: Some(media),
        }
    }
}

// --- Durable entities ---

/// Initial status assigned to every newly finalized order.
pub const STATUS_PENDING_REVIEW: &str = "Pending Review";

/// Canonical spelling persisted for any terminal status synonym.
pub const STATUS_COMPLETED: &str = "completed";

/// Returns true when `status` is synonymous with work completion.
///
/// Comparison is case-insensitive over the closed synonym set
/// {completed, complete, done}.
pub fn is_terminal_status(status: &str) -> bool {
    matches!(
        status.trim().to_lowercase().as_str(),
        "completed" | "complete" | "done"
    )
}

/// A durable work order.
///
/// Once the status reaches a terminal synonym, the associated document
/// records are deleted from durable storage, but the order record itself
/// persists and its status text may still be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub counterparty_id: CounterpartyId,
    /// Canonical service name after catalog normalization.
    pub service_type: String,
    /// The raw free-text reason as the customer typed it.
    pub reason: String,
    /// Display name given alongside the reason.
    pub submitted_by: Option<String>,
    /// Free-form status text; terminal synonyms are normalized to
    /// [`STATUS_COMPLETED`] on write.
    pub status: String,
    /// RFC3339 submission timestamp.
    pub submitted_at: String,
    /// RFC3339 timestamp of the latest status change.
    pub updated_at: String,
    pub notes: Option<String>,
}

impl Order {
    /// True when this order's status is a terminal synonym.
    pub fn is_terminal(&self) -> bool {
        is_terminal_status(&self.status)
    }
}

/// A durable document record attached to an order.
///
/// Every record references an existing order; records for a terminal order
/// are deleted as a unit when the terminal transition is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub document_id: String,
    pub order_id: OrderId,
    pub mime_type: String,
    pub filename: String,
    pub data: Vec<u8>,
}

/// Filter for order listing queries.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Restrict to orders owned by this counterparty.
    pub counterparty_id: Option<CounterpartyId>,
    /// `Some(true)` = terminal orders only, `Some(false)` = non-terminal only.
    pub terminal: Option<bool>,
    /// Maximum number of rows, newest first.
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_message_constructors() {
        let cp = CounterpartyId("919812345678@c.us".into());
        let msg = OutboundMessage::text(cp.clone(), "नमस्कार");
        assert!(msg.media.is_none());
        assert_eq!(msg.text, "नमस्कार");

        let media = MediaPayload {
            mime_type: "application/pdf".into(),
            filename: "dakhala.pdf".into(),
            data: vec![1, 2, 3],
        };
        let msg = OutboundMessage::with_media(cp, "दस्तऐवज", media);
        assert_eq!(msg.media.unwrap().filename, "dakhala.pdf");
    }

    #[test]
    fn order_terminal_check_uses_synonyms() {
        let mut order = Order {
            order_id: OrderId("WO-1-ABCDEF".into()),
            counterparty_id: CounterpartyId("1@c.us".into()),
            service_type: "उत्पन्नाचा दाखला".into(),
            reason: "income certificate".into(),
            submitted_by: Some("राम".into()),
            status: STATUS_PENDING_REVIEW.into(),
            submitted_at: "2026-01-01T00:00:00Z".into(),
            updated_at: "2026-01-01T00:00:00Z".into(),
            notes: None,
        };
        assert!(!order.is_terminal());
        order.status = "Done".into();
        assert!(order.is_terminal());
    }
}
