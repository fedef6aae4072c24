// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracking lookups for an external front-end.
//!
//! The seam a tracking page would call: status by order id and phone, and
//! document download gated on ownership and terminal status. No HTTP
//! surface lives here.

use sevabot_core::{CounterpartyId, DocumentRecord, Order, OrderId, SevabotError, StorageAdapter};

/// A document reference safe to show in a manifest (no payload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentManifestEntry {
    pub document_id: String,
    pub filename: String,
    pub mime_type: String,
}

/// Result of a tracking lookup.
#[derive(Debug, Clone)]
pub struct TrackedOrder {
    pub order: Order,
    /// Present only once the order is terminal.
    pub documents: Option<Vec<DocumentManifestEntry>>,
}

/// Messaging address derived from a bare phone number.
fn counterparty_for_phone(phone: &str) -> CounterpartyId {
    CounterpartyId(format!("91{}@c.us", phone.trim()))
}

/// Looks up an order by id and owner phone number.
///
/// Returns `NotFound` both for an unknown id and for an id owned by a
/// different phone number; callers cannot distinguish the two.
pub async fn track_order(
    storage: &dyn StorageAdapter,
    order_id: &OrderId,
    phone: &str,
) -> Result<TrackedOrder, SevabotError> {
    let owner = counterparty_for_phone(phone);
    let order = storage
        .get_order(order_id)
        .await?
        .filter(|o| o.counterparty_id == owner)
        .ok_or_else(|| SevabotError::NotFound {
            what: format!("order {order_id}"),
        })?;

    let documents = if order.is_terminal() {
        let docs = storage.list_documents(order_id).await?;
        Some(
            docs.into_iter()
                .map(|d| DocumentManifestEntry {
                    document_id: d.document_id,
                    filename: d.filename,
                    mime_type: d.mime_type,
                })
                .collect(),
        )
    } else {
        None
    };

    Ok(TrackedOrder { order, documents })
}

/// Fetches one completed-work document, gated on ownership and terminal
/// status.
pub async fn fetch_document(
    storage: &dyn StorageAdapter,
    order_id: &OrderId,
    document_id: &str,
    phone: &str,
) -> Result<DocumentRecord, SevabotError> {
    let owner = counterparty_for_phone(phone);
    let order = storage
        .get_order(order_id)
        .await?
        .filter(|o| o.counterparty_id == owner)
        .ok_or_else(|| SevabotError::NotFound {
            what: format!("order {order_id}"),
        })?;

    if !order.is_terminal() {
        return Err(SevabotError::Validation(format!(
            "order {order_id} is not completed"
        )));
    }

    storage
        .list_documents(order_id)
        .await?
        .into_iter()
        .find(|d| d.document_id == document_id)
        .ok_or_else(|| SevabotError::NotFound {
            what: format!("document {document_id}"),
        })
}
