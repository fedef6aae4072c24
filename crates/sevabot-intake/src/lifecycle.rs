// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Order lifecycle manager.
//!
//! Converts finalized batches into durable orders, applies operator status
//! transitions, and fans out notifications. Durable writes are awaited
//! before success is reported; notification failures are logged and never
//! rolled back against a committed order.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use rand::Rng;
use tracing::{info, warn};

use sevabot_catalog::ServiceCatalog;
use sevabot_core::{
    is_terminal_status, ChannelAdapter, CounterpartyId, DocumentRecord, MediaPayload, Order,
    OrderFilter, OrderId, OutboundMessage, PendingDocument, SevabotError, StorageAdapter,
    STATUS_COMPLETED, STATUS_PENDING_REVIEW,
};

use crate::debounce::{DebounceTimers, TimerKind};
use crate::replies;
use crate::session::{SessionCtx, SessionMode};

/// Operator-facing order lists are capped at this many rows.
pub const LIST_CAP: u32 = 10;

const ID_SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ID_SUFFIX_LEN: usize = 6;

static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Generates a collision-resistant order id: `WO-<millis>-<6 chars>`.
///
/// The millisecond component is forced strictly monotonic per process, so
/// concurrent calls within one millisecond still produce distinct ids; the
/// random suffix guards across restarts.
pub fn generate_order_id() -> OrderId {
    let now = Utc::now().timestamp_millis();
    let millis = match LAST_ID_MILLIS.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(last.max(now - 1) + 1)
    }) {
        Ok(prev) => prev.max(now - 1) + 1,
        Err(_) => now,
    };

    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_SUFFIX_CHARSET[rng.gen_range(0..ID_SUFFIX_CHARSET.len())] as char)
        .collect();
    OrderId(format!("WO-{millis}-{suffix}"))
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Creates orders, applies status transitions, and notifies both parties.
pub struct OrderLifecycle {
    storage: Arc<dyn StorageAdapter>,
    channel: Arc<dyn ChannelAdapter>,
    catalog: Arc<ServiceCatalog>,
    timers: Arc<DebounceTimers>,
    operator_id: CounterpartyId,
    admin_document_timeout: Duration,
}

impl OrderLifecycle {
    pub fn new(
        storage: Arc<dyn StorageAdapter>,
        channel: Arc<dyn ChannelAdapter>,
        catalog: Arc<ServiceCatalog>,
        timers: Arc<DebounceTimers>,
        operator_id: CounterpartyId,
        admin_document_timeout: Duration,
    ) -> Self {
        Self {
            storage,
            channel,
            catalog,
            timers,
            operator_id,
            admin_document_timeout,
        }
    }

    /// Best-effort send: delivery failures are logged, never propagated.
    async fn notify(&self, msg: OutboundMessage) {
        let recipient = msg.recipient_id.clone();
        if let Err(e) = self.channel.send(msg).await {
            warn!(recipient = %recipient, error = %e, "notification delivery failed");
        }
    }

    /// Converts a pending batch plus its reason into a durable order.
    ///
    /// The order row is written before the document records, so a crash
    /// between steps leaves at most an order without documents, never the
    /// reverse. On success both parties are notified concurrently.
    pub async fn finalize(
        &self,
        counterparty: &CounterpartyId,
        docs: &[PendingDocument],
        reason: &str,
        display_name: &str,
    ) -> Result<OrderId, SevabotError> {
        if docs.is_empty() {
            return Err(SevabotError::Validation(
                "cannot finalize an empty batch".to_string(),
            ));
        }

        let order_id = generate_order_id();
        let now = now_rfc3339();
        let service_type = self.catalog.normalize_reason(reason);

        self.storage.upsert_client(counterparty, &now).await?;
        self.storage
            .upsert_order(&Order {
                order_id: order_id.clone(),
                counterparty_id: counterparty.clone(),
                service_type: service_type.clone(),
                reason: reason.to_string(),
                submitted_by: Some(display_name.to_string()),
                status: STATUS_PENDING_REVIEW.to_string(),
                submitted_at: now.clone(),
                updated_at: now,
                notes: None,
            })
            .await?;

        for doc in docs {
            self.storage
                .insert_document(&DocumentRecord {
                    document_id: uuid::Uuid::new_v4().to_string(),
                    order_id: order_id.clone(),
                    mime_type: doc.mime_type.clone(),
                    filename: format!("{reason}_{}", doc.filename),
                    data: doc.data.clone(),
                })
                .await?;
        }

        info!(
            order_id = %order_id,
            counterparty = %counterparty,
            service = %service_type,
            documents = docs.len(),
            "order finalized"
        );

        let filenames: Vec<&str> = docs.iter().map(|d| d.filename.as_str()).collect();
        let confirmation = OutboundMessage::text(
            counterparty.clone(),
            replies::order_confirmation(order_id.as_str()),
        );
        let summary = OutboundMessage::text(
            self.operator_id.clone(),
            replies::operator_new_order(
                counterparty.as_str(),
                reason,
                order_id.as_str(),
                &filenames.join(", "),
            ),
        );
        futures::join!(self.notify(confirmation), self.notify(summary));

        Ok(order_id)
    }

    /// Applies an operator status transition.
    ///
    /// A terminal status is normalized to the canonical spelling, purges the
    /// order's document records, and opens the completed-document window on
    /// the operator session (`operator_ctx` is the caller's already-locked
    /// session). Every update notifies the owning counterparty.
    pub async fn apply_status_update(
        &self,
        order_id: &OrderId,
        new_status: &str,
        operator_ctx: &mut SessionCtx,
    ) -> Result<(), SevabotError> {
        let Some(mut order) = self.storage.get_order(order_id).await? else {
            self.notify(OutboundMessage::text(
                self.operator_id.clone(),
                replies::order_not_found(order_id.as_str()),
            ))
            .await;
            return Ok(());
        };

        let terminal = is_terminal_status(new_status);
        order.status = if terminal {
            STATUS_COMPLETED.to_string()
        } else {
            new_status.to_string()
        };
        order.updated_at = now_rfc3339();
        if terminal {
            order.notes = Some("काम पूर्ण झाले आहे.".to_string());
        }
        self.storage.upsert_order(&order).await?;

        self.notify(OutboundMessage::text(
            self.operator_id.clone(),
            replies::status_updated(order_id.as_str(), &order.status),
        ))
        .await;

        if terminal {
            self.storage.delete_documents(order_id).await?;
            info!(order_id = %order_id, "terminal status applied, documents purged");

            operator_ctx.mode = SessionMode::AwaitingAdminDocument {
                order_id: order_id.clone(),
            };
            self.timers.schedule(
                &self.operator_id,
                TimerKind::AdminDocument,
                self.admin_document_timeout,
            );

            self.notify(OutboundMessage::text(
                self.operator_id.clone(),
                replies::order_completed(order_id.as_str()),
            ))
            .await;
            self.notify(OutboundMessage::text(
                self.operator_id.clone(),
                replies::admin_document_prompt(order_id.as_str()),
            ))
            .await;
        }

        self.notify(OutboundMessage::text(
            order.counterparty_id.clone(),
            replies::status_update_notice(&order, terminal),
        ))
        .await;
        Ok(())
    }

    /// Removes an order and its documents as a unit.
    pub async fn delete_order(&self, order_id: &OrderId) -> Result<(), SevabotError> {
        let reply = if self.storage.delete_order(order_id).await? {
            info!(order_id = %order_id, "order deleted by operator");
            replies::order_deleted(order_id.as_str())
        } else {
            replies::order_not_found(order_id.as_str())
        };
        self.notify(OutboundMessage::text(self.operator_id.clone(), reply))
            .await;
        Ok(())
    }

    /// Sends an order's queued documents to the operator.
    ///
    /// Refused with an explanation once the order is terminal, because the
    /// documents were purged on the terminal transition.
    pub async fn get_docs(&self, order_id: &OrderId) -> Result<(), SevabotError> {
        let Some(order) = self.storage.get_order(order_id).await? else {
            self.notify(OutboundMessage::text(
                self.operator_id.clone(),
                replies::order_not_found(order_id.as_str()),
            ))
            .await;
            return Ok(());
        };

        if order.is_terminal() {
            self.notify(OutboundMessage::text(
                self.operator_id.clone(),
                replies::get_docs_completed(order_id.as_str()),
            ))
            .await;
            return Ok(());
        }

        let docs = self.storage.list_documents(order_id).await?;
        if docs.is_empty() {
            self.notify(OutboundMessage::text(
                self.operator_id.clone(),
                replies::get_docs_empty(order_id.as_str(), &order.reason),
            ))
            .await;
            return Ok(());
        }

        self.notify(OutboundMessage::text(
            self.operator_id.clone(),
            replies::get_docs_header(order_id.as_str(), &order.reason),
        ))
        .await;
        for doc in docs {
            self.notify(OutboundMessage::with_media(
                self.operator_id.clone(),
                String::new(),
                MediaPayload {
                    mime_type: doc.mime_type,
                    filename: doc.filename,
                    data: doc.data,
                },
            ))
            .await;
        }
        self.notify(OutboundMessage::text(
            self.operator_id.clone(),
            replies::get_docs_done(order_id.as_str()),
        ))
        .await;
        Ok(())
    }

    /// Sends the operator the newest open orders, optionally for one client.
    pub async fn list_pending(
        &self,
        counterparty: Option<CounterpartyId>,
    ) -> Result<(), SevabotError> {
        let orders = self
            .storage
            .list_orders(&OrderFilter {
                counterparty_id: counterparty,
                terminal: Some(false),
                limit: Some(LIST_CAP),
            })
            .await?;
        let reply = if orders.is_empty() {
            replies::no_pending_orders()
        } else {
            replies::operator_order_list("पेंडिंग ऑर्डरची यादी", &orders)
        };
        self.notify(OutboundMessage::text(self.operator_id.clone(), reply))
            .await;
        Ok(())
    }

    /// Sends the operator the newest terminal orders, optionally for one client.
    pub async fn list_completed(
        &self,
        counterparty: Option<CounterpartyId>,
    ) -> Result<(), SevabotError> {
        let orders = self
            .storage
            .list_orders(&OrderFilter {
                counterparty_id: counterparty,
                terminal: Some(true),
                limit: Some(LIST_CAP),
            })
            .await?;
        let reply = if orders.is_empty() {
            replies::no_completed_orders()
        } else {
            replies::operator_order_list("पूर्ण झालेल्या ऑर्डरची यादी", &orders)
        };
        self.notify(OutboundMessage::text(self.operator_id.clone(), reply))
            .await;
        Ok(())
    }

    /// Stores the operator's completed-work document for an order and
    /// forwards it to the owning counterparty.
    pub async fn store_admin_document(
        &self,
        order_id: &OrderId,
        doc: PendingDocument,
    ) -> Result<(), SevabotError> {
        self.storage
            .insert_document(&DocumentRecord {
                document_id: uuid::Uuid::new_v4().to_string(),
                order_id: order_id.clone(),
                mime_type: doc.mime_type.clone(),
                filename: doc.filename.clone(),
                data: doc.data.clone(),
            })
            .await?;

        self.notify(OutboundMessage::text(
            self.operator_id.clone(),
            replies::admin_document_saved(order_id.as_str(), &doc.filename),
        ))
        .await;

        if let Some(order) = self.storage.get_order(order_id).await? {
            self.notify(OutboundMessage::with_media(
                order.counterparty_id,
                replies::completed_document_for_client(order_id.as_str()),
                MediaPayload {
                    mime_type: doc.mime_type,
                    filename: doc.filename,
                    data: doc.data,
                },
            ))
            .await;
        }
        Ok(())
    }
}
