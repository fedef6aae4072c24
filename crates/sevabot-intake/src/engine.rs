// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The intake state machine.
//!
//! One entry point, [`IntakeEngine::handle`], consumes inbound events (text,
//! attachment, timer fire) against a counterparty's session. The session
//! lock is held for the duration of one event, so no two mutations to the
//! same session ever race; timer fires re-validate the session mode because
//! the condition that armed the timer may no longer hold.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use sevabot_catalog::ServiceCatalog;
use sevabot_config::model::{IntakeConfig, SevabotConfig};
use sevabot_core::{
    ChannelAdapter, CounterpartyId, FallbackResponder, InboundMessage, MediaPayload, OrderFilter,
    OrderId, OutboundMessage, PendingDocument, SevabotError, StorageAdapter,
};

use crate::admin::{self, AdminCommand, AdminParse};
use crate::debounce::{DebounceTimers, TimerFire, TimerKind};
use crate::lifecycle::OrderLifecycle;
use crate::replies;
use crate::session::{SessionCtx, SessionMode, SessionStore};

const GREETINGS: &[&str] = &["हाय", "hii", "hyy", "hy", "hi", "hello", "hey", "yo"];
const SERVICE_LIST: &[&str] = &[
    "सेवांची यादी",
    "service",
    "services",
    "services list",
    "service list",
    "list of services",
];
const DOCUMENTS_LIST: &[&str] = &[
    "कागदपत्र कोणती लागतात?",
    "document",
    "documents",
    "documents list",
    "document list",
    "list of document",
];
const CHARGES: &[&str] = &[
    "सेवा शुल्क काय आहे?",
    "service charges",
    "charges",
    "charge",
    "services charges",
];
const CONTACT_STAFF: &[&str] = &["कर्मचाऱ्यांशी संपर्क करायचा आहे", "contact staff"];
const SEND_DOCUMENTS: &[&str] = &[
    "कागदपत्र पाठवू का?",
    "sending document",
    "ready for sending document",
];
const CHECK_STATUS: &[&str] = &[
    "माझ्या कामाची स्थिती",
    "check my work status",
    "document status",
    "status",
];
const MY_WORKS: &[&str] = &["माझे काम", "my works list", "work list"];

/// An inbound event against one counterparty's session.
#[derive(Debug, Clone)]
pub enum InboundEvent {
    Text(String),
    Attachment(PendingDocument),
    TimerFire(TimerKind),
}

/// The conversational session engine.
pub struct IntakeEngine {
    channel: Arc<dyn ChannelAdapter>,
    storage: Arc<dyn StorageAdapter>,
    responder: Option<Arc<dyn FallbackResponder>>,
    catalog: Arc<ServiceCatalog>,
    sessions: Arc<SessionStore>,
    timers: Arc<DebounceTimers>,
    lifecycle: OrderLifecycle,
    operator_id: CounterpartyId,
    intake: IntakeConfig,
}

impl IntakeEngine {
    /// Builds an engine wired to the given adapters. Timer fires arrive on
    /// the receiving side of `timer_tx` and must be fed back through
    /// [`IntakeEngine::handle_timer`].
    pub fn new(
        channel: Arc<dyn ChannelAdapter>,
        storage: Arc<dyn StorageAdapter>,
        responder: Option<Arc<dyn FallbackResponder>>,
        config: &SevabotConfig,
        timer_tx: mpsc::Sender<TimerFire>,
    ) -> Self {
        let catalog = Arc::new(ServiceCatalog::default());
        let timers = Arc::new(DebounceTimers::new(timer_tx));
        let operator_id = CounterpartyId(config.channel.operator_id.clone());
        let lifecycle = OrderLifecycle::new(
            storage.clone(),
            channel.clone(),
            catalog.clone(),
            timers.clone(),
            operator_id.clone(),
            Duration::from_secs(config.intake.admin_document_timeout_secs),
        );
        Self {
            channel,
            storage,
            responder,
            catalog,
            sessions: Arc::new(SessionStore::new()),
            timers,
            lifecycle,
            operator_id,
            intake: config.intake.clone(),
        }
    }

    /// Routes a channel message into the state machine. Group-conversation
    /// events are ignored entirely.
    pub async fn handle_message(&self, msg: InboundMessage) -> Result<(), SevabotError> {
        if msg.is_group {
            trace!(sender = %msg.sender_id, "ignoring group message");
            return Ok(());
        }
        let sender = msg.sender_id.clone();
        if let Some(doc) = msg.document {
            self.handle(&sender, InboundEvent::Attachment(doc)).await
        } else if let Some(text) = msg.text {
            self.handle(&sender, InboundEvent::Text(text)).await
        } else {
            Ok(())
        }
    }

    /// Routes an expired timer back into the state machine.
    pub async fn handle_timer(&self, fire: TimerFire) -> Result<(), SevabotError> {
        self.handle(&fire.counterparty_id, InboundEvent::TimerFire(fire.kind))
            .await
    }

    /// Processes one event against `counterparty`'s session.
    pub async fn handle(
        &self,
        counterparty: &CounterpartyId,
        event: InboundEvent,
    ) -> Result<(), SevabotError> {
        let session = self.sessions.get_or_create(counterparty);
        let mut ctx = session.lock().await;
        let result = if *counterparty == self.operator_id {
            self.handle_operator(counterparty, &mut ctx, event).await
        } else {
            self.handle_customer(counterparty, &mut ctx, event).await
        };
        if let Err(e) = &result {
            warn!(counterparty = %counterparty, error = %e, "event handling failed");
            // The sender still gets a reply even when the backend is down.
            if let Err(send_err) = self.send(counterparty, replies::generic_error()).await {
                warn!(
                    counterparty = %counterparty,
                    error = %send_err,
                    "failure notice delivery failed"
                );
            }
        }
        result
    }

    async fn send(&self, recipient: &CounterpartyId, text: String) -> Result<(), SevabotError> {
        self.channel
            .send(OutboundMessage::text(recipient.clone(), text))
            .await?;
        Ok(())
    }

    // --- Operator flow ---

    async fn handle_operator(
        &self,
        operator: &CounterpartyId,
        ctx: &mut SessionCtx,
        event: InboundEvent,
    ) -> Result<(), SevabotError> {
        if let SessionMode::AwaitingAdminDocument { order_id } = ctx.mode.clone() {
            if let InboundEvent::Attachment(doc) = event {
                if let Some(rejection) = self.validate_attachment(ctx, &doc) {
                    // The window stays open so the operator can resend.
                    return self.send(operator, rejection).await;
                }
                self.lifecycle.store_admin_document(&order_id, doc).await?;
                ctx.mode = SessionMode::Idle;
                self.timers.cancel(operator);
                return Ok(());
            }
        }

        if let InboundEvent::Text(text) = &event {
            match admin::parse(operator, &self.operator_id, text) {
                AdminParse::Command(cmd) => return self.run_admin_command(ctx, cmd).await,
                AdminParse::Usage(usage) => return self.send(operator, usage).await,
                AdminParse::NotACommand => {}
            }
        }

        // The operator is also a customer of the stateless responders.
        self.handle_customer(operator, ctx, event).await
    }

    async fn run_admin_command(
        &self,
        operator_ctx: &mut SessionCtx,
        cmd: AdminCommand,
    ) -> Result<(), SevabotError> {
        debug!(?cmd, "admin command");
        match cmd {
            AdminCommand::UpdateStatus { order_id, status } => {
                self.lifecycle
                    .apply_status_update(&order_id, &status, operator_ctx)
                    .await
            }
            AdminCommand::Delete { order_id } => self.lifecycle.delete_order(&order_id).await,
            AdminCommand::ListPending { counterparty } => {
                self.lifecycle.list_pending(counterparty).await
            }
            AdminCommand::ListCompleted { counterparty } => {
                self.lifecycle.list_completed(counterparty).await
            }
            AdminCommand::GetDocs { order_id } => self.lifecycle.get_docs(&order_id).await,
        }
    }

    // --- Customer flow ---

    async fn handle_customer(
        &self,
        counterparty: &CounterpartyId,
        ctx: &mut SessionCtx,
        event: InboundEvent,
    ) -> Result<(), SevabotError> {
        match event {
            InboundEvent::Text(text) => self.handle_text(counterparty, ctx, &text).await,
            InboundEvent::Attachment(doc) => self.handle_attachment(counterparty, ctx, doc).await,
            InboundEvent::TimerFire(kind) => self.handle_timer_fire(counterparty, ctx, kind).await,
        }
    }

    async fn handle_text(
        &self,
        counterparty: &CounterpartyId,
        ctx: &mut SessionCtx,
        raw: &str,
    ) -> Result<(), SevabotError> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(());
        }

        if ctx.mode == SessionMode::AwaitingStaffReason {
            return self.process_staff_reason(counterparty, ctx, text).await;
        }

        if text.to_uppercase().starts_with("WO-") {
            return self
                .handle_order_status(counterparty, ctx, OrderId(text.to_uppercase()))
                .await;
        }

        if ctx.mode == SessionMode::AwaitingReason {
            return self.process_reason_pair(counterparty, ctx, text).await;
        }

        let lower = text.to_lowercase();
        if GREETINGS.contains(&lower.as_str()) {
            self.send(counterparty, replies::greeting(self.catalog.names()))
                .await?;
            ctx.reset();
            self.sessions.remove(counterparty);
            self.timers.cancel(counterparty);
            return Ok(());
        }
        if SERVICE_LIST.contains(&lower.as_str()) {
            return self
                .send(counterparty, replies::service_list(self.catalog.names()))
                .await;
        }
        if DOCUMENTS_LIST.contains(&lower.as_str()) {
            return self
                .send(
                    counterparty,
                    replies::documents_service_prompt(self.catalog.names()),
                )
                .await;
        }
        if CHARGES.contains(&lower.as_str()) {
            let list = replies::charges_list(
                self.catalog
                    .iter()
                    .map(|(name, info)| (name, info.charges.as_str())),
            );
            return self.send(counterparty, list).await;
        }
        if CONTACT_STAFF.contains(&lower.as_str()) {
            return self.start_staff_contact(counterparty, ctx).await;
        }
        if SEND_DOCUMENTS.contains(&lower.as_str()) {
            return self.send(counterparty, replies::document_send_prompt()).await;
        }
        if CHECK_STATUS.contains(&lower.as_str()) {
            ctx.mode = SessionMode::AwaitingOrderId;
            return self.send(counterparty, replies::check_status_prompt()).await;
        }
        if MY_WORKS.contains(&lower.as_str()) {
            return self.handle_my_orders(counterparty).await;
        }

        if let Some(service) = self.catalog.resolve(text) {
            let service = service.to_string();
            if let Some(info) = self.catalog.get(&service) {
                return self
                    .send(
                        counterparty,
                        replies::documents_for_service(&service, &info.documents, &info.charges),
                    )
                    .await;
            }
        }

        self.handle_free_text(counterparty, ctx, text).await
    }

    async fn handle_free_text(
        &self,
        counterparty: &CounterpartyId,
        ctx: &mut SessionCtx,
        text: &str,
    ) -> Result<(), SevabotError> {
        if let Some(responder) = &self.responder {
            match responder.reply(counterparty, text).await {
                Ok(Some(reply)) if !reply.trim().is_empty() => {
                    return self.send(counterparty, reply).await;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(counterparty = %counterparty, error = %e, "fallback responder failed");
                }
            }
        }
        self.start_staff_contact(counterparty, ctx).await
    }

    async fn start_staff_contact(
        &self,
        counterparty: &CounterpartyId,
        ctx: &mut SessionCtx,
    ) -> Result<(), SevabotError> {
        ctx.mode = SessionMode::AwaitingStaffReason;
        self.timers.schedule(
            counterparty,
            TimerKind::StaffContact,
            Duration::from_secs(self.intake.reason_timeout_secs),
        );
        self.send(counterparty, replies::staff_contact_prompt()).await
    }

    async fn process_staff_reason(
        &self,
        counterparty: &CounterpartyId,
        ctx: &mut SessionCtx,
        reason: &str,
    ) -> Result<(), SevabotError> {
        ctx.mode = SessionMode::Idle;
        self.timers.cancel(counterparty);

        let ack = self.send(counterparty, replies::staff_reason_ack(reason));
        let forward = self.send(
            &self.operator_id,
            replies::staff_reason_forward(counterparty.as_str(), reason),
        );
        let (ack_result, forward_result) = futures::join!(ack, forward);
        ack_result?;
        forward_result?;
        debug!(counterparty = %counterparty, "staff contact reason forwarded");
        Ok(())
    }

    async fn process_reason_pair(
        &self,
        counterparty: &CounterpartyId,
        ctx: &mut SessionCtx,
        text: &str,
    ) -> Result<(), SevabotError> {
        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        if parts.len() < 2 || parts[0].is_empty() || parts[1].is_empty() {
            // Rejected without touching the batch.
            return self.send(counterparty, replies::invalid_reason_pair()).await;
        }
        let (reason, display_name) = (parts[0], parts[1]);

        self.timers.cancel(counterparty);
        match self
            .lifecycle
            .finalize(counterparty, &ctx.pending, reason, display_name)
            .await
        {
            Ok(_) => {
                // Batch committed durably; only now is the in-memory copy dropped.
                ctx.reset();
                Ok(())
            }
            Err(e) => {
                // The batch stays queued so the customer can retry the pair.
                warn!(counterparty = %counterparty, error = %e, "finalize failed");
                self.send(counterparty, replies::finalize_failed()).await
            }
        }
    }

    async fn handle_order_status(
        &self,
        counterparty: &CounterpartyId,
        ctx: &mut SessionCtx,
        order_id: OrderId,
    ) -> Result<(), SevabotError> {
        let order = self
            .storage
            .get_order(&order_id)
            .await?
            .filter(|o| o.counterparty_id == *counterparty);

        if ctx.mode == SessionMode::AwaitingOrderId {
            ctx.mode = SessionMode::Idle;
            self.timers.cancel(counterparty);
        }

        let Some(order) = order else {
            return self
                .send(counterparty, replies::order_not_found_for_owner(order_id.as_str()))
                .await;
        };

        self.send(counterparty, replies::order_status(&order)).await?;

        if order.is_terminal() {
            let docs = self.storage.list_documents(&order_id).await?;
            if docs.is_empty() {
                return self
                    .send(counterparty, replies::no_completed_documents(order_id.as_str()))
                    .await;
            }
            for doc in docs {
                self.channel
                    .send(OutboundMessage::with_media(
                        counterparty.clone(),
                        replies::completed_document_caption(&doc.filename),
                        MediaPayload {
                            mime_type: doc.mime_type,
                            filename: doc.filename,
                            data: doc.data,
                        },
                    ))
                    .await?;
            }
        }
        Ok(())
    }

    async fn handle_my_orders(&self, counterparty: &CounterpartyId) -> Result<(), SevabotError> {
        let pending = self
            .storage
            .list_orders(&OrderFilter {
                counterparty_id: Some(counterparty.clone()),
                terminal: Some(false),
                limit: None,
            })
            .await?;
        let completed = self
            .storage
            .list_orders(&OrderFilter {
                counterparty_id: Some(counterparty.clone()),
                terminal: Some(true),
                limit: None,
            })
            .await?;

        if pending.is_empty() && completed.is_empty() {
            return self.send(counterparty, replies::no_orders_yet()).await;
        }
        self.send(counterparty, replies::my_orders(&pending, &completed))
            .await
    }

    /// Returns the rejection text for an invalid attachment, or `None` when
    /// the attachment is acceptable.
    fn validate_attachment(&self, ctx: &SessionCtx, doc: &PendingDocument) -> Option<String> {
        if !self
            .intake
            .supported_mime_types
            .iter()
            .any(|m| m == &doc.mime_type)
        {
            return Some(replies::unsupported_document_type());
        }
        if doc.data.len() as u64 > self.intake.max_document_bytes {
            return Some(replies::document_too_large());
        }
        if ctx.pending.len() >= self.intake.max_pending_documents {
            return Some(replies::batch_full(self.intake.max_pending_documents));
        }
        None
    }

    async fn handle_attachment(
        &self,
        counterparty: &CounterpartyId,
        ctx: &mut SessionCtx,
        doc: PendingDocument,
    ) -> Result<(), SevabotError> {
        if let Some(rejection) = self.validate_attachment(ctx, &doc) {
            debug!(counterparty = %counterparty, mime = %doc.mime_type, "attachment rejected");
            return self.send(counterparty, rejection).await;
        }

        ctx.pending.push(doc);
        // Last attachment wins: the quiet period restarts from here.
        self.timers.schedule(
            counterparty,
            TimerKind::Debounce,
            Duration::from_secs(self.intake.debounce_secs),
        );
        debug!(
            counterparty = %counterparty,
            queued = ctx.pending.len(),
            "attachment queued"
        );
        self.send(counterparty, replies::document_queued()).await
    }

    async fn handle_timer_fire(
        &self,
        counterparty: &CounterpartyId,
        ctx: &mut SessionCtx,
        kind: TimerKind,
    ) -> Result<(), SevabotError> {
        match kind {
            TimerKind::Debounce => {
                if ctx.pending.is_empty() {
                    trace!(counterparty = %counterparty, "stale debounce fire");
                    return Ok(());
                }
                if ctx.mode == SessionMode::AwaitingReason {
                    // An attachment sent mid-window replaced the expiry timer
                    // with a debounce timer. Re-arm the window instead of
                    // leaving the prompt open forever.
                    self.timers.schedule(
                        counterparty,
                        TimerKind::ReasonPrompt,
                        Duration::from_secs(self.intake.reason_timeout_secs),
                    );
                    trace!(counterparty = %counterparty, "reason window re-armed");
                    return Ok(());
                }
                ctx.mode = SessionMode::AwaitingReason;
                for doc in &ctx.pending {
                    self.send(counterparty, replies::document_received(&doc.filename))
                        .await?;
                }
                self.send(counterparty, replies::reason_prompt(ctx.pending.len()))
                    .await?;
                self.timers.schedule(
                    counterparty,
                    TimerKind::ReasonPrompt,
                    Duration::from_secs(self.intake.reason_timeout_secs),
                );
                Ok(())
            }
            TimerKind::ReasonPrompt => {
                if ctx.mode == SessionMode::AwaitingReason {
                    // The batch survives; only the prompt window closes.
                    ctx.mode = SessionMode::Idle;
                    self.send(counterparty, replies::reason_window_expired()).await?;
                }
                Ok(())
            }
            TimerKind::StaffContact => {
                if ctx.mode == SessionMode::AwaitingStaffReason {
                    ctx.mode = SessionMode::Idle;
                    self.send(counterparty, replies::staff_contact_timeout()).await?;
                }
                Ok(())
            }
            TimerKind::AdminDocument => {
                if let SessionMode::AwaitingAdminDocument { order_id } = ctx.mode.clone() {
                    ctx.mode = SessionMode::Idle;
                    self.send(counterparty, replies::admin_document_timeout(order_id.as_str()))
                        .await?;
                }
                Ok(())
            }
        }
    }
}
