// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-counterparty session state.
//!
//! A session is created lazily on the first inbound event from a new
//! counterparty and holds the pending document batch plus the current
//! conversational mode. Sessions are never shared between counterparties;
//! the store hands out one lock per key, and an event holds that lock for
//! the duration of its handling (single writer per counterparty).

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use sevabot_core::{CounterpartyId, OrderId, PendingDocument};

/// The conversational mode of one counterparty's session.
///
/// An enum rather than a set of booleans: at most one awaiting mode can be
/// active at a time, by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// No prompt outstanding.
    #[default]
    Idle,
    /// A batch went quiet and the counterparty was asked for "reason, name".
    AwaitingReason,
    /// The counterparty asked for a status check and owes us an order id.
    AwaitingOrderId,
    /// The counterparty asked to contact staff and owes us a reason.
    AwaitingStaffReason,
    /// The operator marked this order terminal and owes a completed-work
    /// document for it.
    AwaitingAdminDocument { order_id: OrderId },
}

/// Mutable per-counterparty context.
#[derive(Debug, Default)]
pub struct SessionCtx {
    pub mode: SessionMode,
    /// Pending document batch, insertion order = arrival order.
    pub pending: Vec<PendingDocument>,
}

impl SessionCtx {
    /// Clears the batch and returns to [`SessionMode::Idle`].
    pub fn reset(&mut self) {
        self.mode = SessionMode::Idle;
        self.pending.clear();
    }
}

/// Process-wide session store, keyed by counterparty id.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: DashMap<CounterpartyId, Arc<Mutex<SessionCtx>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for a counterparty, creating it on first contact.
    pub fn get_or_create(&self, id: &CounterpartyId) -> Arc<Mutex<SessionCtx>> {
        self.inner
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(SessionCtx::default())))
            .clone()
    }

    /// Evicts a session entirely. The next event recreates it fresh.
    pub fn remove(&self, id: &CounterpartyId) {
        self.inner.remove(id);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(s: &str) -> CounterpartyId {
        CounterpartyId(s.to_string())
    }

    #[tokio::test]
    async fn sessions_created_lazily_and_never_shared() {
        let store = SessionStore::new();
        assert_eq!(store.len(), 0);

        let a = store.get_or_create(&cp("a@c.us"));
        let b = store.get_or_create(&cp("b@c.us"));
        assert_eq!(store.len(), 2);

        a.lock().await.mode = SessionMode::AwaitingReason;
        assert_eq!(b.lock().await.mode, SessionMode::Idle);

        // Same key returns the same session.
        let a2 = store.get_or_create(&cp("a@c.us"));
        assert_eq!(a2.lock().await.mode, SessionMode::AwaitingReason);
    }

    #[tokio::test]
    async fn reset_clears_batch_and_mode() {
        let store = SessionStore::new();
        let s = store.get_or_create(&cp("a@c.us"));
        {
            let mut ctx = s.lock().await;
            ctx.mode = SessionMode::AwaitingReason;
            ctx.pending.push(PendingDocument {
                mime_type: "application/pdf".into(),
                filename: "x.pdf".into(),
                data: vec![1],
            });
            ctx.reset();
            assert_eq!(ctx.mode, SessionMode::Idle);
            assert!(ctx.pending.is_empty());
        }
    }

    #[tokio::test]
    async fn remove_evicts_session() {
        let store = SessionStore::new();
        let s = store.get_or_create(&cp("a@c.us"));
        s.lock().await.mode = SessionMode::AwaitingOrderId;
        store.remove(&cp("a@c.us"));

        let fresh = store.get_or_create(&cp("a@c.us"));
        assert_eq!(fresh.lock().await.mode, SessionMode::Idle);
    }
}
