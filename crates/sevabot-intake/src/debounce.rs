// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Debounce timer manager.
//!
//! One cancellable timer per counterparty: scheduling cancels any previous
//! timer for that key before the new one is spawned, so only the last
//! scheduled delay governs the fire time. A fire delivers a [`TimerFire`]
//! event into the engine's queue; the engine re-validates session state on
//! receipt, because the condition observed at schedule time may have been
//! superseded by the time the timer fires.

use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use sevabot_core::CounterpartyId;

/// What a timer was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Quiet period after the last attachment of a batch.
    Debounce,
    /// Window for answering the "reason, name" prompt.
    ReasonPrompt,
    /// Window for answering the staff-contact reason prompt.
    StaffContact,
    /// Window for the operator's completed-work document.
    AdminDocument,
}

/// Delivered into the engine's event queue when a timer expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerFire {
    pub counterparty_id: CounterpartyId,
    pub kind: TimerKind,
}

/// Process-wide timer table, keyed by counterparty id.
pub struct DebounceTimers {
    tx: mpsc::Sender<TimerFire>,
    handles: DashMap<CounterpartyId, JoinHandle<()>>,
}

impl DebounceTimers {
    /// Timers send their fire events into `tx`.
    pub fn new(tx: mpsc::Sender<TimerFire>) -> Self {
        Self {
            tx,
            handles: DashMap::new(),
        }
    }

    /// Arms a timer for `id`, cancelling any previous one first.
    ///
    /// Cancellation happens before the new spawn so a stale timer can never
    /// outlive the one meant to supersede it.
    pub fn schedule(&self, id: &CounterpartyId, kind: TimerKind, delay: Duration) {
        self.cancel(id);
        let tx = self.tx.clone();
        let counterparty_id = id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The engine may have shut down; a closed queue is not an error.
            let _ = tx
                .send(TimerFire {
                    counterparty_id,
                    kind,
                })
                .await;
        });
        self.handles.insert(id.clone(), handle);
        trace!(counterparty = %id, ?kind, ?delay, "timer scheduled");
    }

    /// Cancels the pending timer for `id`, if any. Idempotent.
    pub fn cancel(&self, id: &CounterpartyId) {
        if let Some((_, handle)) = self.handles.remove(id) {
            handle.abort();
            trace!(counterparty = %id, "timer cancelled");
        }
    }

    /// True while a timer for `id` is armed and has not yet fired.
    pub fn is_scheduled(&self, id: &CounterpartyId) -> bool {
        self.handles
            .get(id)
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}
