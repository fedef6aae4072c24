// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversational intake engine for the Sevabot agent.
//!
//! Turns a raw message stream into durable work orders: attachments are
//! batched per counterparty behind a debounce window, a reason prompt closes
//! each batch into an order, and the operator drives the order lifecycle
//! through a small command grammar. All per-counterparty state lives in
//! in-memory sessions; orders and documents live in the storage adapter.

pub mod admin;
pub mod debounce;
pub mod engine;
pub mod lifecycle;
pub mod replies;
pub mod session;
pub mod tracking;

pub use debounce::{DebounceTimers, TimerFire, TimerKind};
pub use engine::{InboundEvent, IntakeEngine};
pub use lifecycle::OrderLifecycle;
pub use session::{SessionCtx, SessionMode, SessionStore};
pub use tracking::{DocumentManifestEntry, TrackedOrder};
