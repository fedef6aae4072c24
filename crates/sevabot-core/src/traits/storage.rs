// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait for the durable keyed record store.

use async_trait::async_trait;

use crate::error::SevabotError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{CounterpartyId, DocumentRecord, Order, OrderFilter, OrderId};

/// Adapter for the durable store holding clients, work orders, and document
/// records.
///
/// Durable writes are the authority of record: in-memory session state is a
/// cache of what has not been committed yet and is cleared only after the
/// corresponding write succeeds.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend (migrations, connections).
    async fn initialize(&self) -> Result<(), SevabotError>;

    /// Closes the storage backend, flushing pending writes.
    async fn close(&self) -> Result<(), SevabotError>;

    /// Records a counterparty, keeping the earliest join date on conflict.
    async fn upsert_client(
        &self,
        counterparty_id: &CounterpartyId,
        joined_at: &str,
    ) -> Result<(), SevabotError>;

    /// Inserts or replaces an order keyed by its order id.
    async fn upsert_order(&self, order: &Order) -> Result<(), SevabotError>;

    /// Fetches an order by id.
    async fn get_order(&self, order_id: &OrderId) -> Result<Option<Order>, SevabotError>;

    /// Lists orders matching the filter, newest first.
    async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, SevabotError>;

    /// Deletes an order and its document records as a unit.
    ///
    /// Returns `false` when no such order existed.
    async fn delete_order(&self, order_id: &OrderId) -> Result<bool, SevabotError>;

    /// Inserts a document record attached to an existing order.
    async fn insert_document(&self, doc: &DocumentRecord) -> Result<(), SevabotError>;

    /// Lists the document records for an order, in insertion order.
    async fn list_documents(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<DocumentRecord>, SevabotError>;

    /// Deletes all document records for an order.
    async fn delete_documents(&self, order_id: &OrderId) -> Result<(), SevabotError>;
}
