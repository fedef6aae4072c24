// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the StorageAdapter trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use sevabot_config::model::StorageConfig;
use sevabot_core::{
    AdapterType, CounterpartyId, DocumentRecord, HealthStatus, Order, OrderFilter, OrderId,
    PluginAdapter, SevabotError, StorageAdapter,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed storage adapter.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules. The database is lazily initialized on the first
/// call to [`StorageAdapter::initialize`].
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    /// Create a new SqliteStorage with the given configuration.
    ///
    /// The database connection is not opened until [`StorageAdapter::initialize`]
    /// is called.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Returns a reference to the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, SevabotError> {
        self.db.get().ok_or_else(|| SevabotError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }

    /// Fetches a single document scoped to its owning order.
    pub async fn get_document(
        &self,
        order_id: &OrderId,
        document_id: &str,
    ) -> Result<Option<DocumentRecord>, SevabotError> {
        queries::documents::get_document(self.db()?, order_id, document_id).await
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, SevabotError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), SevabotError> {
        // Shutdown delegates to close if the DB was initialized.
        if let Some(db) = self.db.get() {
            db.close().await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn initialize(&self) -> Result<(), SevabotError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| SevabotError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), SevabotError> {
        self.db()?.close().await
    }

    async fn upsert_client(
        &self,
        counterparty_id: &CounterpartyId,
        joined_at: &str,
    ) -> Result<(), SevabotError> {
        queries::clients::upsert_client(self.db()?, counterparty_id, joined_at).await
    }

    async fn upsert_order(&self, order: &Order) -> Result<(), SevabotError> {
        queries::orders::upsert_order(self.db()?, order).await
    }

    async fn get_order(&self, order_id: &OrderId) -> Result<Option<Order>, SevabotError> {
        queries::orders::get_order(self.db()?, order_id).await
    }

    async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, SevabotError> {
        queries::orders::list_orders(self.db()?, filter).await
    }

    async fn delete_order(&self, order_id: &OrderId) -> Result<bool, SevabotError> {
        queries::orders::delete_order(self.db()?, order_id).await
    }

    async fn insert_document(&self, doc: &DocumentRecord) -> Result<(), SevabotError> {
        queries::documents::insert_document(self.db()?, doc).await
    }

    async fn list_documents(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<DocumentRecord>, SevabotError> {
        queries::documents::list_documents(self.db()?, order_id).await
    }

    async fn delete_documents(&self, order_id: &OrderId) -> Result<(), SevabotError> {
        queries::documents::delete_documents(self.db()?, order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sevabot_core::STATUS_PENDING_REVIEW;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            wal_mode: true,
        }
    }

    fn make_order(id: &str, cp: &str) -> Order {
        Order {
            order_id: OrderId(id.to_string()),
            counterparty_id: CounterpartyId(cp.to_string()),
            service_type: "डोमिसाईल / नॅशनलिटी दाखला".into(),
            reason: "domicile".into(),
            submitted_by: Some("सीता".into()),
            status: STATUS_PENDING_REVIEW.into(),
            submitted_at: "2026-02-01T10:00:00Z".into(),
            updated_at: "2026-02-01T10:00:00Z".into(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn sqlite_storage_implements_plugin_adapter() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        assert_eq!(storage.name(), "sqlite");
        assert_eq!(storage.version(), semver::Version::new(0, 1, 0));
        assert_eq!(storage.adapter_type(), AdapterType::Storage);
    }

    #[tokio::test]
    async fn initialize_opens_database_at_configured_path() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("init_test.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        storage.initialize().await.unwrap();
        assert!(db_path.exists(), "database file should be created");
    }

    #[tokio::test]
    async fn initialize_twice_returns_error() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("double_init.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        storage.initialize().await.unwrap();
        let result = storage.initialize().await;
        assert!(result.is_err(), "second initialize should fail");
    }

    #[tokio::test]
    async fn health_check_fails_when_not_initialized() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("no_init.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        let result = storage.health_check().await;
        assert!(result.is_err(), "health_check should fail before initialize");
    }

    #[tokio::test]
    async fn full_order_lifecycle_through_adapter() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("lifecycle.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));
        storage.initialize().await.unwrap();

        let cp = CounterpartyId("919812345678@c.us".into());
        storage.upsert_client(&cp, "2026-02-01T10:00:00Z").await.unwrap();

        let order = make_order("WO-100-AAAAAA", cp.as_str());
        storage.upsert_order(&order).await.unwrap();

        let doc = DocumentRecord {
            document_id: "doc-life".into(),
            order_id: order.order_id.clone(),
            mime_type: "application/pdf".into(),
            filename: "lc.pdf".into(),
            data: vec![0x25, 0x50, 0x44, 0x46],
        };
        storage.insert_document(&doc).await.unwrap();

        let got = storage.get_order(&order.order_id).await.unwrap().unwrap();
        assert_eq!(got.status, STATUS_PENDING_REVIEW);

        let docs = storage.list_documents(&order.order_id).await.unwrap();
        assert_eq!(docs.len(), 1);
        let single = storage
            .get_document(&order.order_id, "doc-life")
            .await
            .unwrap();
        assert!(single.is_some());

        storage.delete_documents(&order.order_id).await.unwrap();
        assert!(storage.list_documents(&order.order_id).await.unwrap().is_empty());

        assert!(storage.delete_order(&order.order_id).await.unwrap());
        assert!(storage.get_order(&order.order_id).await.unwrap().is_none());

        storage.close().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_runs_checkpoint() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("shutdown.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));
        storage.initialize().await.unwrap();

        let cp = CounterpartyId("1@c.us".into());
        storage.upsert_client(&cp, "2026-02-01T10:00:00Z").await.unwrap();

        storage.shutdown().await.unwrap();
    }
}
