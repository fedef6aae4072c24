// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document record operations.

use rusqlite::params;

use sevabot_core::{DocumentRecord, OrderId, SevabotError};

use crate::database::Database;

/// Inserts a document record attached to an existing order.
pub async fn insert_document(db: &Database, doc: &DocumentRecord) -> Result<(), SevabotError> {
    let doc = doc.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO documents (document_id, order_id, mime_type, filename, data)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    doc.document_id,
                    doc.order_id.as_str(),
                    doc.mime_type,
                    doc.filename,
                    doc.data,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Lists an order's document records in insertion order.
pub async fn list_documents(
    db: &Database,
    order_id: &OrderId,
) -> Result<Vec<DocumentRecord>, SevabotError> {
    let id = order_id.as_str().to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT document_id, order_id, mime_type, filename, data
                 FROM documents WHERE order_id = ?1 ORDER BY rowid",
            )?;
            let rows = stmt.query_map(params![id], |row| {
                Ok(DocumentRecord {
                    document_id: row.get(0)?,
                    order_id: OrderId(row.get(1)?),
                    mime_type: row.get(2)?,
                    filename: row.get(3)?,
                    data: row.get(4)?,
                })
            })?;
            let mut docs = Vec::new();
            for row in rows {
                docs.push(row?);
            }
            Ok(docs)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Fetches a single document record by id, scoped to its order.
pub async fn get_document(
    db: &Database,
    order_id: &OrderId,
    document_id: &str,
) -> Result<Option<DocumentRecord>, SevabotError> {
    let oid = order_id.as_str().to_string();
    let did = document_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT document_id, order_id, mime_type, filename, data
                 FROM documents WHERE order_id = ?1 AND document_id = ?2",
            )?;
            let result = stmt.query_row(params![oid, did], |row| {
                Ok(DocumentRecord {
                    document_id: row.get(0)?,
                    order_id: OrderId(row.get(1)?),
                    mime_type: row.get(2)?,
                    filename: row.get(3)?,
                    data: row.get(4)?,
                })
            });
            match result {
                Ok(doc) => Ok(Some(doc)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Deletes all document records for an order.
pub async fn delete_documents(db: &Database, order_id: &OrderId) -> Result<(), SevabotError> {
    let id = order_id.as_str().to_string();
    db.connection()
        .call(move |conn| {
            conn.execute("DELETE FROM documents WHERE order_id = ?1", params![id])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::{clients, orders};
    use sevabot_core::{CounterpartyId, Order, STATUS_PENDING_REVIEW};
    use tempfile::tempdir;

    async fn setup_with_order(order_id: &str) -> (Database, tempfile::TempDir, OrderId) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();

        let cp = CounterpartyId("1@c.us".into());
        clients::upsert_client(&db, &cp, "2026-01-01T00:00:00Z").await.unwrap();
        let order = Order {
            order_id: OrderId(order_id.to_string()),
            counterparty_id: cp,
            service_type: "जातिचा दाखला".into(),
            reason: "caste certificate".into(),
            submitted_by: None,
            status: STATUS_PENDING_REVIEW.into(),
            submitted_at: "2026-02-01T10:00:00Z".into(),
            updated_at: "2026-02-01T10:00:00Z".into(),
            notes: None,
        };
        orders::upsert_order(&db, &order).await.unwrap();
        (db, dir, order.order_id)
    }

    fn make_doc(id: &str, order_id: &OrderId, filename: &str) -> DocumentRecord {
        DocumentRecord {
            document_id: id.to_string(),
            order_id: order_id.clone(),
            mime_type: "application/pdf".to_string(),
            filename: filename.to_string(),
            data: filename.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn documents_listed_in_insertion_order() {
        let (db, _dir, oid) = setup_with_order("WO-10-AAAAAA").await;

        insert_document(&db, &make_doc("d1", &oid, "first.pdf")).await.unwrap();
        insert_document(&db, &make_doc("d2", &oid, "second.pdf")).await.unwrap();
        insert_document(&db, &make_doc("d3", &oid, "third.pdf")).await.unwrap();

        let docs = list_documents(&db, &oid).await.unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, ["first.pdf", "second.pdf", "third.pdf"]);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_document_scoped_to_order() {
        let (db, _dir, oid) = setup_with_order("WO-11-BBBBBB").await;
        insert_document(&db, &make_doc("d1", &oid, "a.pdf")).await.unwrap();

        let got = get_document(&db, &oid, "d1").await.unwrap();
        assert_eq!(got.unwrap().filename, "a.pdf");

        let wrong_order = OrderId("WO-11-OTHERS".into());
        assert!(get_document(&db, &wrong_order, "d1").await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_documents_clears_only_target_order() {
        let (db, _dir, oid) = setup_with_order("WO-12-CCCCCC").await;
        insert_document(&db, &make_doc("d1", &oid, "a.pdf")).await.unwrap();
        insert_document(&db, &make_doc("d2", &oid, "b.pdf")).await.unwrap();

        delete_documents(&db, &oid).await.unwrap();
        assert!(list_documents(&db, &oid).await.unwrap().is_empty());

        // Deleting again is a no-op, not an error.
        delete_documents(&db, &oid).await.unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn document_payload_roundtrips_binary_data() {
        let (db, _dir, oid) = setup_with_order("WO-13-DDDDDD").await;
        let mut doc = make_doc("d-bin", &oid, "photo.png");
        doc.mime_type = "image/png".into();
        doc.data = (0u8..=255).collect();
        insert_document(&db, &doc).await.unwrap();

        let got = get_document(&db, &oid, "d-bin").await.unwrap().unwrap();
        assert_eq!(got.data.len(), 256);
        assert_eq!(got.data, doc.data);
        db.close().await.unwrap();
    }
}
