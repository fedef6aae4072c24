// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client (counterparty) upsert and lookup.

use rusqlite::params;

use sevabot_core::{CounterpartyId, SevabotError};

use crate::database::Database;

/// Records a counterparty. On conflict the earliest joined_at wins, so
/// repeat submissions never overwrite the original join date.
pub async fn upsert_client(
    db: &Database,
    counterparty_id: &CounterpartyId,
    joined_at: &str,
) -> Result<(), SevabotError> {
    let id = counterparty_id.as_str().to_string();
    let joined_at = joined_at.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO clients (counterparty_id, joined_at) VALUES (?1, ?2)
                 ON CONFLICT(counterparty_id) DO NOTHING",
                params![id, joined_at],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Returns the stored join date for a counterparty, if known.
pub async fn get_joined_at(
    db: &Database,
    counterparty_id: &CounterpartyId,
) -> Result<Option<String>, SevabotError> {
    let id = counterparty_id.as_str().to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt =
                conn.prepare("SELECT joined_at FROM clients WHERE counterparty_id = ?1")?;
            let result = stmt.query_row(params![id], |row| row.get(0));
            match result {
                Ok(joined_at) => Ok(Some(joined_at)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn upsert_keeps_earliest_join_date() {
        let (db, _dir) = setup_db().await;
        let cp = CounterpartyId("919812345678@c.us".into());

        upsert_client(&db, &cp, "2026-01-01T00:00:00Z").await.unwrap();
        upsert_client(&db, &cp, "2026-06-01T00:00:00Z").await.unwrap();

        let joined = get_joined_at(&db, &cp).await.unwrap();
        assert_eq!(joined.as_deref(), Some("2026-01-01T00:00:00Z"));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn unknown_client_returns_none() {
        let (db, _dir) = setup_db().await;
        let cp = CounterpartyId("nobody@c.us".into());
        assert!(get_joined_at(&db, &cp).await.unwrap().is_none());
        db.close().await.unwrap();
    }
}
