// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Work order CRUD operations.

use rusqlite::{params, params_from_iter, ToSql};

use sevabot_core::{CounterpartyId, Order, OrderFilter, OrderId, SevabotError};

use crate::database::Database;

const ORDER_COLUMNS: &str = "order_id, counterparty_id, service_type, reason, \
     submitted_by, status, submitted_at, updated_at, notes";

fn row_to_order(row: &rusqlite::Row<'_>) -> Result<Order, rusqlite::Error> {
    Ok(Order {
        order_id: OrderId(row.get(0)?),
        counterparty_id: CounterpartyId(row.get(1)?),
        service_type: row.get(2)?,
        reason: row.get(3)?,
        submitted_by: row.get(4)?,
        status: row.get(5)?,
        submitted_at: row.get(6)?,
        updated_at: row.get(7)?,
        notes: row.get(8)?,
    })
}

/// Inserts or updates an order keyed by its order id.
///
/// Uses ON CONFLICT DO UPDATE rather than INSERT OR REPLACE so that the
/// cascade on the documents table never fires for a status edit.
pub async fn upsert_order(db: &Database, order: &Order) -> Result<(), SevabotError> {
    let order = order.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO work_orders (order_id, counterparty_id, service_type, reason,
                     submitted_by, status, submitted_at, updated_at, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(order_id) DO UPDATE SET
                     counterparty_id = excluded.counterparty_id,
                     service_type = excluded.service_type,
                     reason = excluded.reason,
                     submitted_by = excluded.submitted_by,
                     status = excluded.status,
                     submitted_at = excluded.submitted_at,
                     updated_at = excluded.updated_at,
                     notes = excluded.notes",
                params![
                    order.order_id.as_str(),
                    order.counterparty_id.as_str(),
                    order.service_type,
                    order.reason,
                    order.submitted_by,
                    order.status,
                    order.submitted_at,
                    order.updated_at,
                    order.notes,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Fetches an order by id.
pub async fn get_order(db: &Database, order_id: &OrderId) -> Result<Option<Order>, SevabotError> {
    let id = order_id.as_str().to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ORDER_COLUMNS} FROM work_orders WHERE order_id = ?1"
            ))?;
            let result = stmt.query_row(params![id], row_to_order);
            match result {
                Ok(order) => Ok(Some(order)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Lists orders matching the filter, newest first.
pub async fn list_orders(db: &Database, filter: &OrderFilter) -> Result<Vec<Order>, SevabotError> {
    let filter = filter.clone();
    db.connection()
        .call(move |conn| {
            let mut sql = format!("SELECT {ORDER_COLUMNS} FROM work_orders");
            let mut clauses: Vec<String> = Vec::new();
            let mut binds: Vec<Box<dyn ToSql>> = Vec::new();

            if let Some(cp) = &filter.counterparty_id {
                binds.push(Box::new(cp.as_str().to_string()));
                clauses.push(format!("counterparty_id = ?{}", binds.len()));
            }
            if let Some(terminal) = filter.terminal {
                let op = if terminal { "IN" } else { "NOT IN" };
                clauses.push(format!(
                    "LOWER(status) {op} ('completed', 'complete', 'done')"
                ));
            }
            if !clauses.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&clauses.join(" AND "));
            }
            sql.push_str(" ORDER BY submitted_at DESC, order_id DESC");
            if let Some(limit) = filter.limit {
                binds.push(Box::new(i64::from(limit)));
                sql.push_str(&format!(" LIMIT ?{}", binds.len()));
            }

            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(binds.iter()), row_to_order)?;
            let mut orders = Vec::new();
            for row in rows {
                orders.push(row?);
            }
            Ok(orders)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Deletes an order; its document records go with it via the FK cascade.
///
/// Returns `false` when no such order existed.
pub async fn delete_order(db: &Database, order_id: &OrderId) -> Result<bool, SevabotError> {
    let id = order_id.as_str().to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute("DELETE FROM work_orders WHERE order_id = ?1", params![id])?;
            Ok(changed > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
