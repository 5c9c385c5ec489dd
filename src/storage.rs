use crate::domain::SalesTable;
use crate::error::{EtlError, Result};
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;
use tracing::info;

/// SQLite-backed store for the final sales table.
pub struct SalesStore {
    conn: Connection,
}

impl SalesStore {
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| EtlError::StorageUnavailable {
                    message: format!("cannot create {}: {}", parent.display(), e),
                })?;
            }
        }
        let conn = Connection::open(db_path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Opens an existing database read-only. Unlike `open`, this never
    /// creates a file; it is the entry point for report-only access.
    pub fn open_existing<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        if !db_path.exists() {
            return Err(EtlError::StorageUnavailable {
                message: format!("database not found: {}", db_path.display()),
            });
        }
        let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { conn })
    }

    /// Replaces the `sales_data` table with the given records.
    ///
    /// Drop, create and insert all happen inside one transaction, so a
    /// failed run leaves the previous contents intact and a re-run on the
    /// same inputs stores the same state.
    pub fn replace_sales_data(&mut self, table: &SalesTable) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute_batch(
            r#"
            DROP TABLE IF EXISTS sales_data;
            CREATE TABLE sales_data (
                OrderId            TEXT PRIMARY KEY,
                OrderItemId        TEXT,
                QuantityOrdered    REAL,
                ItemPrice          REAL,
                PromotionDiscount  REAL,
                region             TEXT,
                total_sales        REAL,
                net_sale           REAL
            );
            "#,
        )?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO sales_data
                 (OrderId, OrderItemId, QuantityOrdered, ItemPrice, PromotionDiscount, region, total_sales, net_sale)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for record in table {
                stmt.execute(params![
                    record.order_id,
                    record.order_item_id,
                    record.quantity_ordered,
                    record.item_price,
                    record.promotion_discount,
                    record.region.as_str(),
                    record.total_sales,
                    record.net_sale,
                ])?;
            }
        }

        tx.commit()?;
        info!(rows = table.len(), "replaced sales_data table");
        Ok(())
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
