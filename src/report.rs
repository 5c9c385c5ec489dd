use crate::error::Result;
use crate::storage::SalesStore;
use rusqlite::Connection;
use std::collections::BTreeMap;
use tracing::warn;

/// Aggregate statistics over the persisted sales table. Read-only and
/// produced once per run; never written back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub total_records: i64,
    /// Region tag to summed `total_sales`.
    pub region_totals: BTreeMap<String, f64>,
    /// Average `total_sales` per transaction; 0.0 for an empty table.
    pub average_sale: f64,
    /// OrderIds stored more than once, with their counts. Expected empty:
    /// anything here means the dedup stage failed.
    pub duplicate_order_ids: Vec<(String, i64)>,
    /// Duplicate rows the dedup stage discarded during this run.
    pub duplicates_discarded: usize,
}

/// Computes the validation report over the `sales_data` table.
pub fn validate(store: &SalesStore, duplicates_discarded: usize) -> Result<ValidationReport> {
    let conn = store.connection();

    let total_records: i64 = conn.query_row("SELECT COUNT(*) FROM sales_data", [], |row| {
        row.get(0)
    })?;

    let region_totals = region_totals(conn)?;

    // AVG returns NULL on an empty table; report 0.0 in that case.
    let average_sale: f64 = conn.query_row(
        "SELECT COALESCE(AVG(total_sales), 0.0) FROM sales_data",
        [],
        |row| row.get(0),
    )?;

    let duplicate_order_ids = duplicate_order_ids(conn)?;
    if !duplicate_order_ids.is_empty() {
        warn!(
            count = duplicate_order_ids.len(),
            "duplicate OrderIds present after dedup"
        );
    }

    Ok(ValidationReport {
        total_records,
        region_totals,
        average_sale,
        duplicate_order_ids,
        duplicates_discarded,
    })
}

fn region_totals(conn: &Connection) -> Result<BTreeMap<String, f64>> {
    let mut stmt =
        conn.prepare("SELECT region, SUM(total_sales) FROM sales_data GROUP BY region")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))?;

    let mut totals = BTreeMap::new();
    for row in rows {
        let (region, total) = row?;
        totals.insert(region, total);
    }
    Ok(totals)
}

fn duplicate_order_ids(conn: &Connection) -> Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT OrderId, COUNT(*) FROM sales_data GROUP BY OrderId HAVING COUNT(*) > 1",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;

    let mut duplicates = Vec::new();
    for row in rows {
        duplicates.push(row?);
    }
    Ok(duplicates)
}
