use crate::domain::SalesTable;
use std::collections::HashSet;
use tracing::info;

/// Outcome of the dedup pass. The discarded count feeds the validation
/// report's duplicate statistic.
pub struct DedupeOutcome {
    pub table: SalesTable,
    pub discarded: usize,
}

/// Removes repeated `OrderId`s, keeping the first-encountered record in row
/// order. Because the merge stage puts region A's rows first, a cross-region
/// duplicate resolves in favor of region A.
pub fn dedupe_by_order_id(table: SalesTable) -> DedupeOutcome {
    let before = table.len();
    let mut seen = HashSet::new();
    let mut kept = SalesTable::with_capacity(before);

    for record in table {
        if seen.insert(record.order_id.clone()) {
            kept.push(record);
        }
    }

    let discarded = before - kept.len();
    if discarded > 0 {
        info!(discarded, "dropped duplicate order ids");
    }

    DedupeOutcome {
        table: kept,
        discarded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderRecord, Region};

    fn record(order_id: &str, region: Region, price: f64) -> OrderRecord {
        OrderRecord {
            order_id: order_id.to_string(),
            order_item_id: None,
            quantity_ordered: 1.0,
            item_price: price,
            promotion_discount: 0.0,
            region,
            total_sales: 0.0,
            net_sale: 0.0,
        }
    }

    #[test]
    fn keeps_first_occurrence() {
        let outcome = dedupe_by_order_id(vec![
            record("1", Region::A, 100.0),
            record("2", Region::A, 20.0),
            record("1", Region::B, 999.0),
        ]);

        assert_eq!(outcome.table.len(), 2);
        assert_eq!(outcome.discarded, 1);
        let survivor = &outcome.table[0];
        assert_eq!(survivor.order_id, "1");
        assert_eq!(survivor.region, Region::A);
        assert_eq!(survivor.item_price, 100.0);
    }

    #[test]
    fn unique_table_passes_through_unchanged() {
        let input = vec![record("1", Region::A, 1.0), record("2", Region::B, 2.0)];
        let outcome = dedupe_by_order_id(input.clone());
        assert_eq!(outcome.table, input);
        assert_eq!(outcome.discarded, 0);
    }

    #[test]
    fn preserves_relative_order_of_survivors() {
        let outcome = dedupe_by_order_id(vec![
            record("3", Region::A, 1.0),
            record("1", Region::A, 1.0),
            record("3", Region::A, 1.0),
            record("2", Region::B, 1.0),
        ]);

        let ids: Vec<&str> = outcome.table.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
