use crate::domain::SalesTable;
use tracing::info;

/// Retains only records with a strictly positive net sale, preserving the
/// relative order of survivors. Dropping a row here is a business rule, not
/// an error.
pub fn filter_positive_net_sales(table: SalesTable) -> SalesTable {
    let before = table.len();
    let kept: SalesTable = table.into_iter().filter(|r| r.net_sale > 0.0).collect();

    let dropped = before - kept.len();
    if dropped > 0 {
        info!(dropped, "filtered out non-positive net sales");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderRecord, Region};

    fn record(order_id: &str, net_sale: f64) -> OrderRecord {
        OrderRecord {
            order_id: order_id.to_string(),
            order_item_id: None,
            quantity_ordered: 1.0,
            item_price: 1.0,
            promotion_discount: 0.0,
            region: Region::A,
            total_sales: net_sale,
            net_sale,
        }
    }

    #[test]
    fn drops_zero_and_negative_net_sales() {
        let kept = filter_positive_net_sales(vec![
            record("1", 150.0),
            record("2", 0.0),
            record("3", -10.0),
            record("4", 0.01),
        ]);

        let ids: Vec<&str> = kept.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn all_filtered_yields_empty_table() {
        let kept = filter_positive_net_sales(vec![record("1", -1.0), record("2", 0.0)]);
        assert!(kept.is_empty());
    }
}
