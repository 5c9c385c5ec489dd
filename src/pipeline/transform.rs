use crate::domain::SalesTable;

/// Derives the financial columns for every record:
/// `total_sales = QuantityOrdered * ItemPrice` and
/// `net_sale = total_sales - PromotionDiscount`.
///
/// Pure per-record computation; no cross-record dependency.
pub fn derive_sales_columns(mut table: SalesTable) -> SalesTable {
    for record in &mut table {
        record.total_sales = record.quantity_ordered * record.item_price;
        record.net_sale = record.total_sales - record.promotion_discount;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderRecord, Region};

    fn record(quantity: f64, price: f64, discount: f64) -> OrderRecord {
        OrderRecord {
            order_id: "1".to_string(),
            order_item_id: None,
            quantity_ordered: quantity,
            item_price: price,
            promotion_discount: discount,
            region: Region::A,
            total_sales: 0.0,
            net_sale: 0.0,
        }
    }

    #[test]
    fn derives_total_and_net_sale() {
        let table = derive_sales_columns(vec![record(2.0, 100.0, 50.0)]);
        assert_eq!(table[0].total_sales, 200.0);
        assert_eq!(table[0].net_sale, 150.0);
    }

    #[test]
    fn discount_can_push_net_sale_negative() {
        let table = derive_sales_columns(vec![record(1.0, 10.0, 20.0)]);
        assert_eq!(table[0].total_sales, 10.0);
        assert_eq!(table[0].net_sale, -10.0);
    }

    #[test]
    fn zero_discount_leaves_net_equal_to_total() {
        let table = derive_sales_columns(vec![record(3.0, 5.5, 0.0)]);
        assert!((table[0].net_sale - table[0].total_sales).abs() < f64::EPSILON);
    }
}
