use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin tag for a sales record. Attached at load time; the raw CSVs do not
/// carry a region column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    A,
    B,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::A => "A",
            Region::B => "B",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sales order row with its derived financial columns.
///
/// `total_sales` and `net_sale` start at zero on load and are written exactly
/// once by the transform stage; nothing mutates a record after filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    /// Pass-through column; `None` when the source file omits it.
    pub order_item_id: Option<String>,
    pub quantity_ordered: f64,
    pub item_price: f64,
    pub promotion_discount: f64,
    pub region: Region,
    pub total_sales: f64,
    pub net_sale: f64,
}

/// Ordered collection of records sharing the unified schema.
pub type SalesTable = Vec<OrderRecord>;
