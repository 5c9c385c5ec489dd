use crate::domain::{OrderRecord, Region, SalesTable};
use crate::error::{EtlError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

/// Column positions resolved from one file's header row.
struct ColumnIndex {
    order_id: usize,
    order_item_id: Option<usize>,
    quantity_ordered: usize,
    item_price: usize,
    promotion_discount: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord, path: &Path) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| EtlError::SchemaMismatch {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
        };

        Ok(Self {
            order_id: require("OrderId")?,
            order_item_id: find("OrderItemId"),
            quantity_ordered: require("QuantityOrdered")?,
            item_price: require("ItemPrice")?,
            promotion_discount: require("PromotionDiscount")?,
        })
    }
}

/// Reads one regional CSV into a table fragment, tagging every row with
/// `region`. The header must contain `OrderId`, `QuantityOrdered`,
/// `ItemPrice` and `PromotionDiscount`; `OrderItemId` is carried through when
/// present, and columns the schema does not know are ignored.
///
/// Non-numeric cells in numeric columns abort with `InvalidValue` unless
/// `coerce_invalid` is set, in which case they are read as 0.
pub fn load_region_csv(path: &Path, region: Region, coerce_invalid: bool) -> Result<SalesTable> {
    let file = File::open(path).map_err(|e| EtlError::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let columns = ColumnIndex::resolve(reader.headers()?, path)?;

    let mut table = SalesTable::new();
    for record in reader.records() {
        let record = record?;
        // Header is line 1; the first data row is line 2.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(table.len() as u64 + 2);

        let field = |idx: usize| record.get(idx).unwrap_or("").trim();
        let numeric = |idx: usize, column: &str| -> Result<f64> {
            let raw = field(idx);
            match raw.parse::<f64>() {
                Ok(value) => Ok(value),
                Err(_) if coerce_invalid => {
                    warn!(
                        file = %path.display(),
                        line,
                        column,
                        value = raw,
                        "coercing non-numeric value to 0"
                    );
                    Ok(0.0)
                }
                Err(_) => Err(EtlError::InvalidValue {
                    path: path.to_path_buf(),
                    line,
                    column: column.to_string(),
                    value: raw.to_string(),
                }),
            }
        };

        table.push(OrderRecord {
            order_id: field(columns.order_id).to_string(),
            order_item_id: columns
                .order_item_id
                .map(|idx| field(idx).to_string())
                .filter(|v| !v.is_empty()),
            quantity_ordered: numeric(columns.quantity_ordered, "QuantityOrdered")?,
            item_price: numeric(columns.item_price, "ItemPrice")?,
            promotion_discount: numeric(columns.promotion_discount, "PromotionDiscount")?,
            region,
            total_sales: 0.0,
            net_sale: 0.0,
        });
    }

    info!(region = %region, rows = table.len(), file = %path.display(), "loaded region fragment");
    Ok(table)
}
