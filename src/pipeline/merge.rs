use crate::domain::SalesTable;

/// Concatenates two region fragments into one table, fragment A's rows first.
///
/// Row order is stable: it decides which duplicate survives downstream when
/// the same OrderId shows up in both regions.
pub fn merge_fragments(region_a: SalesTable, region_b: SalesTable) -> SalesTable {
    let mut merged = region_a;
    merged.extend(region_b);
    merged
}
