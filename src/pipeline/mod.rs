pub mod dedupe;
pub mod filter;
pub mod load;
pub mod merge;
pub mod transform;

use crate::config::Config;
use crate::domain::{Region, SalesTable};
use crate::error::Result;
use tracing::info;

/// Output of the in-memory half of the pipeline, ready for persistence.
pub struct PipelineOutput {
    pub table: SalesTable,
    /// Duplicate rows discarded by the dedup stage, surfaced in the report.
    pub duplicates_discarded: usize,
}

/// Runs load → merge → transform → dedupe → filter over both regional
/// sources. Everything happens in memory; nothing touches the store until
/// this returns Ok, so a failed run cannot leave a half-written table.
pub fn run(config: &Config) -> Result<PipelineOutput> {
    let region_a = load::load_region_csv(
        &config.region_a_path,
        Region::A,
        config.coerce_invalid_numeric,
    )?;
    let region_b = load::load_region_csv(
        &config.region_b_path,
        Region::B,
        config.coerce_invalid_numeric,
    )?;

    let merged = merge::merge_fragments(region_a, region_b);
    info!(rows = merged.len(), "merged region fragments");

    let transformed = transform::derive_sales_columns(merged);
    let deduped = dedupe::dedupe_by_order_id(transformed);
    let filtered = filter::filter_positive_net_sales(deduped.table);
    info!(rows = filtered.len(), "pipeline transform complete");

    Ok(PipelineOutput {
        table: filtered,
        duplicates_discarded: deduped.discarded,
    })
}
