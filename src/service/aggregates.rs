use super::ProcurementService;
use crate::constants::SECTOR_PALETTE;
use crate::errors::AppResult;
use crate::models::{AggregateOptions, Sector, SectorAggregate, Tender};
use crate::source::DataSource;
use crate::utils::percentage_share;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

impl<S: DataSource> ProcurementService<S> {
    /// Groups tenders by sector, summing amounts and deriving each sector's
    /// integer percentage share of the grand total. Sorted descending by
    /// total amount; colors come from the fixed cyclic palette indexed by
    /// sort position.
    ///
    /// `options.time_range` and `options.data_source` are recognized but do
    /// not change the underlying dataset.
    pub async fn sector_aggregates(
        &self,
        options: &AggregateOptions,
    ) -> AppResult<Vec<SectorAggregate>> {
        self.simulate_latency(self.config.aggregate_latency_ms).await;

        if options.time_range.is_some() || options.data_source.is_some() {
            debug!(
                time_range = options.time_range.as_deref(),
                data_source = options.data_source.as_deref(),
                "Aggregate options accepted but not applied"
            );
        }

        let tenders = self.source().tenders().await?;
        Ok(aggregate_by_sector(&tenders))
    }
}

/// Pure aggregation over a tender slice.
///
/// Percentage shares are rounded independently, so they may sum to slightly
/// more or less than 100; nothing rebalances the last bucket. Equal totals
/// fall back to sector declaration order so output stays deterministic.
pub(crate) fn aggregate_by_sector(tenders: &[Tender]) -> Vec<SectorAggregate> {
    let mut buckets: BTreeMap<Sector, (usize, f64)> = BTreeMap::new();
    for tender in tenders {
        let bucket = buckets.entry(tender.sector).or_insert((0, 0.0));
        bucket.0 += 1;
        bucket.1 += tender.amount;
    }

    let grand_total: f64 = buckets.values().map(|(_, total)| total).sum();

    let mut rows: Vec<(Sector, usize, f64)> = buckets
        .into_iter()
        .map(|(sector, (count, total))| (sector, count, total))
        .collect();
    rows.sort_by(|a, b| {
        b.2.partial_cmp(&a.2)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    rows.into_iter()
        .enumerate()
        .map(|(position, (sector, count, total))| SectorAggregate {
            name: sector.label().to_string(),
            value: percentage_share(total, grand_total),
            count,
            total_amount: total,
            color: SECTOR_PALETTE[position % SECTOR_PALETTE.len()].to_string(),
        })
        .collect()
}
