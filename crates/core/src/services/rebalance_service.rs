use crate::models::analytics::RebalanceRow;
use crate::models::bucket::Bucket;
use crate::models::holdings::Holdings;
use crate::models::targets::TargetAllocation;

/// Computes how much to buy or sell per bucket to reach the target allocation.
///
/// Targets are used as-is even when they do not add up to 100.
pub struct RebalanceService;

impl RebalanceService {
    pub fn new() -> Self {
        Self
    }

    /// One row per bucket in display order:
    /// global equity, JP high dividend, US high dividend, gold, foreign cash, domestic cash.
    ///
    /// `total_assets` is passed in rather than recomputed so the caller can
    /// share one total across the allocation and rebalance views.
    /// Returns an empty list when `total_assets` is zero.
    pub fn analyze(
        &self,
        holdings: &Holdings,
        targets: &TargetAllocation,
        total_assets: f64,
    ) -> Vec<RebalanceRow> {
        if total_assets == 0.0 {
            return Vec::new();
        }

        Bucket::ALL
            .iter()
            .map(|bucket| {
                let current_amount = holdings.amount(*bucket);
                let target_amount = total_assets * targets.pct_for(*bucket) / 100.0;
                RebalanceRow {
                    bucket: *bucket,
                    label: bucket.label().to_string(),
                    current_amount,
                    target_amount,
                    difference: current_amount - target_amount,
                }
            })
            .collect()
    }

    /// Share of total assets that is already "correctly placed", in percent.
    ///
    /// Each bucket contributes `min(current, target)`, so overweight buckets
    /// never raise the score. Zero when `total_assets` is zero.
    pub fn achievement_rate(&self, rows: &[RebalanceRow], total_assets: f64) -> f64 {
        if total_assets == 0.0 {
            return 0.0;
        }

        let achieved: f64 = rows
            .iter()
            .map(|row| row.current_amount.min(row.target_amount))
            .sum();

        achieved / total_assets * 100.0
    }
}

impl Default for RebalanceService {
    fn default() -> Self {
        Self::new()
    }
}
