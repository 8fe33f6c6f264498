use crate::models::analytics::AllocationSlice;
use crate::models::bucket::Bucket;
use crate::models::holdings::Holdings;
use crate::models::targets::TargetAllocation;

/// Computes the current-vs-target allocation breakdown.
///
/// All inputs are plain values; nothing is cached between calls.
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of all holdings, unset fields counted as zero.
    pub fn total_assets(&self, holdings: &Holdings) -> f64 {
        holdings.total()
    }

    /// One slice per bucket in display order.
    ///
    /// Returns an empty list when total assets is zero so no slice
    /// ever carries a division-by-zero percentage.
    pub fn summarize(
        &self,
        holdings: &Holdings,
        targets: &TargetAllocation,
    ) -> Vec<AllocationSlice> {
        let total = self.total_assets(holdings);
        if total == 0.0 {
            return Vec::new();
        }

        Bucket::ALL
            .iter()
            .map(|bucket| {
                let current_amount = holdings.amount(*bucket);
                AllocationSlice {
                    bucket: *bucket,
                    label: bucket.label().to_string(),
                    current_amount,
                    current_pct: current_amount / total * 100.0,
                    target_pct: targets.pct_for(*bucket),
                }
            })
            .collect()
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}
