use serde::{Deserialize, Serialize};

use super::bucket::Bucket;

/// One bucket's share of the portfolio next to its target, for the allocation pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    /// The bucket this slice describes
    pub bucket: Bucket,

    /// Display label of the bucket
    pub label: String,

    /// Amount currently held
    pub current_amount: f64,

    /// current_amount / total assets × 100
    pub current_pct: f64,

    /// Target percentage for this bucket (each cash bucket gets half of the cash target)
    pub target_pct: f64,
}

/// How far one bucket is from its target amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceRow {
    /// The bucket this row describes
    pub bucket: Bucket,

    /// Display label of the bucket
    pub label: String,

    /// Amount currently held
    pub current_amount: f64,

    /// total assets × target percentage / 100
    pub target_amount: f64,

    /// current_amount - target_amount.
    /// Positive means overweight (reduce), negative means underweight (add).
    pub difference: f64,
}

impl RebalanceRow {
    #[must_use]
    pub fn is_overweight(&self) -> bool {
        self.difference > 0.0
    }

    #[must_use]
    pub fn is_underweight(&self) -> bool {
        self.difference < 0.0
    }
}

/// Headline figures shown above the dashboard tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of all holdings
    pub total_assets: f64,

    /// Share of total assets already sitting at or below its target, in percent
    pub achievement_rate: f64,

    /// Sum of the five target fields
    pub target_total: f64,

    /// Whether `target_total` equals 100
    pub targets_balanced: bool,
}
