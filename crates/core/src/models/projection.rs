use serde::{Deserialize, Serialize};

use super::bucket::Bucket;

/// Projected balances for one month, rounded to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    /// Months from now; row 0 holds the starting balances
    pub month: u32,

    pub global_equity: i64,
    pub jp_high_dividend: i64,
    pub us_high_dividend: i64,
    pub gold: i64,
    pub foreign_cash: i64,
    pub domestic_cash: i64,

    /// Sum of the six rounded bucket values above
    pub total: i64,
}

impl ProjectionRow {
    /// Build a row from rounded balances in [`Bucket::ALL`] order.
    /// The total is the sum of those rounded values.
    #[must_use]
    pub fn new(month: u32, balances: [i64; 6]) -> Self {
        let [global_equity, jp_high_dividend, us_high_dividend, gold, foreign_cash, domestic_cash] =
            balances;
        Self {
            month,
            global_equity,
            jp_high_dividend,
            us_high_dividend,
            gold,
            foreign_cash,
            domestic_cash,
            total: balances.iter().sum(),
        }
    }

    #[must_use]
    pub fn balance(&self, bucket: Bucket) -> i64 {
        match bucket {
            Bucket::GlobalEquity => self.global_equity,
            Bucket::JpHighDividend => self.jp_high_dividend,
            Bucket::UsHighDividend => self.us_high_dividend,
            Bucket::Gold => self.gold,
            Bucket::ForeignCash => self.foreign_cash,
            Bucket::DomesticCash => self.domestic_cash,
        }
    }
}

/// Start, end and growth of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    /// Total of row 0
    pub starting_total: i64,

    /// Total of the last row
    pub ending_total: i64,

    /// ending_total - starting_total
    pub growth: i64,
}
