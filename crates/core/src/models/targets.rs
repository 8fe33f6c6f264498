use serde::{Deserialize, Serialize};

use super::bucket::{Bucket, TargetField};
use super::numeric::deserialize_lenient_f64;

/// Lowest accepted target percentage.
pub const MIN_TARGET_PCT: f64 = 0.0;

/// Highest accepted target percentage.
pub const MAX_TARGET_PCT: f64 = 100.0;

/// Number of physical buckets the combined cash target is split across.
pub const CASH_SPLIT_FACTOR: f64 = 2.0;

/// Target allocation in percent for the four invested buckets plus combined cash.
///
/// Each field is clamped to [0, 100] when edited. The five fields are expected to
/// add up to 100 but nothing enforces it; [`TargetAllocation::is_balanced`] only
/// reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetAllocation {
    #[serde(rename = "globalIndex", default, deserialize_with = "deserialize_lenient_f64")]
    pub global_equity: f64,

    #[serde(rename = "jpHighDivETF", default, deserialize_with = "deserialize_lenient_f64")]
    pub jp_high_dividend: f64,

    #[serde(rename = "usHighDivETF", default, deserialize_with = "deserialize_lenient_f64")]
    pub us_high_dividend: f64,

    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub gold: f64,

    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub cash: f64,
}

impl Default for TargetAllocation {
    fn default() -> Self {
        Self {
            global_equity: 40.0,
            jp_high_dividend: 20.0,
            us_high_dividend: 20.0,
            gold: 10.0,
            cash: 10.0,
        }
    }
}

impl TargetAllocation {
    #[must_use]
    pub fn get(&self, field: TargetField) -> f64 {
        match field {
            TargetField::GlobalEquity => self.global_equity,
            TargetField::JpHighDividend => self.jp_high_dividend,
            TargetField::UsHighDividend => self.us_high_dividend,
            TargetField::Gold => self.gold,
            TargetField::Cash => self.cash,
        }
    }

    /// Store a target, clamped to [0, 100]. NaN is stored as 0.
    pub fn set(&mut self, field: TargetField, pct: f64) {
        let clamped = clamp_pct(pct);
        match field {
            TargetField::GlobalEquity => self.global_equity = clamped,
            TargetField::JpHighDividend => self.jp_high_dividend = clamped,
            TargetField::UsHighDividend => self.us_high_dividend = clamped,
            TargetField::Gold => self.gold = clamped,
            TargetField::Cash => self.cash = clamped,
        }
    }

    /// Target percentage for a physical bucket.
    /// Each cash bucket receives half of the combined cash target.
    #[must_use]
    pub fn pct_for(&self, bucket: Bucket) -> f64 {
        let field_pct = self.get(TargetField::for_bucket(bucket));
        if bucket.is_cash() {
            field_pct / CASH_SPLIT_FACTOR
        } else {
            field_pct
        }
    }

    /// Sum of the five target fields.
    #[must_use]
    pub fn total(&self) -> f64 {
        TargetField::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// `true` when the five fields add up to 100.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        (self.total() - 100.0).abs() < 1e-9
    }
}

fn clamp_pct(pct: f64) -> f64 {
    if pct.is_nan() {
        return MIN_TARGET_PCT;
    }
    pct.clamp(MIN_TARGET_PCT, MAX_TARGET_PCT)
}
