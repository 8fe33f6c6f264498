use serde::{Deserialize, Serialize};

use super::bucket::Bucket;
use super::numeric::NumericInput;

/// Current balance per bucket.
///
/// Foreign cash is entered in its own currency and summed with the rest as-is.
/// No conversion is applied anywhere in the library.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Holdings {
    #[serde(rename = "totalCashJPY")]
    pub domestic_cash: NumericInput,

    #[serde(rename = "totalCashUSD")]
    pub foreign_cash: NumericInput,

    #[serde(rename = "globalIndex")]
    pub global_equity: NumericInput,

    #[serde(rename = "jpHighDivETF")]
    pub jp_high_dividend: NumericInput,

    #[serde(rename = "usHighDivETF")]
    pub us_high_dividend: NumericInput,

    pub gold: NumericInput,
}

impl Holdings {
    /// Amount held in a bucket (unset reads as zero).
    #[must_use]
    pub fn amount(&self, bucket: Bucket) -> f64 {
        self.get(bucket).value()
    }

    #[must_use]
    pub fn get(&self, bucket: Bucket) -> NumericInput {
        match bucket {
            Bucket::GlobalEquity => self.global_equity,
            Bucket::JpHighDividend => self.jp_high_dividend,
            Bucket::UsHighDividend => self.us_high_dividend,
            Bucket::Gold => self.gold,
            Bucket::ForeignCash => self.foreign_cash,
            Bucket::DomesticCash => self.domestic_cash,
        }
    }

    pub fn set(&mut self, bucket: Bucket, value: NumericInput) {
        match bucket {
            Bucket::GlobalEquity => self.global_equity = value,
            Bucket::JpHighDividend => self.jp_high_dividend = value,
            Bucket::UsHighDividend => self.us_high_dividend = value,
            Bucket::Gold => self.gold = value,
            Bucket::ForeignCash => self.foreign_cash = value,
            Bucket::DomesticCash => self.domestic_cash = value,
        }
    }

    /// Sum of all six buckets, unset fields counted as zero.
    #[must_use]
    pub fn total(&self) -> f64 {
        Bucket::ALL.iter().map(|b| self.amount(*b)).sum()
    }

    /// Copy with every negative amount stored as 0.
    #[must_use]
    pub fn non_negative(mut self) -> Self {
        for bucket in Bucket::ALL {
            self.set(bucket, self.get(bucket).non_negative());
        }
        self
    }

    /// Build holdings from plain amounts in [`Bucket::ALL`] order.
    #[must_use]
    pub fn from_amounts(amounts: [f64; 6]) -> Self {
        let mut holdings = Self::default();
        for (bucket, amount) in Bucket::ALL.iter().zip(amounts) {
            holdings.set(*bucket, NumericInput::new(amount));
        }
        holdings
    }
}

/// A per-bucket numeric schedule keyed the way the projection settings are stored:
/// the domestic cash bucket lives under `cash`, foreign cash under `totalCashUSD`.
///
/// Used for both monthly contributions (currency per month) and expected
/// returns (annualised percent, any sign).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketInputs {
    #[serde(rename = "totalCashUSD")]
    pub foreign_cash: NumericInput,

    #[serde(rename = "globalIndex")]
    pub global_equity: NumericInput,

    #[serde(rename = "jpHighDivETF")]
    pub jp_high_dividend: NumericInput,

    #[serde(rename = "usHighDivETF")]
    pub us_high_dividend: NumericInput,

    pub gold: NumericInput,

    #[serde(rename = "cash")]
    pub domestic_cash: NumericInput,
}

/// Amount added to each bucket at the end of every projected month.
pub type MonthlyContribution = BucketInputs;

/// Annualised expected return per bucket, in percent.
pub type ExpectedReturn = BucketInputs;

impl BucketInputs {
    /// Value for a bucket (unset reads as zero).
    #[must_use]
    pub fn value(&self, bucket: Bucket) -> f64 {
        self.get(bucket).value()
    }

    #[must_use]
    pub fn get(&self, bucket: Bucket) -> NumericInput {
        match bucket {
            Bucket::GlobalEquity => self.global_equity,
            Bucket::JpHighDividend => self.jp_high_dividend,
            Bucket::UsHighDividend => self.us_high_dividend,
            Bucket::Gold => self.gold,
            Bucket::ForeignCash => self.foreign_cash,
            Bucket::DomesticCash => self.domestic_cash,
        }
    }

    pub fn set(&mut self, bucket: Bucket, value: NumericInput) {
        match bucket {
            Bucket::GlobalEquity => self.global_equity = value,
            Bucket::JpHighDividend => self.jp_high_dividend = value,
            Bucket::UsHighDividend => self.us_high_dividend = value,
            Bucket::Gold => self.gold = value,
            Bucket::ForeignCash => self.foreign_cash = value,
            Bucket::DomesticCash => self.domestic_cash = value,
        }
    }

    /// Copy with every negative value stored as 0. Used for contributions only;
    /// expected returns may be negative.
    #[must_use]
    pub fn non_negative(mut self) -> Self {
        for bucket in Bucket::ALL {
            self.set(bucket, self.get(bucket).non_negative());
        }
        self
    }

    /// Build a schedule from plain values in [`Bucket::ALL`] order.
    #[must_use]
    pub fn from_values(values: [f64; 6]) -> Self {
        let mut inputs = Self::default();
        for (bucket, value) in Bucket::ALL.iter().zip(values) {
            inputs.set(*bucket, NumericInput::new(value));
        }
        inputs
    }
}
