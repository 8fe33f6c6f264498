use serde::{Deserialize, Serialize};

/// One of the six physical asset buckets tracked by the dashboard.
///
/// Variant order is the fixed display order used by every derived table:
/// global equity, the two high-dividend ETFs, gold, then the two cash buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// Global equity index fund
    GlobalEquity,
    /// Japanese high-dividend ETF
    JpHighDividend,
    /// US high-dividend ETF
    UsHighDividend,
    /// Gold
    Gold,
    /// Cash held in the foreign currency (USD), summed without conversion
    ForeignCash,
    /// Cash and deposits in the domestic currency
    DomesticCash,
}

impl Bucket {
    /// All buckets in display order.
    pub const ALL: [Bucket; 6] = [
        Bucket::GlobalEquity,
        Bucket::JpHighDividend,
        Bucket::UsHighDividend,
        Bucket::Gold,
        Bucket::ForeignCash,
        Bucket::DomesticCash,
    ];

    /// Human-readable label shown next to charts and tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Bucket::GlobalEquity => "Global Equity",
            Bucket::JpHighDividend => "JP High Dividend ETF",
            Bucket::UsHighDividend => "US High Dividend ETF",
            Bucket::Gold => "Gold",
            Bucket::ForeignCash => "USD Cash",
            Bucket::DomesticCash => "Cash & Deposits",
        }
    }

    /// Whether this bucket shares the combined "cash" allocation target.
    #[must_use]
    pub fn is_cash(self) -> bool {
        matches!(self, Bucket::ForeignCash | Bucket::DomesticCash)
    }

    /// Position of this bucket in [`Bucket::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the five allocation targets. The two cash buckets share [`TargetField::Cash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetField {
    GlobalEquity,
    JpHighDividend,
    UsHighDividend,
    Gold,
    Cash,
}

impl TargetField {
    /// All target fields in display order.
    pub const ALL: [TargetField; 5] = [
        TargetField::GlobalEquity,
        TargetField::JpHighDividend,
        TargetField::UsHighDividend,
        TargetField::Gold,
        TargetField::Cash,
    ];

    /// The target field a physical bucket draws its percentage from.
    #[must_use]
    pub fn for_bucket(bucket: Bucket) -> Self {
        match bucket {
            Bucket::GlobalEquity => TargetField::GlobalEquity,
            Bucket::JpHighDividend => TargetField::JpHighDividend,
            Bucket::UsHighDividend => TargetField::UsHighDividend,
            Bucket::Gold => TargetField::Gold,
            Bucket::ForeignCash | Bucket::DomesticCash => TargetField::Cash,
        }
    }
}

impl std::fmt::Display for TargetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetField::GlobalEquity => write!(f, "Global Equity"),
            TargetField::JpHighDividend => write!(f, "JP High Dividend ETF"),
            TargetField::UsHighDividend => write!(f, "US High Dividend ETF"),
            TargetField::Gold => write!(f, "Gold"),
            TargetField::Cash => write!(f, "Cash"),
        }
    }
}
