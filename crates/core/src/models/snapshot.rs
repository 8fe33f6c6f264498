use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::holdings::{ExpectedReturn, Holdings, MonthlyContribution};
use super::horizon::PredictionHorizon;
use super::targets::TargetAllocation;

/// The main state container. Everything in here is persisted after each edit
/// and is what export writes out.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Current balance per bucket
    #[serde(rename = "assets")]
    pub holdings: Holdings,

    /// Target allocation in percent
    pub targets: TargetAllocation,

    /// Monthly contribution per bucket
    #[serde(rename = "monthlyInvestment")]
    pub monthly_contribution: MonthlyContribution,

    /// Annualised expected return per bucket, in percent
    #[serde(rename = "expectedReturns")]
    pub expected_return: ExpectedReturn,

    /// Projection horizon in months
    pub prediction_months: PredictionHorizon,
}

impl Snapshot {
    /// Fill every field absent from `patch` with its default.
    #[must_use]
    pub fn from_patch(patch: SnapshotPatch) -> Self {
        let mut snapshot = Self::default();
        snapshot.apply(patch);
        snapshot
    }

    /// Replace each field present in `patch` wholesale; absent fields are untouched.
    /// Negative holdings and contributions are stored as 0.
    /// Returns the number of fields replaced.
    pub fn apply(&mut self, patch: SnapshotPatch) -> usize {
        let mut applied = 0;
        if let Some(holdings) = patch.holdings {
            self.holdings = holdings.non_negative();
            applied += 1;
        }
        if let Some(targets) = patch.targets {
            self.targets = targets;
            applied += 1;
        }
        if let Some(contribution) = patch.monthly_contribution {
            self.monthly_contribution = contribution.non_negative();
            applied += 1;
        }
        if let Some(expected) = patch.expected_return {
            self.expected_return = expected;
            applied += 1;
        }
        if let Some(horizon) = patch.prediction_months {
            self.prediction_months = horizon;
            applied += 1;
        }
        applied
    }
}

/// A snapshot document where any top-level field may be missing.
///
/// Produced by reading persisted state or an import document. Unknown keys
/// (including `exportDate`) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPatch {
    #[serde(rename = "assets")]
    pub holdings: Option<Holdings>,

    pub targets: Option<TargetAllocation>,

    #[serde(rename = "monthlyInvestment")]
    pub monthly_contribution: Option<MonthlyContribution>,

    #[serde(rename = "expectedReturns")]
    pub expected_return: Option<ExpectedReturn>,

    pub prediction_months: Option<PredictionHorizon>,
}

impl SnapshotPatch {
    /// Number of top-level fields present.
    #[must_use]
    pub fn field_count(&self) -> usize {
        [
            self.holdings.is_some(),
            self.targets.is_some(),
            self.monthly_contribution.is_some(),
            self.expected_return.is_some(),
            self.prediction_months.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

impl From<Snapshot> for SnapshotPatch {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            holdings: Some(snapshot.holdings),
            targets: Some(snapshot.targets),
            monthly_contribution: Some(snapshot.monthly_contribution),
            expected_return: Some(snapshot.expected_return),
            prediction_months: Some(snapshot.prediction_months),
        }
    }
}

/// Export document: the full snapshot plus the moment it was generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(flatten)]
    pub snapshot: Snapshot,

    /// ISO-8601 UTC with millisecond precision, e.g. `2026-10-19T08:30:00.000Z`
    #[serde(serialize_with = "serialize_iso_millis")]
    pub export_date: DateTime<Utc>,
}

fn serialize_iso_millis<S: Serializer>(
    date: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}
