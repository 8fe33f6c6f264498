use log::debug;

use crate::models::bucket::Bucket;
use crate::models::chart::ChartSeries;
use crate::models::holdings::{ExpectedReturn, Holdings, MonthlyContribution};
use crate::models::projection::{ProjectionRow, ProjectionSummary};

/// Label of the total line in chart output.
pub const TOTAL_SERIES_LABEL: &str = "Total";

/// Projects bucket balances month by month under fixed returns and contributions.
///
/// Per bucket, for month `m` in `1..=horizon`:
///
/// ```text
/// rate       = annual_return_pct / 12 / 100
/// balance[m] = balance[m-1] * (1 + rate) + contribution
/// ```
///
/// Balances are carried forward unrounded; each emitted row rounds its six
/// values independently and totals the rounded values.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Generate `horizon_months + 1` rows, month 0 through `horizon_months`.
    ///
    /// Pure: the same inputs always produce the same rows. A zero starting
    /// portfolio still projects (it simply compounds contributions).
    pub fn project(
        &self,
        holdings: &Holdings,
        contribution: &MonthlyContribution,
        expected_return: &ExpectedReturn,
        horizon_months: u32,
    ) -> Vec<ProjectionRow> {
        let mut balances: [f64; 6] = Bucket::ALL.map(|b| holdings.amount(b));
        let monthly_rates: [f64; 6] = Bucket::ALL.map(|b| expected_return.value(b) / 12.0 / 100.0);
        let contributions: [f64; 6] = Bucket::ALL.map(|b| contribution.value(b));

        let mut rows = Vec::with_capacity(horizon_months as usize + 1);
        rows.push(Self::round_row(0, balances));

        for month in 1..=horizon_months {
            for ((balance, rate), added) in balances
                .iter_mut()
                .zip(monthly_rates)
                .zip(contributions)
            {
                *balance = *balance * (1.0 + rate) + added;
            }
            rows.push(Self::round_row(month, balances));
        }

        debug!(
            "Projected {} months, final total {}",
            horizon_months,
            rows.last().map(|r| r.total).unwrap_or(0)
        );
        rows
    }

    /// Starting total, ending total and the growth between them.
    /// `None` for an empty projection.
    pub fn summarize(&self, rows: &[ProjectionRow]) -> Option<ProjectionSummary> {
        let first = rows.first()?;
        let last = rows.last()?;
        Some(ProjectionSummary {
            starting_total: first.total,
            ending_total: last.total,
            growth: last.total - first.total,
        })
    }

    /// Turn rows into one line per bucket (display order) followed by the total line.
    pub fn to_chart_series(&self, rows: &[ProjectionRow]) -> Vec<ChartSeries> {
        let mut series: Vec<ChartSeries> = Bucket::ALL
            .iter()
            .map(|bucket| ChartSeries {
                bucket: Some(*bucket),
                label: bucket.label().to_string(),
                points: rows.iter().map(|row| row.balance(*bucket)).collect(),
            })
            .collect();

        series.push(ChartSeries {
            bucket: None,
            label: TOTAL_SERIES_LABEL.to_string(),
            points: rows.iter().map(|row| row.total).collect(),
        });

        series
    }

    fn round_row(month: u32, balances: [f64; 6]) -> ProjectionRow {
        ProjectionRow::new(month, balances.map(|b| b.round() as i64))
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
