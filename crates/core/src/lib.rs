pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use models::{
    analytics::{AllocationSlice, DashboardSummary, RebalanceRow},
    bucket::{Bucket, TargetField},
    chart::ChartSeries,
    holdings::{ExpectedReturn, Holdings, MonthlyContribution},
    horizon::{HorizonLabel, PredictionHorizon},
    numeric::NumericInput,
    projection::{ProjectionRow, ProjectionSummary},
    snapshot::Snapshot,
    targets::TargetAllocation,
};
use services::{
    allocation_service::AllocationService, projection_service::ProjectionService,
    rebalance_service::RebalanceService,
};
use storage::{
    format,
    manager::StorageManager,
    store::{KeyValueStore, MemoryStore},
};

use errors::CoreError;

/// Main entry point for the portfolio dashboard core library.
/// Owns the single application state and the store it is persisted to.
///
/// Every mutation replaces exactly the field it touches and then writes the
/// whole snapshot back to the store. Save failures are logged, never returned.
/// All derived figures are recomputed from the current state on each call.
#[must_use]
pub struct PortfolioDashboard<S: KeyValueStore = MemoryStore> {
    state: Snapshot,
    store: S,
    allocation_service: AllocationService,
    rebalance_service: RebalanceService,
    projection_service: ProjectionService,
}

impl<S: KeyValueStore> std::fmt::Debug for PortfolioDashboard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDashboard")
            .field("store", &self.store.name())
            .field("total_assets", &self.total_assets())
            .field("target_total", &self.target_total())
            .field("prediction_months", &self.state.prediction_months.months())
            .finish()
    }
}

impl PortfolioDashboard<MemoryStore> {
    /// Create a dashboard with default state backed by an empty in-memory store.
    pub fn create_new() -> Self {
        Self::open(MemoryStore::new())
    }
}

impl<S: KeyValueStore> PortfolioDashboard<S> {
    /// Open a dashboard on `store`, rehydrating any previously saved snapshot.
    ///
    /// Missing, unparsable or malformed fields fall back to their defaults one by one.
    pub fn open(store: S) -> Self {
        let state = StorageManager::load_or_default(&store);
        debug!("Opened dashboard on {} store", store.name());
        Self::build(state, store)
    }

    // ── State access ────────────────────────────────────────────────

    /// The full current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    #[must_use]
    pub fn holdings(&self) -> &Holdings {
        &self.state.holdings
    }

    #[must_use]
    pub fn targets(&self) -> &TargetAllocation {
        &self.state.targets
    }

    #[must_use]
    pub fn monthly_contribution(&self) -> &MonthlyContribution {
        &self.state.monthly_contribution
    }

    #[must_use]
    pub fn expected_return(&self) -> &ExpectedReturn {
        &self.state.expected_return
    }

    #[must_use]
    pub fn prediction_horizon(&self) -> PredictionHorizon {
        self.state.prediction_months
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the dashboard and hand back its store.
    pub fn into_store(self) -> S {
        self.store
    }

    // ── Editing ─────────────────────────────────────────────────────

    /// Set one bucket's current balance from the raw input text.
    /// Non-numeric text stores an unset value; negative amounts are stored as 0.
    pub fn set_holding(&mut self, bucket: Bucket, input: &str) {
        self.set_holding_value(bucket, NumericInput::parse(input));
    }

    pub fn set_holding_value(&mut self, bucket: Bucket, value: NumericInput) {
        self.state.holdings.set(bucket, value.non_negative());
        self.persist();
    }

    /// Set one target percentage from the raw input text.
    /// Non-numeric text stores 0; the value is clamped to [0, 100].
    pub fn set_target(&mut self, field: TargetField, input: &str) {
        self.set_target_value(field, NumericInput::parse(input).value());
    }

    pub fn set_target_value(&mut self, field: TargetField, pct: f64) {
        self.state.targets.set(field, pct);
        self.persist();
    }

    /// Set one bucket's monthly contribution from the raw input text.
    /// Negative amounts are stored as 0.
    pub fn set_monthly_contribution(&mut self, bucket: Bucket, input: &str) {
        self.set_monthly_contribution_value(bucket, NumericInput::parse(input));
    }

    pub fn set_monthly_contribution_value(&mut self, bucket: Bucket, value: NumericInput) {
        self.state
            .monthly_contribution
            .set(bucket, value.non_negative());
        self.persist();
    }

    /// Set one bucket's annual expected return (percent, any sign) from the raw input text.
    pub fn set_expected_return(&mut self, bucket: Bucket, input: &str) {
        self.set_expected_return_value(bucket, NumericInput::parse(input));
    }

    pub fn set_expected_return_value(&mut self, bucket: Bucket, value: NumericInput) {
        self.state.expected_return.set(bucket, value);
        self.persist();
    }

    /// Set the horizon from the raw input text.
    /// Non-integer text falls back to 60; the value is clamped to [1, 360].
    pub fn set_prediction_months(&mut self, input: &str) {
        self.set_prediction_horizon(PredictionHorizon::parse(input));
    }

    pub fn set_prediction_horizon(&mut self, horizon: PredictionHorizon) {
        self.state.prediction_months = horizon;
        self.persist();
    }

    /// Reset every holding to unset. Targets and projection settings are kept.
    pub fn clear_holdings(&mut self) {
        self.state.holdings = Holdings::default();
        self.persist();
    }

    /// Restore the default target allocation (40/20/20/10/10).
    pub fn reset_targets(&mut self) {
        self.state.targets = TargetAllocation::default();
        self.persist();
    }

    // ── Allocation & Rebalance ──────────────────────────────────────

    /// Sum of all holdings, unset fields counted as zero.
    #[must_use]
    pub fn total_assets(&self) -> f64 {
        self.allocation_service.total_assets(&self.state.holdings)
    }

    /// Current vs target share per bucket. Empty when total assets is zero.
    #[must_use]
    pub fn current_allocation(&self) -> Vec<AllocationSlice> {
        self.allocation_service
            .summarize(&self.state.holdings, &self.state.targets)
    }

    /// Buy/sell amounts per bucket to hit the targets. Empty when total assets is zero.
    #[must_use]
    pub fn rebalance_analysis(&self) -> Vec<RebalanceRow> {
        self.rebalance_service.analyze(
            &self.state.holdings,
            &self.state.targets,
            self.total_assets(),
        )
    }

    /// Share of total assets placed within target, in percent (0 with no assets).
    #[must_use]
    pub fn achievement_rate(&self) -> f64 {
        let total = self.total_assets();
        let rows = self
            .rebalance_service
            .analyze(&self.state.holdings, &self.state.targets, total);
        self.rebalance_service.achievement_rate(&rows, total)
    }

    /// Sum of the five target percentages.
    #[must_use]
    pub fn target_total(&self) -> f64 {
        self.state.targets.total()
    }

    /// `true` when the targets add up to 100. Only a warning; nothing is normalized.
    #[must_use]
    pub fn targets_balanced(&self) -> bool {
        self.state.targets.is_balanced()
    }

    /// Headline figures in one call.
    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_assets: self.total_assets(),
            achievement_rate: self.achievement_rate(),
            target_total: self.target_total(),
            targets_balanced: self.targets_balanced(),
        }
    }

    // ── Projection ──────────────────────────────────────────────────

    /// Month-by-month projection over the current horizon (horizon + 1 rows).
    #[must_use]
    pub fn projection(&self) -> Vec<ProjectionRow> {
        self.projection_service.project(
            &self.state.holdings,
            &self.state.monthly_contribution,
            &self.state.expected_return,
            self.state.prediction_months.months(),
        )
    }

    /// Starting total, ending total and growth of the current projection.
    #[must_use]
    pub fn projection_summary(&self) -> Option<ProjectionSummary> {
        self.projection_service.summarize(&self.projection())
    }

    /// Projection as one labeled line per bucket plus the total line.
    #[must_use]
    pub fn projection_chart(&self) -> Vec<ChartSeries> {
        self.projection_service.to_chart_series(&self.projection())
    }

    /// Horizon as whole years plus remaining months.
    #[must_use]
    pub fn horizon_label(&self) -> HorizonLabel {
        self.state.prediction_months.label()
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export the full snapshot stamped with the current time.
    pub fn export_to_json(&self) -> Result<String, CoreError> {
        self.export_to_json_at(Utc::now())
    }

    /// Export the full snapshot stamped with `exported_at`.
    pub fn export_to_json_at(&self, exported_at: DateTime<Utc>) -> Result<String, CoreError> {
        format::write_export(&self.state, exported_at)
    }

    /// Suggested file name for an export made now.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        format::export_file_name(Utc::now())
    }

    /// Import a document. Each top-level field present replaces the current
    /// field wholesale; absent fields are left untouched.
    ///
    /// If the document cannot be parsed nothing changes and
    /// `CoreError::InvalidDocument` is returned.
    /// Returns the number of fields replaced.
    pub fn import_from_json(&mut self, text: &str) -> Result<usize, CoreError> {
        let patch = format::read_import(text)?;
        let applied = self.state.apply(patch);
        info!("Imported {applied} of 5 snapshot fields");
        if applied > 0 {
            self.persist();
        }
        Ok(applied)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn persist(&mut self) {
        if let Err(e) = StorageManager::save(&mut self.store, &self.state) {
            warn!("Failed to save snapshot to {} store: {e}", self.store.name());
        }
    }

    fn build(state: Snapshot, store: S) -> Self {
        Self {
            state,
            store,
            allocation_service: AllocationService::new(),
            rebalance_service: RebalanceService::new(),
            projection_service: ProjectionService::new(),
        }
    }
}
