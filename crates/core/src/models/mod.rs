pub mod analytics;
pub mod bucket;
pub mod chart;
pub mod holdings;
pub mod horizon;
pub mod numeric;
pub mod projection;
pub mod snapshot;
pub mod targets;
