use serde::{Deserialize, Serialize};

use super::bucket::Bucket;

/// A labeled line for the projection chart.
///
/// The core generates these; the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Bucket the line belongs to, `None` for the total line
    pub bucket: Option<Bucket>,

    /// Legend label
    pub label: String,

    /// One value per month, index = month
    pub points: Vec<i64>,
}
