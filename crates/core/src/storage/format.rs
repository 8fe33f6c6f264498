use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::errors::CoreError;
use crate::models::snapshot::{ExportDocument, Snapshot, SnapshotPatch};

/// File name prefix for exported documents.
pub const EXPORT_FILE_PREFIX: &str = "portfolio-data-";

/// Render the export document: the snapshot plus `exportDate`, pretty-printed JSON.
///
/// ```text
/// { "assets": {..}, "targets": {..}, "monthlyInvestment": {..},
///   "expectedReturns": {..}, "predictionMonths": 60,
///   "exportDate": "2026-10-19T08:30:00.000Z" }
/// ```
pub fn write_export(snapshot: &Snapshot, exported_at: DateTime<Utc>) -> Result<String, CoreError> {
    let document = ExportDocument {
        snapshot: *snapshot,
        export_date: exported_at,
    };
    serde_json::to_string_pretty(&document)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize export document: {e}")))
}

/// Suggested file name, e.g. `portfolio-data-2026-10-19.json`.
#[must_use]
pub fn export_file_name(exported_at: DateTime<Utc>) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.json", exported_at.format("%Y-%m-%d"))
}

/// Parse an import document.
///
/// Unlike loading from storage this is all-or-nothing: any syntax error or
/// malformed field rejects the whole document. Unknown keys are ignored and
/// absent keys come back as `None`.
pub fn read_import(text: &str) -> Result<SnapshotPatch, CoreError> {
    match serde_json::from_str::<SnapshotPatch>(text) {
        Ok(patch) => {
            info!("Parsed import document with {} of 5 fields", patch.field_count());
            Ok(patch)
        }
        Err(e) => {
            warn!("Rejected import document: {e}");
            Err(CoreError::InvalidDocument(e.to_string()))
        }
    }
}
