use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::models::snapshot::{Snapshot, SnapshotPatch};

use super::store::{KeyValueStore, STORAGE_KEY};

/// High-level persistence: load/save the dashboard snapshot through a [`KeyValueStore`].
///
/// Loading is forgiving. An absent or unparsable blob yields `None`, and inside a
/// parsable blob every top-level field is accepted or dropped on its own, so a
/// partially valid blob is partially honored.
pub struct StorageManager;

impl StorageManager {
    /// Serialize the snapshot and overwrite the stored blob.
    pub fn save<S: KeyValueStore + ?Sized>(
        store: &mut S,
        snapshot: &Snapshot,
    ) -> Result<(), CoreError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))?;
        store.set(STORAGE_KEY, &json)
    }

    /// Read the stored blob. `None` when nothing is stored, the store fails,
    /// or the blob is not a JSON object.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Option<SnapshotPatch> {
        let raw = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored snapshot in {} store", store.name());
                return None;
            }
            Err(e) => {
                warn!("Failed to read stored snapshot from {} store: {e}", store.name());
                return None;
            }
        };
        Self::parse_lenient(&raw)
    }

    /// Load and fill every missing or malformed field with its default.
    pub fn load_or_default<S: KeyValueStore + ?Sized>(store: &S) -> Snapshot {
        Self::load(store).map(Snapshot::from_patch).unwrap_or_default()
    }

    /// Per-field parse of a stored blob.
    pub fn parse_lenient(raw: &str) -> Option<SnapshotPatch> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to parse stored snapshot, using defaults: {e}");
                return None;
            }
        };
        let Value::Object(map) = value else {
            warn!("Stored snapshot is not a JSON object, using defaults");
            return None;
        };

        let patch = SnapshotPatch {
            holdings: field(&map, "assets"),
            targets: field(&map, "targets"),
            monthly_contribution: field(&map, "monthlyInvestment"),
            expected_return: field(&map, "expectedReturns"),
            prediction_months: horizon_field(&map),
        };
        debug!("Loaded stored snapshot with {} of 5 fields", patch.field_count());
        Some(patch)
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    let raw = map.get(key)?;
    if raw.is_null() {
        return None;
    }
    match serde_json::from_value(raw.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring malformed stored field '{key}': {e}");
            None
        }
    }
}

/// A stored horizon of zero counts as absent.
fn horizon_field<T: DeserializeOwned>(map: &Map<String, Value>) -> Option<T> {
    if map.get("predictionMonths").and_then(Value::as_f64) == Some(0.0) {
        return None;
    }
    field(map, "predictionMonths")
}
