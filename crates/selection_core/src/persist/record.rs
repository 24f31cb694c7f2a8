//! Flat persisted record shape.
//!
//! The only externally-visible schema this engine owns. One record per
//! occupied slot; empty slots are never emitted, so the format is sparse by
//! construction and absence of a record means "unassigned".

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted selection row.
///
/// `team_number` is 1-indexed here while the in-memory team id is 0-indexed;
/// the persistence adapter is the single place that applies the offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SelectionRecord {
    pub team_number: u32,
    pub period_id: u32,
    /// Canonical slot label ("GK", "sub-0", ...).
    pub slot_label: String,
    pub player_id: Uuid,
    /// Missing/empty tags fall back to the engine default on reload.
    #[serde(default)]
    pub performance_category: String,
    #[serde(default)]
    pub is_captain: bool,
    pub duration_minutes: u32,
}

impl SelectionRecord {
    /// JSON schema of the record shape, for the storage collaborator.
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SelectionRecord)
    }
}

/// Serialize a record batch to the JSON payload the storage collaborator
/// receives.
pub fn records_to_json(records: &[SelectionRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}

/// Deserialize a record batch from a JSON payload.
pub fn records_from_json(json: &str) -> Result<Vec<SelectionRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_batch_json_round_trip() {
        let records = vec![SelectionRecord {
            team_number: 1,
            period_id: 1,
            slot_label: "GK".to_string(),
            player_id: Uuid::new_v4(),
            performance_category: "STANDARD".to_string(),
            is_captain: true,
            duration_minutes: 25,
        }];
        let json = records_to_json(&records).unwrap();
        assert_eq!(records_from_json(&json).unwrap(), records);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"[{"team_number":1,"period_id":2,"slot_label":"DC",
            "player_id":"00000000-0000-0000-0000-000000000001","duration_minutes":30}]"#;
        let records = records_from_json(json).unwrap();
        assert!(!records[0].is_captain);
        assert_eq!(records[0].performance_category, "");
    }

    #[test]
    fn schema_names_the_record() {
        let schema = SelectionRecord::json_schema();
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["title"], "SelectionRecord");
    }
}
