//! Per-record decoding of inventory exports.
//!
//! Every entry of a record list is decoded on its own, so a malformed prefix,
//! VLAN or address turns into a [`RowFault`] for that row instead of failing
//! the whole export.

use crate::error::{RowFault, RowResult, RowScope};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A decoded record, or the raw JSON it was read from and why it failed.
#[derive(Debug, Clone)]
pub enum Record<T> {
    Valid(T),
    Malformed { raw: Value, reason: String },
}

impl<T: DeserializeOwned> Record<T> {
    pub fn parse(raw: Value) -> Record<T> {
        match serde_path_to_error::deserialize::<_, T>(&raw) {
            Ok(record) => Record::Valid(record),
            Err(e) => {
                let reason = format!("path={} error={}", e.path(), e.inner());
                Record::Malformed { raw, reason }
            }
        }
    }
}

impl<T: Clone> Record<T> {
    /// The record as a row result; `key` names the field shown for a fault.
    pub fn decoded(&self, scope: RowScope, key: &str) -> RowResult<T> {
        match self {
            Record::Valid(record) => Ok(record.clone()),
            Record::Malformed { raw, reason } => {
                Err(RowFault::new(scope, subject(raw, key), reason))
            }
        }
    }
}

impl<T> Record<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Record::Valid(record) => Some(record),
            Record::Malformed { .. } => None,
        }
    }

    /// Whether the record is owned by `site_id`.
    ///
    /// A malformed record is matched on its raw `site_id`; one without a
    /// readable `site_id` cannot be attributed and belongs to no site.
    pub fn belongs_to(&self, site_id: u64, owner: impl Fn(&T) -> u64) -> bool {
        match self {
            Record::Valid(record) => owner(record) == site_id,
            Record::Malformed { raw, reason } => match raw.get("site_id").and_then(Value::as_u64) {
                Some(id) => id == site_id,
                None => {
                    log::warn!("Ignoring record without site: {raw} ({reason})");
                    false
                }
            },
        }
    }
}

impl<T> From<T> for Record<T> {
    fn from(record: T) -> Self {
        Record::Valid(record)
    }
}

fn subject(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => match raw.get("id") {
            Some(id) => format!("id {id}"),
            None => "record".to_string(),
        },
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Record<T> {
    fn deserialize<D>(deserializer: D) -> Result<Record<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Record::parse(raw))
    }
}

impl<T: Serialize> Serialize for Record<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Record::Valid(record) => record.serialize(serializer),
            Record::Malformed { raw, .. } => raw.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Prefix, Vlan};
    use serde_json::json;

    #[test]
    fn test_bad_vid_is_malformed() {
        let record: Record<Vlan> = Record::parse(json!({
            "id": 9, "vid": 70000, "name": "big", "site_id": 1
        }));
        let fault = record.decoded(RowScope::Vlan, "vid").unwrap_err();
        assert_eq!(fault.scope, RowScope::Vlan);
        assert_eq!(fault.subject, "70000");
        assert!(fault.reason.contains("vid"));
        assert!(record.belongs_to(1, |v| v.site_id));
        assert!(!record.belongs_to(2, |v| v.site_id));

        let reserved: Record<Vlan> = Record::parse(json!({
            "id": 10, "vid": 4095, "name": "reserved", "site_id": 1
        }));
        assert!(reserved.valid().is_none());
    }

    #[test]
    fn test_bad_prefix_keeps_raw_text() {
        let record: Record<Prefix> = Record::parse(json!({
            "id": 3, "prefix": "10.0.0.0/33", "site_id": 1
        }));
        let fault = record.decoded(RowScope::Prefix, "prefix").unwrap_err();
        assert_eq!(fault.subject, "10.0.0.0/33");
        assert!(fault.reason.contains("invalid CIDR"));
    }

    #[test]
    fn test_record_list_survives_bad_entry() {
        let records: Vec<Record<Prefix>> = serde_json::from_value(json!([
            {"id": 1, "prefix": "10.0.0.0/24", "site_id": 1},
            {"id": 2, "prefix": "not-a-prefix", "site_id": 1},
            {"prefix": "10.9.0.0/24"}
        ]))
        .unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0].valid().is_some());
        assert!(records[1].valid().is_none());
        // no site_id, attributed to no site
        assert!(!records[2].belongs_to(1, |p| p.site_id));
    }
}
