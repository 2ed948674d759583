use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::AggregatedField;

/// Insertion-ordered mapping from group key to that group's aggregated
/// fields.
///
/// Group order is the order groups were first seen during aggregation;
/// re-inserting an existing key replaces its value in place without moving
/// it. Serialization emits a JSON object in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryMap {
    entries: Vec<(String, Vec<AggregatedField>)>,
}

impl SummaryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a group. Replacement keeps the group's position.
    pub fn insert(&mut self, key: String, fields: Vec<AggregatedField>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = fields,
            None => self.entries.push((key, fields)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[AggregatedField]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, fields)| fields.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AggregatedField])> {
        self.entries
            .iter()
            .map(|(k, fields)| (k.as_str(), fields.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to JSON text; the pretty form uses 2-space indentation.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl Serialize for SummaryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, fields) in &self.entries {
            map.serialize_entry(key, fields)?;
        }
        map.end()
    }
}
