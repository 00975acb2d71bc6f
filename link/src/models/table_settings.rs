//! Table creation settings.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Settings key that keeps a table's shards off a named node.
///
/// The value is a node identifier as returned by `GET /_nodes`.
pub const ALLOCATION_EXCLUDE_NAME: &str = "allocation.exclude.name";

/// Body for `PUT /{table}`.
///
/// Settings are a flat map of dotted keys, mirroring what the engine
/// accepts at creation time. An empty map serializes to an empty body and
/// the engine applies its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub settings: BTreeMap<String, JsonValue>,
}

impl TableSettings {
    /// Empty settings (engine defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary dotted settings key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Keep the table's shards off the node with the given identifier.
    ///
    /// Only effective at creation time; applying it to an existing table
    /// does not move shards that already landed there.
    pub fn exclude_node(self, node_id: impl Into<String>) -> Self {
        let node_id: String = node_id.into();
        self.set(ALLOCATION_EXCLUDE_NAME, node_id)
    }
}
