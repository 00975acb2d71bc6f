//! Cluster topology as reported by `GET /_nodes`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Topology document: node identifier to per-node info.
///
/// The identifiers keying [`nodes`](Self::nodes) are what the engine
/// expects in allocation settings. Iteration order over the map is
/// unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodesInfo {
    pub nodes: HashMap<String, NodeInfo>,
}

/// Per-node section of the topology document.
///
/// Nodes publish more sections than these; everything except the HTTP
/// listener info is ignored here. A node without an `http` section fails
/// parsing, since every queryable node publishes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Human-readable node name, when the engine reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// HTTP listener addresses.
    pub http: HttpInfo,
}

/// HTTP listener addresses for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpInfo {
    /// Every `host:port` the listener is bound to.
    pub bound_address: Vec<String>,
    /// Address the node advertises to clients, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_address: Option<String>,
}
