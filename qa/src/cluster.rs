//! Cluster entry points under test.

use crate::error::{QaError, Result};
use shoal_link::ShoalLinkClient;

/// The node URLs a harness run may connect to.
///
/// The first URL is the default entry point. Scenario code also resolves
/// its `host:port` form against the topology, the way an operator would
/// name that node.
#[derive(Debug, Clone)]
pub struct TargetCluster {
    node_urls: Vec<String>,
}

impl TargetCluster {
    /// A cluster reachable at the given node URLs. At least one is
    /// required.
    pub fn new(node_urls: Vec<String>) -> Result<Self> {
        if node_urls.is_empty() {
            return Err(QaError::ConfigurationError(
                "at least one node URL is required".into(),
            ));
        }
        Ok(Self { node_urls })
    }

    /// All node URLs, in the order given.
    pub fn node_urls(&self) -> &[String] {
        &self.node_urls
    }

    /// URL of the first node, the default entry point.
    pub fn first_node_url(&self) -> &str {
        &self.node_urls[0]
    }

    /// `host:port` of the first node, as it appears in a bound-address
    /// list.
    pub fn first_node_address(&self) -> &str {
        host_port(self.first_node_url())
    }

    /// Client for the default entry point.
    pub fn client(&self) -> Result<ShoalLinkClient> {
        self.client_for(self.first_node_url())
    }

    /// Client pinned to one specific node URL.
    pub fn client_for(&self, url: &str) -> Result<ShoalLinkClient> {
        Ok(ShoalLinkClient::builder().base_url(url).build()?)
    }
}

/// Strip the scheme and any trailing path from a node URL, leaving
/// `host:port`.
fn host_port(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.split(&['/', '?'][..]).next().unwrap_or(rest)
}
