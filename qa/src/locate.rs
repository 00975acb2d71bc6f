//! Resolving node identifiers from bound addresses.

use crate::error::{QaError, Result};
use log::debug;
use shoal_link::NodesInfo;

/// Find the identifier of the node bound to `address` (a `host:port`
/// string).
///
/// A node matches when the exact string appears anywhere in its
/// bound-address list. The first match in topology iteration order wins;
/// that order is unspecified, and so is the winner when several nodes
/// publish the same address. Returns [`QaError::NodeNotFound`] naming the
/// address when no node matches, which is an assertion failure distinct
/// from the transport errors the topology fetch itself can produce.
pub fn find_node_by_address(topology: &NodesInfo, address: &str) -> Result<String> {
    for (id, node) in &topology.nodes {
        if node.http.bound_address.iter().any(|bound| bound == address) {
            debug!("[LOCATE] Node {} is bound to {}", id, address);
            return Ok(id.clone());
        }
    }
    Err(QaError::NodeNotFound {
        address: address.to_string(),
    })
}
