//! Table placement constraints.

use crate::error::Result;
use log::debug;
use shoal_link::{ShoalLinkClient, TableSettings};

/// Create `table` with the node `node_id` excluded from allocation.
///
/// Must run before any data is loaded: the exclusion is part of the
/// creation settings, not a later mutation, so no shard of the table ever
/// lands on the excluded node. The setting is not read back for
/// verification; a rejected creation propagates as the client error.
pub async fn create_table_excluding(
    client: &ShoalLinkClient,
    table: &str,
    node_id: &str,
) -> Result<()> {
    debug!(
        "[PLACE] Creating '{}' with allocation excluded from node {}",
        table, node_id
    );
    let settings = TableSettings::new().exclude_node(node_id);
    client.create_table(table, &settings).await?;
    Ok(())
}
