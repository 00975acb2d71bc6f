//! End-to-end verification scenarios.
//!
//! Both scenarios run their steps strictly in order, one blocking call at
//! a time, and never retry: the first failing step ends the run with that
//! step's error. Transport failures pass through unchanged; an
//! unresolvable node address and a mismatched count surface as their own
//! [`QaError`](crate::QaError) variants.

use crate::cluster::TargetCluster;
use crate::data::load_rows;
use crate::error::Result;
use crate::locate::find_node_by_address;
use crate::placement::create_table_excluding;
use crate::verify::verify_count;
use log::info;

/// Load `count` rows into `table` and verify the count through the
/// default entry point.
///
/// The table is created implicitly by the first index when no placement
/// constraint is involved, so the load is the first step.
pub async fn count_after_uniform_load(
    cluster: &TargetCluster,
    table: &str,
    count: u32,
    mode: Option<&str>,
) -> Result<()> {
    info!("[SCENARIO] Uniform load: {} rows into '{}'", count, table);
    let client = cluster.client()?;

    load_rows(&client, table, count).await?;
    verify_count(&client, table, u64::from(count), mode).await
}

/// Verify the count through a node that holds none of the data.
///
/// Resolves the node behind the cluster's first host address, creates
/// `table` with that node excluded from allocation before anything is
/// loaded, loads `count` rows, then runs the verification through a
/// client pinned to the excluded node itself. The engine must route the
/// aggregate to the nodes that do hold shards and still return the full
/// count.
pub async fn count_through_excluded_node(
    cluster: &TargetCluster,
    table: &str,
    count: u32,
    mode: Option<&str>,
) -> Result<()> {
    let client = cluster.client()?;

    let address = cluster.first_node_address();
    let topology = client.nodes_info().await?;
    let excluded = find_node_by_address(&topology, address)?;
    info!(
        "[SCENARIO] Excluding node {} ({}) from '{}'",
        excluded, address, table
    );

    create_table_excluding(&client, table, &excluded).await?;
    load_rows(&client, table, count).await?;

    // Scoped to the verification step; released on success and failure
    // alike when it drops.
    let excluded_node_client = cluster.client_for(cluster.first_node_url())?;
    verify_count(&excluded_node_client, table, u64::from(count), mode).await
}
