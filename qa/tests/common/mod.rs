//! Shared helpers for the harness test suites.
//!
//! The live-cluster tests run against a real ShoalDB cluster. Set
//! `SHOAL_NODE_URLS` to a comma-separated list of node URLs; without it a
//! single local node at `http://localhost:9200` is assumed. Those tests
//! skip with a notice when no node answers. The `stub` module serves the
//! clusterless wire-format tests.

#![allow(dead_code)]

pub mod stub;

use shoal_link::{ShoalLinkClient, ShoalLinkError};
use shoal_qa::TargetCluster;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const DEFAULT_NODE_URLS: &str = "http://localhost:9200";

static UNIQUE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Initialize env_logger once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Unique table name per test invocation so runs never collide.
pub fn unique_table(prefix: &str) -> String {
    let n = UNIQUE_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}_{}_{}", prefix, std::process::id(), n)
}

/// Cluster from `SHOAL_NODE_URLS`, or the default local single node.
pub fn cluster_from_env() -> TargetCluster {
    let urls = std::env::var("SHOAL_NODE_URLS").unwrap_or_else(|_| DEFAULT_NODE_URLS.to_string());
    let urls: Vec<String> = urls
        .split(',')
        .map(|u| u.trim().trim_end_matches('/').to_string())
        .filter(|u| !u.is_empty())
        .collect();
    TargetCluster::new(urls).expect("SHOAL_NODE_URLS must contain at least one URL")
}

/// Probe the first node once with a short timeout.
pub async fn is_cluster_running(cluster: &TargetCluster) -> bool {
    let client = match ShoalLinkClient::builder()
        .base_url(cluster.first_node_url())
        .timeout(Duration::from_secs(2))
        .build()
    {
        Ok(client) => client,
        Err(_) => return false,
    };
    client.nodes_info().await.is_ok()
}

/// Cluster to test against, or `None` (with a notice) when unreachable.
pub async fn ready_cluster() -> Option<TargetCluster> {
    init_logging();
    let cluster = cluster_from_env();
    if !is_cluster_running(&cluster).await {
        eprintln!("⚠️  ShoalDB cluster not reachable. Skipping test.");
        return None;
    }
    Some(cluster)
}

/// Best-effort cleanup after a run. A table that does not exist is fine.
pub async fn drop_table(cluster: &TargetCluster, table: &str) {
    let Ok(client) = cluster.client() else {
        return;
    };
    match client.delete_table(table).await {
        Ok(())
        | Err(ShoalLinkError::ServerError {
            status_code: 404, ..
        }) => {}
        Err(err) => eprintln!("⚠️  Cleanup of '{table}' failed: {err}"),
    }
}
