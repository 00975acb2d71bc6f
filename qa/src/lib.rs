//! Multi-node count-consistency harness for ShoalDB.
//!
//! Checks that an aggregate count observed through any cluster entry point
//! matches the quantity of data loaded, including through a node that
//! holds none of the table's shards:
//!
//! 1. load a known number of synthetic rows in one refreshed bulk batch,
//! 2. optionally create the table with a named node excluded from
//!    allocation, before any data exists,
//! 3. run `SELECT COUNT(*)` through a chosen node and compare the full
//!    structured response against a locally built expected result,
//!    reporting a field-by-field diff on mismatch.
//!
//! Steps run strictly in sequence and nothing is retried; the first
//! failure ends the run. Cluster provisioning is out of scope: the
//! harness connects to whatever node URLs it is given.
//!
//! # Example
//!
//! ```rust,no_run
//! use shoal_qa::{count_through_excluded_node, TargetCluster};
//!
//! # async fn example() -> shoal_qa::Result<()> {
//! let cluster = TargetCluster::new(vec![
//!     "http://127.0.0.1:9200".to_string(),
//!     "http://127.0.0.1:9201".to_string(),
//! ])?;
//!
//! count_through_excluded_node(&cluster, "test", 42, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod cluster;
pub mod data;
pub mod diff;
pub mod error;
pub mod locate;
pub mod placement;
pub mod scenarios;
pub mod verify;

pub use cluster::TargetCluster;
pub use data::{load_rows, SyntheticRow};
pub use diff::{DiffEntry, ResultDiff};
pub use error::{QaError, Result};
pub use locate::find_node_by_address;
pub use placement::create_table_excluding;
pub use scenarios::{count_after_uniform_load, count_through_excluded_node};
pub use verify::{expected_count_response, verify_count};
