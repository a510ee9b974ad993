//! `fedisnap instance <host>` — export instance metadata to a workbook.

use crate::api::InstanceClient;
use crate::tabular::{activity, flatten, peers};
use crate::workbook;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

/// Run the instance export.
///
/// All three fetches are required; any failure aborts before a workbook
/// is written.
pub async fn run(host: &str, out: &Path, timeout_secs: u64) -> Result<()> {
    let client = InstanceClient::new(host, Duration::from_secs(timeout_secs))?;

    println!("Collecting data from: {host}");

    let snapshot = client
        .snapshot()
        .await
        .context("instance snapshot fetch failed")?;
    let snapshot_table = flatten::flatten_snapshot(&snapshot);
    println!("[OK] instance snapshot");

    let raw_activity = client
        .activity()
        .await
        .context("weekly activity fetch failed")?;
    let activity_table = activity::normalize_activity(&raw_activity);
    println!("[OK] weekly activity: {} rows", activity_table.row_count());

    let raw_peers = client.peers().await.context("peers fetch failed")?;
    let peers_table = peers::peers_table(&raw_peers);
    println!("[OK] peers: {} domains", peers_table.row_count());

    workbook::write_workbook(
        out,
        &[
            ("instance_snapshot", &snapshot_table),
            ("activity_weekly", &activity_table),
            ("peers", &peers_table),
        ],
    )?;

    let resolved = out.canonicalize().unwrap_or_else(|_| out.to_path_buf());
    println!("Workbook written: {}", resolved.display());
    Ok(())
}
