use std::sync::Arc;

use anyhow::Context;

use barmaster_infra::{DashboardService, StorageService};
use barmaster_logistics::LogisticsConfig;

const ENV_DATA_DIR: &str = "BARMASTER_DATA_DIR";

fn main() -> anyhow::Result<()> {
    barmaster_observability::init();

    let config = LogisticsConfig::from_env();

    let storage = match std::env::var(ENV_DATA_DIR) {
        Ok(dir) => StorageService::open_dir(&dir)
            .with_context(|| format!("failed to open data directory {dir}"))?,
        Err(_) => {
            tracing::warn!("{ENV_DATA_DIR} not set; using seeded in-memory collections");
            StorageService::in_memory()
        }
    };

    let dashboard = DashboardService::new(Arc::new(storage), config);
    let snapshot = dashboard
        .snapshot_local()
        .context("failed to build dashboard snapshot")?;

    let deficits = snapshot.logistics.iter().filter(|e| e.is_deficit()).count();
    tracing::info!(
        events_in_window = snapshot.events_in_window,
        report_rows = snapshot.logistics.len(),
        deficits,
        "dashboard ready"
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
