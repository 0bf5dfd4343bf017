//! JSON export functionality.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{AdRecord, InsightsReport};

/// Serializes `data` as pretty JSON (2-space indent, UTF-8 kept as is) into
/// `path`, creating missing parent directories.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut body = serde_json::to_vec_pretty(data).context("Failed to serialize output")?;
    body.push(b'\n');

    tokio::fs::write(path, body)
        .await
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}

/// Writes the ad records array.
pub async fn save_ads_records(records: &[AdRecord], path: &Path) -> Result<()> {
    write_json(path, records).await?;
    log::info!("Saved {} ad record(s) to {}", records.len(), path.display());
    Ok(())
}

/// Writes the insights object.
pub async fn save_insights(insights: &InsightsReport, path: &Path) -> Result<()> {
    write_json(path, insights).await?;
    log::info!("Saved insights to {}", path.display());
    Ok(())
}
