use std::path::Path;

use miette::Result;

use mvnmeta_core::{model_version, time};
use mvnmeta_util::errors::MetadataError;

pub fn exec(file: &Path, json: bool) -> Result<()> {
    let metadata = super::read_file(file)?;

    if json {
        let out = serde_json::to_string_pretty(&metadata).map_err(|e| MetadataError::Generic {
            message: format!("Failed to serialize {}: {e}", file.display()),
        })?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", metadata.coordinates());
    println!("  model version: {}", model_version::detect(&metadata));

    if let Some(ref v) = metadata.versioning {
        let or_none = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        println!("  latest: {}", or_none(&v.latest));
        println!("  release: {}", or_none(&v.release));
        println!("  last updated: {}", last_updated(v.last_updated.as_deref()));
        if !v.versions.is_empty() {
            println!("  versions ({}): {}", v.versions.len(), v.versions.join(", "));
        }
        if let Some(ref snapshot) = v.snapshot {
            println!(
                "  snapshot: {} build {}{}",
                snapshot.timestamp.as_deref().unwrap_or("-"),
                snapshot.build_number,
                if snapshot.local_copy { " (local copy)" } else { "" }
            );
        }
        for sv in &v.snapshot_versions {
            let classifier = sv
                .classifier
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(|c| format!("{c}:"))
                .unwrap_or_default();
            println!(
                "  {classifier}{} = {}",
                sv.extension.as_deref().unwrap_or("-"),
                sv.version.as_deref().unwrap_or("-")
            );
        }
    }

    if !metadata.plugins.is_empty() {
        println!("  plugins:");
        for plugin in &metadata.plugins {
            println!(
                "    {} -> {}",
                plugin.prefix.as_deref().unwrap_or("-"),
                plugin.artifact_id.as_deref().unwrap_or("-")
            );
        }
    }
    Ok(())
}

/// `20200101000000 (2020-01-01 00:00:00 UTC)`, or the raw value when it is
/// not a `yyyyMMddHHmmss` stamp.
fn last_updated(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    match time::parse_timestamp(value) {
        Ok(t) => format!("{value} ({})", t.format("%Y-%m-%d %H:%M:%S UTC")),
        Err(e) => {
            tracing::debug!("{e}");
            value.to_string()
        }
    }
}
