//! Snapshot loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use schema::{MetricEntry, SnapshotConfig};

/// Path read by the binary when none is given.
pub const DEFAULT_PATH: &str = "promline.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<SnapshotConfig> {
    let s = fs::read_to_string(path.as_ref())?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SnapshotConfig> {
    let cfg: SnapshotConfig = serde_yaml::from_str(s)?;
    cfg.validate()?;
    tracing::info!(metrics = cfg.metrics.len(), "snapshot loaded");
    Ok(cfg)
}
