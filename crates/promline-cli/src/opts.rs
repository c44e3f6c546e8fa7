//! Command line options for the `promline` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_PATH;

/// Render a metric snapshot file as Prometheus exposition text.
#[derive(Debug, Parser)]
#[command(name = "promline", version, about)]
pub struct ProcArgs {
    /// Snapshot YAML file to render.
    #[arg(value_name = "PATH", default_value = DEFAULT_PATH)]
    pub path: PathBuf,
}
