//! Top-level facade crate for promline.
//!
//! Re-exports the core record type and the snapshot tooling so users can depend on a single crate.

pub mod core {
    pub use promline_core::*;
}

pub mod cli {
    pub use promline_cli::*;
}

pub use promline_core::{MetricError, MetricRecord, MetricType};
