//! promline core: a single metric record and its Prometheus text rendering.
//!
//! This crate holds one value type, [`MetricRecord`], and the formatting rules
//! that turn it into an exposition block (`# HELP`, `# TYPE`, one sample line).
//! It carries no transport, registry or runtime dependencies; collectors that
//! aggregate many records or serve them over HTTP live outside this crate and
//! call in through construction and rendering only.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Construction is the
//! only fallible path and reports [`MetricError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;
pub mod metric;

pub use error::{MetricError, Result};
pub use exposition::{is_valid_label_name, is_valid_metric_name};
pub use metric::{Labels, MetricRecord, MetricType};
