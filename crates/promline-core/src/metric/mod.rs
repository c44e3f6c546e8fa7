//! The metric record and its type tag.
//!
//! - `kind`: closed set of exposition types, emitted in the `# TYPE` line.
//! - `record`: one metric's identity, labels and current sample.
//!
//! A record always renders as a single sample line, whatever its declared
//! type; histogram buckets and summary quantiles are not modelled.

pub mod kind;
pub mod record;

pub use kind::MetricType;
pub use record::{Labels, MetricRecord};
