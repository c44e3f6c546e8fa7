//! Concatenated exposition output for a set of records.

use promline_core::MetricRecord;

/// Render every record back to back, in slice order.
pub fn render_snapshot(records: &[MetricRecord]) -> String {
    let mut out = String::new();
    for r in records {
        r.render_into(&mut out);
    }
    out
}
