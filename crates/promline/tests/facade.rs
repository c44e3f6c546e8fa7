#![allow(clippy::unwrap_used)]

use promline::{cli, core, MetricRecord, MetricType};

#[test]
fn facade_reexports_core_and_cli() {
    let mut m = MetricRecord::new(MetricType::Gauge, "temp_celsius", "Ambient temperature", 1).unwrap();
    m.set_value(23.46);

    let via_core: core::MetricRecord = m.clone();
    let body = cli::export::render_snapshot(&[via_core]);
    assert_eq!(body, m.render());
    assert!(core::is_valid_metric_name(m.name()));
}
