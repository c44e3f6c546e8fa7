use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use promline_core::{is_valid_label_name, is_valid_metric_name, MetricRecord, MetricType};

use crate::error::{ConfigError, Result};

/// Largest precision accepted; an f64 carries no more meaningful digits.
const MAX_PRECISION: i32 = 17;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotConfig {
    pub version: u32,

    #[serde(default)]
    pub metrics: Vec<MetricEntry>,
}

impl SnapshotConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        if self.metrics.is_empty() {
            return Err(ConfigError::Invalid("metrics must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for m in &self.metrics {
            m.validate()?;
            if !seen.insert(m.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate metric name: {}",
                    m.name
                )));
            }
        }
        Ok(())
    }

    /// Build one record per entry, in file order.
    pub fn to_records(&self) -> Result<Vec<MetricRecord>> {
        self.metrics.iter().map(MetricEntry::to_record).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricEntry {
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: MetricType,

    #[serde(default)]
    pub help: String,

    #[serde(default)]
    pub precision: i32,

    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    #[serde(default)]
    pub value: f64,
}

impl MetricEntry {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ConfigError::Invalid("metrics[].name must not be empty".into()));
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "metrics[{}].precision must be at most {MAX_PRECISION}",
                self.name
            )));
        }

        // Grammar is the caller's concern; flag it but still render.
        if !is_valid_metric_name(&self.name) {
            tracing::warn!(metric = %self.name, "metric name outside exposition grammar");
        }
        for key in self.labels.keys() {
            if !is_valid_label_name(key) {
                tracing::warn!(metric = %self.name, label = %key, "label name outside exposition grammar");
            }
        }
        Ok(())
    }

    pub fn to_record(&self) -> Result<MetricRecord> {
        let mut record = MetricRecord::with_labels(
            self.kind,
            self.name.as_str(),
            self.help.as_str(),
            self.precision,
            self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
        record.set_value(self.value);
        Ok(record)
    }
}
