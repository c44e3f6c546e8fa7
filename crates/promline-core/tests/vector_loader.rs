//! JSON render vector loader shared by vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;

use serde::Deserialize;

use promline_core::{MetricRecord, MetricType};

#[derive(Debug, Deserialize)]
pub struct RenderVector {
    pub description: String,
    pub metric: MetricDef,
    #[serde(default)]
    pub updates: Vec<Update>,
    pub expect: String,
}

#[derive(Debug, Deserialize)]
pub struct MetricDef {
    #[serde(rename = "type", default)]
    pub kind: MetricType,
    pub name: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub precision: i32,
    #[serde(default)]
    pub labels: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub value: f64,
    #[serde(default)]
    pub labels: Option<HashMap<String, String>>,
}

impl RenderVector {
    /// Build the record and apply every update in order.
    pub fn build(&self) -> MetricRecord {
        let d = &self.metric;
        let mut m = match &d.labels {
            Some(l) => MetricRecord::with_labels(d.kind, &d.name, &d.help, d.precision, l.clone()),
            None => MetricRecord::new(d.kind, &d.name, &d.help, d.precision),
        }
        .expect("vector metric must construct");
        for u in &self.updates {
            match &u.labels {
                Some(l) => m.set_value_with_labels(u.value, l.clone()),
                None => m.set_value(u.value),
            }
        }
        m
    }
}

pub fn load(name: &str) -> RenderVector {
    let path = format!("{}/tests/vectors/{name}", env!("CARGO_MANIFEST_DIR"));
    let s = fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"));
    serde_json::from_str(&s).unwrap()
}
