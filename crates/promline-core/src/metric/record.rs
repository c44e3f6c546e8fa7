//! Single-sample metric record.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use crate::error::{MetricError, Result};
use crate::exposition::{escape_help, escape_label_value, format_value};
use crate::metric::MetricType;

/// Label set. Ordered by key so rendering is deterministic.
pub type Labels = BTreeMap<String, String>;

/// One metric: identity, label set, current value and display precision.
///
/// Type and precision are fixed at construction. The value may be replaced
/// alone or together with the whole label set.
///
/// # Sharing
/// A record has no internal synchronisation; mutation takes `&mut self`.
/// Callers that sample on one task and render on another must serialise
/// access themselves, e.g. with a `Mutex<MetricRecord>`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    name: String,
    help: String,
    kind: MetricType,
    labels: Labels,
    value: f64,
    precision: usize,
}

impl MetricRecord {
    /// Create a record with no labels and a value of `0`.
    ///
    /// A negative `precision` is treated as `0`.
    pub fn new(
        kind: MetricType,
        name: impl Into<String>,
        help: impl Into<String>,
        precision: i32,
    ) -> Result<Self> {
        Self::with_labels(kind, name, help, precision, Labels::new())
    }

    /// Create a record with an initial label set.
    pub fn with_labels<I, K, V>(
        kind: MetricType,
        name: impl Into<String>,
        help: impl Into<String>,
        precision: i32,
        labels: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(MetricError::InvalidArgument(
                "metric name must not be empty".into(),
            ));
        }
        let precision = usize::try_from(precision).unwrap_or_else(|_| {
            tracing::debug!(metric = %name, precision, "negative precision clamped to 0");
            0
        });

        Ok(Self {
            name,
            help: help.into(),
            kind,
            labels: collect_labels(labels),
            value: 0.0,
            precision,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn kind(&self) -> MetricType {
        self.kind
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Replace the sample value. Labels are untouched.
    pub fn set_value(&mut self, value: f64) {
        tracing::trace!(metric = %self.name, value, "set value");
        self.value = value;
    }

    /// Replace the sample value and the entire label set.
    ///
    /// The previous labels are discarded, not merged.
    pub fn set_value_with_labels<I, K, V>(&mut self, value: f64, labels: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        // Build the new set first so both fields are assigned back to back.
        let labels = collect_labels(labels);
        tracing::trace!(metric = %self.name, value, labels = labels.len(), "set value with labels");
        self.value = value;
        self.labels = labels;
    }

    /// Render the exposition block (HELP, TYPE, sample), newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Append the exposition block to `out`.
    pub fn render_into(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = self.write_exposition(out);
    }

    fn write_exposition<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "# HELP {} {}", self.name, escape_help(&self.help))?;
        writeln!(out, "# TYPE {} {}", self.name, self.kind)?;
        out.write_str(&self.name)?;
        if !self.labels.is_empty() {
            let label_str = self
                .labels
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label_value(v)))
                .collect::<Vec<_>>()
                .join(",");
            write!(out, "{{{}}}", label_str)?;
        }
        writeln!(out, " {}", format_value(self.value, self.precision))
    }
}

impl fmt::Display for MetricRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_exposition(f)
    }
}

fn collect_labels<I, K, V>(labels: I) -> Labels
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    labels
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
