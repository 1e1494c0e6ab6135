//! Per-file results and their flat, column-named form.

use crate::period::PeriodDurationResult;
use gm_signal::DurationWindow;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Analysis of one record: the unfiltered window plus one window per period.
#[derive(Debug, Clone, PartialEq)]
pub struct FileAnalysisResult {
    pub filename: String,
    pub sample_count: usize,
    pub sampling_frequency_hz: f64,
    /// Peak |acceleration| (g)
    pub peak_accel_g: f64,
    /// Record length, `time[n-1] - time[0]` (s)
    pub total_duration_s: f64,
    /// Total Arias Intensity of the unfiltered record (m/s)
    pub arias_total: f64,
    pub unfiltered: DurationWindow,
    /// One entry per configured period, in configured order
    pub periods: Vec<PeriodDurationResult>,
}

impl FileAnalysisResult {
    pub fn period(&self, period_s: f64) -> Option<&PeriodDurationResult> {
        self.periods.iter().find(|p| p.period_s == period_s)
    }

    /// Flatten into the ordered columns consumed by the CSV writer.
    pub fn to_flat_record(&self) -> FlatRecord {
        let mut rec = FlatRecord::with_capacity(7 + 4 * self.periods.len());
        rec.push("filename", FieldValue::Text(self.filename.clone()));
        rec.push_number("peak_accel_g", self.peak_accel_g);
        rec.push_number("total_duration_s", self.total_duration_s);
        rec.push_number("arias_total_ms", self.arias_total);
        rec.push_number("duration_5_95_unfiltered_s", self.unfiltered.duration);
        rec.push_number("t5_unfiltered_s", self.unfiltered.t5);
        rec.push_number("t95_unfiltered_s", self.unfiltered.t95);

        for p in &self.periods {
            let label = period_label(p.period_s);
            let w = &p.duration_window;
            rec.push_number(format!("duration_5_95_T{label}s"), w.duration);
            rec.push_number(format!("t5_T{label}s"), w.t5);
            rec.push_number(format!("t95_T{label}s"), w.t95);
            rec.push_number(format!("arias_filtered_T{label}"), p.filtered_total_energy);
        }
        rec
    }
}

/// Column label for a period: one decimal place when that is exact
/// (`1.0`, `0.5`), otherwise the shortest representation (`0.25`).
pub fn period_label(period_s: f64) -> String {
    let short = format!("{period_s:.1}");
    match short.parse::<f64>() {
        Ok(v) if v == period_s => short,
        _ => format!("{period_s}"),
    }
}

/// A flat cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(v) => write!(f, "{v}"),
        }
    }
}

/// Ordered `(column, value)` pairs; rows from different files line up
/// when they were produced with the same period list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecord {
    fields: Vec<(String, FieldValue)>,
}

impl FlatRecord {
    fn with_capacity(n: usize) -> Self {
        Self {
            fields: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push((name.into(), value));
    }

    fn push_number(&mut self, name: impl Into<String>, value: f64) {
        self.push(name, FieldValue::Number(value));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v)
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
