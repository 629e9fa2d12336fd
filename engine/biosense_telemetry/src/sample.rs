use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Biometric metric identifiers accepted by the engine.
///
/// Serialized names are the wire keys of the metrics mapping
/// (`heart_rate`, `glucose`, ...); they must stay stable for callers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    HeartRate,
    Glucose,
    Spo2,
    RespiratoryRate,
    BloodPressureSys,
    BloodPressureDia,
    StressLevel,
    Temperature,
}

impl Metric {
    /// All metrics in wire order.
    pub const ALL: [Metric; 8] = [
        Metric::HeartRate,
        Metric::Glucose,
        Metric::Spo2,
        Metric::RespiratoryRate,
        Metric::BloodPressureSys,
        Metric::BloodPressureDia,
        Metric::StressLevel,
        Metric::Temperature,
    ];

    /// Clinical baseline substituted when a reading is absent.
    pub fn baseline(&self) -> f64 {
        match self {
            Metric::HeartRate => 72.0,
            Metric::Glucose => 95.0,
            Metric::Spo2 => 98.0,
            Metric::RespiratoryRate => 16.0,
            Metric::BloodPressureSys => 120.0,
            Metric::BloodPressureDia => 80.0,
            Metric::StressLevel => 25.0,
            Metric::Temperature => 98.6,
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Metric::HeartRate => "heart_rate",
            Metric::Glucose => "glucose",
            Metric::Spo2 => "spo2",
            Metric::RespiratoryRate => "respiratory_rate",
            Metric::BloodPressureSys => "blood_pressure_sys",
            Metric::BloodPressureDia => "blood_pressure_dia",
            Metric::StressLevel => "stress_level",
            Metric::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// A partial set of biometric readings supplied per assessment call.
///
/// Any subset of metrics may be present. Readings are accepted as-is with no
/// physiological range validation; lookup through [`TelemetrySample::reading`]
/// substitutes the clinical baseline for absent keys and never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TelemetrySample {
    readings: BTreeMap<Metric, f64>,
}

impl TelemetrySample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading, replacing any previous value for the metric.
    pub fn insert(&mut self, metric: Metric, value: f64) -> &mut Self {
        self.readings.insert(metric, value);
        self
    }

    /// The raw reading, if present.
    pub fn raw(&self, metric: Metric) -> Option<f64> {
        self.readings.get(&metric).copied()
    }

    /// The reading with baseline defaulting applied.
    pub fn reading(&self, metric: Metric) -> f64 {
        self.raw(metric).unwrap_or_else(|| metric.baseline())
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }
}

impl FromIterator<(Metric, f64)> for TelemetrySample {
    fn from_iter<I: IntoIterator<Item = (Metric, f64)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}
