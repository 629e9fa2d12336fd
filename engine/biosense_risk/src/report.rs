use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::conditions::{Condition, OverallStatus, RiskLevel, Trend};

/// Errors surfaced to callers of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("condition not found: {0}")]
    ConditionNotFound(String),
}

/// Per-condition forecast for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub condition: Condition,
    pub risk_level: RiskLevel,
    /// Clamped to the condition's own band; see the scorer table.
    pub score: f64,
    pub trend: Trend,
    /// Estimated onset window, or "N/A"/"Monitoring"/"Stable".
    pub time_to_event: String,
    /// Fixed per-condition calibration stand-in, not derived from data.
    pub confidence: u8,
    /// Exactly three human-readable strings embedding the driving values.
    pub key_indicators: Vec<String>,
    /// Secondary clinical label with its own thresholds, independent of
    /// `risk_level`.
    pub status_text: String,
}

/// Positional recommendation lists. Absent items stay as `None` slots
/// (`null` on the wire) so positional consumers keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub immediate: Vec<Option<String>>,
    pub short_term: Vec<Option<String>>,
}

/// Reliability constants reported with every assessment. Placeholder for a
/// future measured signal; never varies with input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuality {
    pub monitoring_coverage: u8,
    pub lab_accuracy: u8,
    pub manual_entry: u8,
}

impl Default for DataQuality {
    fn default() -> Self {
        Self {
            monitoring_coverage: 85,
            lab_accuracy: 40,
            manual_entry: 60,
        }
    }
}

/// One month of the forecast timeline: the month's short name plus a
/// jittered score per condition, serialized flat
/// (`{"month": "Jan", "Diabetes": 23.9, ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub month: String,
    #[serde(flatten)]
    pub scores: BTreeMap<Condition, f64>,
}

/// The full clinical risk report for one assessment call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentReport {
    pub overall_status: OverallStatus,
    /// Always exactly six, in [`Condition::ALL`] order.
    pub predictions: Vec<RiskPrediction>,
    /// Always exactly twelve monthly points.
    pub timeline: Vec<TimelinePoint>,
    pub summary: String,
    /// Exactly one slot; `None` when no comorbidity is flagged.
    pub comorbidities: Vec<Option<String>>,
    pub recommendations: Recommendations,
    pub data_quality: DataQuality,
}

impl RiskAssessmentReport {
    /// Extract a single condition's prediction by display name,
    /// case-insensitively.
    ///
    /// The six condition names are a fixed, caller-known set, so a miss is
    /// reported explicitly rather than yielding an undefined result.
    pub fn prediction_for(&self, name: &str) -> Result<&RiskPrediction, EngineError> {
        self.predictions
            .iter()
            .find(|p| p.condition.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::ConditionNotFound(name.to_string()))
    }
}
