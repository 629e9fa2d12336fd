use serde::{Deserialize, Serialize};
use std::fmt;

/// The six conditions covered by every assessment, in report order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Condition {
    Diabetes,
    Hypertension,
    #[serde(rename = "Cardiac Arrhythmia")]
    CardiacArrhythmia,
    #[serde(rename = "Respiratory Breakdown")]
    RespiratoryBreakdown,
    #[serde(rename = "Stress Disorder")]
    StressDisorder,
    Cholesterol,
}

impl Condition {
    /// All conditions in the fixed report order. Callers must preserve this
    /// order in the output sequence regardless of evaluation order.
    pub const ALL: [Condition; 6] = [
        Condition::Diabetes,
        Condition::Hypertension,
        Condition::CardiacArrhythmia,
        Condition::RespiratoryBreakdown,
        Condition::StressDisorder,
        Condition::Cholesterol,
    ];

    /// Clinical display name, also the wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes",
            Condition::Hypertension => "Hypertension",
            Condition::CardiacArrhythmia => "Cardiac Arrhythmia",
            Condition::RespiratoryBreakdown => "Respiratory Breakdown",
            Condition::StressDisorder => "Stress Disorder",
            Condition::Cholesterol => "Cholesterol",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Primary severity classification of a condition.
///
/// Not every condition uses all four levels; each scorer's own threshold
/// policy decides which apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// High and Critical predictions count toward the elevated-risk set.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        };
        write!(f, "{s}")
    }
}

/// Direction a condition's score is expected to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Worsening,
    Improving,
    Stable,
}

/// Aggregated patient-level status over all six predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallStatus {
    Stable,
    Warning,
    Critical,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OverallStatus::Stable => "Stable",
            OverallStatus::Warning => "Warning",
            OverallStatus::Critical => "Critical",
        };
        write!(f, "{s}")
    }
}
