//! Quick triage screen.
//!
//! A lightweight rule-based anomaly screen over the latest readings,
//! independent of the full six-condition assessment. It predates the full
//! engine and keeps its own historical baselines (heart rate 70, glucose
//! 90, stress 20), which differ from the normalizer's; the disagreement is
//! preserved for compatibility.

use serde::{Deserialize, Serialize};

use biosense_telemetry::{Metric, TelemetrySample};

use crate::conditions::RiskLevel;

/// Patient-level outcome of the quick screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriageStatus {
    Healthy,
    Stable,
    Warning,
}

/// One anomaly surfaced by the screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageFinding {
    pub condition: String,
    pub risk_level: RiskLevel,
    pub score: f64,
}

/// Output of [`triage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageReport {
    pub overall_status: TriageStatus,
    pub predictions: Vec<TriageFinding>,
    pub summary: String,
}

const HEALTHY_SUMMARY: &str = "All telemetry indices are within clinical baseline ranges.";

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Screen the latest readings for clinical anomalies.
pub fn triage(sample: &TelemetrySample) -> TriageReport {
    let heart_rate = sample.raw(Metric::HeartRate).unwrap_or(70.0);
    let glucose = sample.raw(Metric::Glucose).unwrap_or(90.0);
    let stress = sample.raw(Metric::StressLevel).unwrap_or(20.0);
    let spo2 = sample.raw(Metric::Spo2).unwrap_or(98.0);
    let bp_sys = sample.raw(Metric::BloodPressureSys).unwrap_or(120.0);
    let bp_dia = sample.raw(Metric::BloodPressureDia).unwrap_or(80.0);

    let mut findings = Vec::new();

    // Cardiovascular
    if heart_rate > 100.0 {
        findings.push(TriageFinding {
            condition: "Arrhythmia".to_string(),
            risk_level: if heart_rate > 130.0 {
                RiskLevel::High
            } else {
                RiskLevel::Moderate
            },
            score: 50.0 + (heart_rate - 100.0),
        });
    } else if heart_rate < 50.0 {
        findings.push(TriageFinding {
            condition: "Bradycardia".to_string(),
            risk_level: RiskLevel::Moderate,
            score: round1(100.0 - heart_rate),
        });
    }

    // Blood pressure, with stress as a fallback signal
    if bp_sys > 140.0 || bp_dia > 90.0 {
        findings.push(TriageFinding {
            condition: "Hypertension".to_string(),
            risk_level: if bp_sys > 160.0 {
                RiskLevel::High
            } else {
                RiskLevel::Moderate
            },
            score: round1((bp_sys / 2.0).min(95.0)),
        });
    } else if stress > 70.0 {
        findings.push(TriageFinding {
            condition: "Hypertension".to_string(),
            risk_level: RiskLevel::Moderate,
            score: stress,
        });
    }

    // Metabolic
    if glucose > 125.0 {
        findings.push(TriageFinding {
            condition: "Diabetes".to_string(),
            risk_level: RiskLevel::High,
            score: round1(glucose / 1.5),
        });
    } else if glucose > 100.0 {
        findings.push(TriageFinding {
            condition: "Diabetes".to_string(),
            risk_level: RiskLevel::Moderate,
            score: 40.0,
        });
    }

    // Respiratory
    if spo2 < 92.0 {
        findings.push(TriageFinding {
            condition: "Hypoxemia".to_string(),
            risk_level: RiskLevel::High,
            score: 92.0,
        });
    } else if spo2 < 95.0 {
        findings.push(TriageFinding {
            condition: "Mild Oxygen Desaturation".to_string(),
            risk_level: RiskLevel::Moderate,
            score: 45.0,
        });
    }

    if findings.is_empty() {
        return TriageReport {
            overall_status: TriageStatus::Healthy,
            predictions: findings,
            summary: HEALTHY_SUMMARY.to_string(),
        };
    }

    let overall_status = if findings.iter().any(|f| f.risk_level == RiskLevel::High) {
        TriageStatus::Warning
    } else {
        TriageStatus::Stable
    };
    let summary = format!(
        "Detected {} clinical anomalies requiring attention.",
        findings.len()
    );
    TriageReport {
        overall_status,
        predictions: findings,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(metrics: &[(Metric, f64)]) -> TelemetrySample {
        metrics.iter().copied().collect()
    }

    #[test]
    fn healthy_readings_surface_nothing() {
        let report = triage(&sample(&[
            (Metric::HeartRate, 70.0),
            (Metric::Glucose, 90.0),
            (Metric::StressLevel, 20.0),
        ]));
        assert_eq!(report.overall_status, TriageStatus::Healthy);
        assert!(report.predictions.is_empty());
        assert_eq!(report.summary, HEALTHY_SUMMARY);
    }

    #[test]
    fn high_glucose_warns() {
        let report = triage(&sample(&[(Metric::Glucose, 130.0)]));
        assert_eq!(report.overall_status, TriageStatus::Warning);
        assert!(report
            .predictions
            .iter()
            .any(|f| f.condition == "Diabetes" && f.risk_level == RiskLevel::High));
        assert_eq!(report.predictions[0].score, 86.7);
    }

    #[test]
    fn moderate_tachycardia_is_stable() {
        let report = triage(&sample(&[(Metric::HeartRate, 110.0)]));
        assert_eq!(report.overall_status, TriageStatus::Stable);
        assert!(report
            .predictions
            .iter()
            .any(|f| f.condition == "Arrhythmia" && f.risk_level == RiskLevel::Moderate));
        assert_eq!(report.predictions[0].score, 60.0);
    }

    #[test]
    fn stress_alone_flags_hypertension() {
        let report = triage(&sample(&[(Metric::StressLevel, 80.0)]));
        assert_eq!(report.overall_status, TriageStatus::Stable);
        assert!(report
            .predictions
            .iter()
            .any(|f| f.condition == "Hypertension" && f.risk_level == RiskLevel::Moderate));
        assert_eq!(report.predictions[0].score, 80.0);
    }

    #[test]
    fn multiple_findings_accumulate() {
        let report = triage(&sample(&[
            (Metric::HeartRate, 45.0),
            (Metric::Glucose, 110.0),
        ]));
        assert_eq!(report.overall_status, TriageStatus::Stable);
        assert_eq!(report.predictions.len(), 2);
        let conditions: Vec<&str> = report
            .predictions
            .iter()
            .map(|f| f.condition.as_str())
            .collect();
        assert!(conditions.contains(&"Bradycardia"));
        assert!(conditions.contains(&"Diabetes"));
        assert_eq!(
            report.summary,
            "Detected 2 clinical anomalies requiring attention."
        );
    }

    #[test]
    fn severe_hypertension_overrides_to_high() {
        let report = triage(&sample(&[(Metric::BloodPressureSys, 170.0)]));
        assert_eq!(report.overall_status, TriageStatus::Warning);
        assert_eq!(report.predictions[0].risk_level, RiskLevel::High);
        assert_eq!(report.predictions[0].score, 85.0);
    }
}
