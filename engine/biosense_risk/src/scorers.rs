//! Per-condition scorers.
//!
//! Six independent pure functions, one per condition. Each takes the shared
//! [`RiskContext`] and emits a complete [`RiskPrediction`]. They share no
//! mutable state and may run in any order; the report sequence is always
//! assembled in [`Condition::ALL`] order afterwards.
//!
//! Threshold sources differ per condition: some levels key on the clamped
//! score, others on a raw input (hypertension on systolic pressure,
//! respiratory on SpO2, cholesterol on estimated LDL). Each scorer carries
//! its own policy; do not unify them.

use crate::conditions::{Condition, RiskLevel, Trend};
use crate::context::RiskContext;
use crate::report::RiskPrediction;

/// Run all six scorers in the fixed report order.
pub fn score_all(ctx: &RiskContext) -> Vec<RiskPrediction> {
    vec![
        score_diabetes(ctx),
        score_hypertension(ctx),
        score_arrhythmia(ctx),
        score_respiratory(ctx),
        score_stress(ctx),
        score_cholesterol(ctx),
    ]
}

pub fn score_diabetes(ctx: &RiskContext) -> RiskPrediction {
    let score = ctx.diabetes_raw.clamp(5.0, 98.0);
    let risk_level = if score > 85.0 {
        RiskLevel::Critical
    } else if score > 70.0 {
        RiskLevel::High
    } else if score > 40.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };
    let trend = if ctx.glucose > 110.0 {
        Trend::Rising
    } else {
        Trend::Stable
    };
    let time_to_event = match risk_level {
        RiskLevel::Critical => "3-6 months",
        RiskLevel::High => "6-12 months",
        RiskLevel::Moderate => "12-24 months",
        RiskLevel::Low => "N/A",
    };
    let status_text = if ctx.glucose > 180.0 {
        "HYPERGLYCEMIC"
    } else if ctx.glucose > 125.0 {
        "PRE-DIABETIC"
    } else if ctx.glucose > 110.0 {
        "GLUCOSE ELEVATED"
    } else {
        "EUGLYCEMIC"
    };

    RiskPrediction {
        condition: Condition::Diabetes,
        risk_level,
        score,
        trend,
        time_to_event: time_to_event.to_string(),
        confidence: 92,
        key_indicators: vec![
            format!("Fasting glucose {:.0} mg/dL", ctx.glucose),
            format!("BMI {:.1}", ctx.profile.bmi),
            format!("Age factor {:.0} yrs", ctx.profile.age),
        ],
        status_text: status_text.to_string(),
    }
}

pub fn score_hypertension(ctx: &RiskContext) -> RiskPrediction {
    let score = ctx.hyper_raw.clamp(10.0, 95.0);
    // Level keys on the raw systolic reading, not the composite score.
    let risk_level = if ctx.bp_sys > 160.0 {
        RiskLevel::Critical
    } else if ctx.bp_sys > 140.0 {
        RiskLevel::High
    } else if ctx.bp_sys > 130.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };
    let trend = if ctx.stress > 60.0 {
        Trend::Rising
    } else {
        Trend::Stable
    };
    let time_to_event = match risk_level {
        RiskLevel::Critical => "1-3 months",
        RiskLevel::High => "3-6 months",
        RiskLevel::Moderate => "6-12 months",
        RiskLevel::Low => "N/A",
    };
    let status_text = if ctx.bp_sys > 160.0 || ctx.bp_dia > 100.0 {
        "STAGE 2"
    } else if ctx.bp_sys > 140.0 || ctx.bp_dia > 90.0 {
        "STAGE 1"
    } else if ctx.bp_sys > 120.0 {
        "ELEVATED"
    } else {
        "NORMOTENSIVE"
    };

    RiskPrediction {
        condition: Condition::Hypertension,
        risk_level,
        score,
        trend,
        time_to_event: time_to_event.to_string(),
        confidence: 85,
        key_indicators: vec![
            format!("Systolic {:.0} mmHg", ctx.bp_sys),
            format!("Diastolic {:.0} mmHg", ctx.bp_dia),
            format!("Stress load {:.0}/100", ctx.stress),
        ],
        status_text: status_text.to_string(),
    }
}

pub fn score_arrhythmia(ctx: &RiskContext) -> RiskPrediction {
    let score = ctx.arr_raw.clamp(5.0, 92.0);
    // Two-level policy: arrhythmia never reports Critical.
    let risk_level = if score > 75.0 {
        RiskLevel::High
    } else if score > 40.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };
    let trend = if ctx.hr_var > 30.0 {
        Trend::Improving
    } else {
        Trend::Stable
    };
    let time_to_event = match risk_level {
        RiskLevel::High => "2-4 months",
        RiskLevel::Moderate => "Monitoring",
        _ => "Stable",
    };
    let status_text = if ctx.heart_rate > 110.0 {
        "TACHYCARDIC"
    } else if ctx.heart_rate < 50.0 {
        "BRADYCARDIC"
    } else if ctx.hr_var < 20.0 {
        "LOW HRV"
    } else {
        "SINUS RHYTHM"
    };

    RiskPrediction {
        condition: Condition::CardiacArrhythmia,
        risk_level,
        score,
        trend,
        time_to_event: time_to_event.to_string(),
        confidence: 76,
        key_indicators: vec![
            format!("Resting HR {:.0} bpm", ctx.heart_rate),
            format!("HRV proxy {:.1} ms", ctx.hr_var),
            format!("Rhythm deviation {:.1} bpm", (ctx.heart_rate - 72.0).abs()),
        ],
        status_text: status_text.to_string(),
    }
}

pub fn score_respiratory(ctx: &RiskContext) -> RiskPrediction {
    let score = ctx.resp_raw.clamp(5.0, 90.0);
    // Level keys on raw SpO2 and respiratory rate.
    let risk_level = if ctx.spo2 < 92.0 {
        RiskLevel::Critical
    } else if ctx.spo2 < 94.0 {
        RiskLevel::High
    } else if ctx.respiratory_rate > 20.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };
    let trend = if ctx.respiratory_rate > 18.0 {
        Trend::Worsening
    } else {
        Trend::Stable
    };
    let time_to_event = match risk_level {
        RiskLevel::Critical => "2-4 weeks",
        RiskLevel::High => "1-3 months",
        RiskLevel::Moderate => "6-12 months",
        RiskLevel::Low => "N/A",
    };
    let status_text = if ctx.spo2 < 92.0 {
        "HYPOXEMIC"
    } else if ctx.spo2 < 95.0 {
        "DESATURATING"
    } else if ctx.profile.smoking_history {
        "SMOKER AIRWAY"
    } else {
        "CLEAR AIRWAYS"
    };

    RiskPrediction {
        condition: Condition::RespiratoryBreakdown,
        risk_level,
        score,
        trend,
        time_to_event: time_to_event.to_string(),
        confidence: 88,
        key_indicators: vec![
            format!("SpO2 {:.0}%", ctx.spo2),
            format!("Respiratory rate {:.0}/min", ctx.respiratory_rate),
            format!(
                "Smoking history: {}",
                if ctx.profile.smoking_history { "yes" } else { "no" }
            ),
        ],
        status_text: status_text.to_string(),
    }
}

pub fn score_stress(ctx: &RiskContext) -> RiskPrediction {
    let score = ctx.stress_raw.clamp(10.0, 96.0);
    let risk_level = if score > 80.0 {
        RiskLevel::High
    } else if score > 50.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };
    let trend = if ctx.stress > 70.0 {
        Trend::Worsening
    } else {
        Trend::Stable
    };
    let time_to_event = match risk_level {
        RiskLevel::High => "1-2 months",
        RiskLevel::Moderate => "Monitoring",
        _ => "N/A",
    };
    let status_text = if ctx.stress > 85.0 {
        "ACUTE STRESS"
    } else if ctx.stress > 60.0 {
        "CHRONIC LOAD"
    } else if ctx.hr_var < 25.0 {
        "AUTONOMIC STRAIN"
    } else {
        "COMPENSATED"
    };

    RiskPrediction {
        condition: Condition::StressDisorder,
        risk_level,
        score,
        trend,
        time_to_event: time_to_event.to_string(),
        confidence: 82,
        key_indicators: vec![
            format!("Stress index {:.0}/100", ctx.stress),
            format!("HRV proxy {:.1} ms", ctx.hr_var),
            format!("Resting HR {:.0} bpm", ctx.heart_rate),
        ],
        status_text: status_text.to_string(),
    }
}

pub fn score_cholesterol(ctx: &RiskContext) -> RiskPrediction {
    let score = ctx.chol_raw.clamp(10.0, 85.0);
    // Level keys on the estimated LDL, not the composite score.
    let risk_level = if ctx.ldl_est > 160.0 {
        RiskLevel::High
    } else if ctx.ldl_est > 130.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };
    let trend = if ctx.profile.bmi < 25.0 {
        Trend::Improving
    } else {
        Trend::Stable
    };
    let time_to_event = match risk_level {
        RiskLevel::High => "12-24 months",
        RiskLevel::Moderate => "24-36 months",
        _ => "N/A",
    };
    let status_text = if ctx.ldl_est > 190.0 {
        "SEVERE DYSLIPIDEMIA"
    } else if ctx.ldl_est > 160.0 {
        "DYSLIPIDEMIC"
    } else if ctx.ldl_est > 130.0 {
        "BORDERLINE"
    } else {
        "OPTIMAL"
    };

    RiskPrediction {
        condition: Condition::Cholesterol,
        risk_level,
        score,
        trend,
        time_to_event: time_to_event.to_string(),
        confidence: 72,
        key_indicators: vec![
            format!("Estimated LDL {:.0} mg/dL", ctx.ldl_est),
            format!("BMI {:.1}", ctx.profile.bmi),
            format!("Age factor {:.0} yrs", ctx.profile.age),
        ],
        status_text: status_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosense_telemetry::{Metric, PatientProfile, TelemetrySample};
    use pretty_assertions::assert_eq;

    fn ctx_with(metrics: &[(Metric, f64)], profile: Option<PatientProfile>) -> RiskContext {
        let sample: TelemetrySample = metrics.iter().copied().collect();
        RiskContext::derive(&sample, profile.as_ref())
    }

    #[test]
    fn baseline_diabetes_is_low() {
        let p = score_diabetes(&ctx_with(&[], None));
        assert!((p.score - 23.25).abs() < 1e-9);
        assert_eq!(p.risk_level, RiskLevel::Low);
        assert_eq!(p.trend, Trend::Stable);
        assert_eq!(p.time_to_event, "N/A");
        assert_eq!(p.status_text, "EUGLYCEMIC");
        assert_eq!(p.confidence, 92);
    }

    #[test]
    fn hyperglycemic_scenario_clamps_to_critical() {
        let profile = PatientProfile {
            age: 60.0,
            bmi: 32.0,
            smoking_history: false,
        };
        let p = score_diabetes(&ctx_with(&[(Metric::Glucose, 200.0)], Some(profile)));
        // raw = 120*0.8 + 12*1.5 + 6 + 30 = 150 -> clamped to the band cap
        assert_eq!(p.score, 98.0);
        assert_eq!(p.risk_level, RiskLevel::Critical);
        assert_eq!(p.status_text, "HYPERGLYCEMIC");
        assert_eq!(p.trend, Trend::Rising);
        assert_eq!(p.time_to_event, "3-6 months");
    }

    #[test]
    fn hypertension_levels_key_on_raw_systolic() {
        let p = score_hypertension(&ctx_with(
            &[
                (Metric::BloodPressureSys, 170.0),
                (Metric::BloodPressureDia, 95.0),
            ],
            None,
        ));
        assert_eq!(p.risk_level, RiskLevel::Critical);
        assert_eq!(p.status_text, "STAGE 2");
        // raw = 70*0.6 + 35*0.8 + 25*0.2 = 75
        assert!((p.score - 75.0).abs() < 1e-9);
    }

    #[test]
    fn hypertension_stage1_label_from_diastolic_alone() {
        let p = score_hypertension(&ctx_with(&[(Metric::BloodPressureDia, 92.0)], None));
        // Primary level stays Low (sys at baseline) while the secondary
        // label flags stage 1 off the diastolic reading.
        assert_eq!(p.risk_level, RiskLevel::Low);
        assert_eq!(p.status_text, "STAGE 1");
    }

    #[test]
    fn arrhythmia_never_reports_critical() {
        let p = score_arrhythmia(&ctx_with(
            &[(Metric::HeartRate, 220.0), (Metric::StressLevel, 100.0)],
            None,
        ));
        assert_eq!(p.score, 92.0);
        assert_eq!(p.risk_level, RiskLevel::High);
        assert_eq!(p.status_text, "TACHYCARDIC");
    }

    #[test]
    fn arrhythmia_improving_when_hrv_high() {
        let p = score_arrhythmia(&ctx_with(&[], None));
        // hr_var = 33.75 at baseline stress
        assert_eq!(p.trend, Trend::Improving);
        assert!((p.score - 7.5).abs() < 1e-9);
        assert_eq!(p.risk_level, RiskLevel::Low);
        assert_eq!(p.time_to_event, "Stable");
    }

    #[test]
    fn respiratory_critical_keys_on_spo2() {
        let p = score_respiratory(&ctx_with(&[(Metric::Spo2, 91.0)], None));
        assert_eq!(p.risk_level, RiskLevel::Critical);
        assert_eq!(p.status_text, "HYPOXEMIC");
        assert_eq!(p.time_to_event, "2-4 weeks");
        assert_eq!(p.score, 45.0);
    }

    #[test]
    fn respiratory_moderate_keys_on_rate() {
        let p = score_respiratory(&ctx_with(&[(Metric::RespiratoryRate, 21.0)], None));
        assert_eq!(p.risk_level, RiskLevel::Moderate);
        assert_eq!(p.trend, Trend::Worsening);
        assert_eq!(p.score, 20.0);
    }

    #[test]
    fn smoker_label_without_desaturation() {
        let profile = PatientProfile {
            smoking_history: true,
            ..PatientProfile::default()
        };
        let p = score_respiratory(&ctx_with(&[], Some(profile)));
        assert_eq!(p.status_text, "SMOKER AIRWAY");
        assert_eq!(p.score, 25.0);
        assert_eq!(p.risk_level, RiskLevel::Low);
    }

    #[test]
    fn stress_baseline_is_low_and_compensated() {
        let p = score_stress(&ctx_with(&[], None));
        assert!((p.score - 24.225).abs() < 1e-9);
        assert_eq!(p.risk_level, RiskLevel::Low);
        assert_eq!(p.status_text, "COMPENSATED");
    }

    #[test]
    fn acute_stress_worsens() {
        let p = score_stress(&ctx_with(&[(Metric::StressLevel, 90.0)], None));
        // hr_var = 17.5; raw = 63 + 3.6 + 11.25 = 77.85
        assert!((p.score - 77.85).abs() < 1e-9);
        assert_eq!(p.risk_level, RiskLevel::Moderate);
        assert_eq!(p.trend, Trend::Worsening);
        assert_eq!(p.status_text, "ACUTE STRESS");
    }

    #[test]
    fn cholesterol_levels_key_on_estimated_ldl() {
        let profile = PatientProfile {
            age: 70.0,
            bmi: 38.0,
            smoking_history: false,
        };
        let p = score_cholesterol(&ctx_with(&[], Some(profile)));
        // ldl_est = 100 + 54 + 14 = 168
        assert_eq!(p.risk_level, RiskLevel::High);
        assert_eq!(p.status_text, "DYSLIPIDEMIC");
        assert_eq!(p.time_to_event, "12-24 months");
        assert_eq!(p.trend, Trend::Stable);
    }

    #[test]
    fn score_all_preserves_condition_order() {
        let predictions = score_all(&ctx_with(&[], None));
        let order: Vec<Condition> = predictions.iter().map(|p| p.condition).collect();
        assert_eq!(order, Condition::ALL);
    }

    #[test]
    fn key_indicators_always_three() {
        for p in score_all(&ctx_with(&[], None)) {
            assert_eq!(p.key_indicators.len(), 3, "{}", p.condition);
        }
    }
}
