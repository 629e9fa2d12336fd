//! Report aggregation.
//!
//! Folds the six predictions and the shared raw scores into the
//! patient-level fields: overall status, prognosis summary, the comorbidity
//! slot, and the recommendation lists. Thresholds here operate on the raw
//! pre-clamp scores carried by [`RiskContext`].

use log::debug;

use crate::conditions::OverallStatus;
use crate::context::RiskContext;
use crate::report::{Recommendations, RiskPrediction};

pub const OPTIMAL_SUMMARY: &str =
    "All monitored conditions are within optimal clinical parameters.";
pub const METABOLIC_COMORBIDITY: &str = "DIABETES + HYPERTENSION + STRESS";

const REC_LAB_PANEL: &str = "Order comprehensive metabolic panel and HbA1c";
const REC_SPIROMETRY: &str = "Schedule pulmonary spirometry assessment";
const REC_HOLTER: &str = "Initiate 48-hour Holter monitoring";
const REC_ENDOCRINOLOGY: &str = "Refer to endocrinology for glycemic management";
const REC_PULMONOLOGY: &str = "Refer to pulmonology for airway evaluation";
const REC_NUTRITION: &str = "Enroll in structured nutrition counseling";

/// Critical if any prediction is Critical, Warning if any is elevated,
/// otherwise Stable.
pub fn overall_status(predictions: &[RiskPrediction]) -> OverallStatus {
    use crate::conditions::RiskLevel;
    if predictions
        .iter()
        .any(|p| p.risk_level == RiskLevel::Critical)
    {
        OverallStatus::Critical
    } else if predictions.iter().any(|p| p.risk_level.is_elevated()) {
        OverallStatus::Warning
    } else {
        OverallStatus::Stable
    }
}

/// Prognosis sentence naming the elevated conditions, or the fixed optimal
/// sentence when none are elevated.
pub fn summary(predictions: &[RiskPrediction]) -> String {
    let elevated: Vec<&str> = predictions
        .iter()
        .filter(|p| p.risk_level.is_elevated())
        .map(|p| p.condition.name())
        .collect();
    if elevated.is_empty() {
        OPTIMAL_SUMMARY.to_string()
    } else {
        format!(
            "Detected {} elevated risk factors: {}.",
            elevated.len(),
            elevated.join(", ")
        )
    }
}

/// The single comorbidity slot. Flagged only when diabetes, hypertension and
/// stress raw scores all clear their gates simultaneously.
pub fn comorbidities(ctx: &RiskContext) -> Vec<Option<String>> {
    let flagged = ctx.diabetes_raw > 60.0 && ctx.hyper_raw > 60.0 && ctx.stress_raw > 50.0;
    debug!(
        "comorbidity gate: diabetes_raw={:.1} hyper_raw={:.1} stress_raw={:.1} -> {}",
        ctx.diabetes_raw, ctx.hyper_raw, ctx.stress_raw, flagged
    );
    vec![flagged.then(|| METABOLIC_COMORBIDITY.to_string())]
}

/// Positional recommendation lists. Slots that do not apply stay `None`.
pub fn recommendations(ctx: &RiskContext) -> Recommendations {
    let immediate = vec![
        Some(REC_LAB_PANEL.to_string()),
        (ctx.spo2 < 94.0).then(|| REC_SPIROMETRY.to_string()),
        (ctx.arr_raw > 50.0).then(|| REC_HOLTER.to_string()),
    ];
    let short_term = vec![
        (ctx.diabetes_raw > 55.0).then(|| REC_ENDOCRINOLOGY.to_string()),
        (ctx.resp_raw > 45.0).then(|| REC_PULMONOLOGY.to_string()),
        Some(REC_NUTRITION.to_string()),
    ];
    Recommendations {
        immediate,
        short_term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RiskContext;
    use crate::scorers::score_all;
    use biosense_telemetry::{Metric, TelemetrySample};
    use pretty_assertions::assert_eq;

    fn ctx(metrics: &[(Metric, f64)]) -> RiskContext {
        let sample: TelemetrySample = metrics.iter().copied().collect();
        RiskContext::derive(&sample, None)
    }

    #[test]
    fn baseline_is_stable_with_optimal_summary() {
        let c = ctx(&[]);
        let predictions = score_all(&c);
        assert_eq!(overall_status(&predictions), OverallStatus::Stable);
        assert_eq!(summary(&predictions), OPTIMAL_SUMMARY);
    }

    #[test]
    fn any_critical_prediction_makes_overall_critical() {
        let c = ctx(&[(Metric::Spo2, 90.0)]);
        let predictions = score_all(&c);
        assert_eq!(overall_status(&predictions), OverallStatus::Critical);
        assert_eq!(
            summary(&predictions),
            "Detected 1 elevated risk factors: Respiratory Breakdown."
        );
    }

    #[test]
    fn elevated_without_critical_is_warning() {
        let c = ctx(&[(Metric::BloodPressureSys, 145.0)]);
        let predictions = score_all(&c);
        assert_eq!(overall_status(&predictions), OverallStatus::Warning);
    }

    #[test]
    fn comorbidity_requires_all_three_gates() {
        // Glucose, pressure and stress all elevated: every gate clears.
        let flagged = ctx(&[
            (Metric::Glucose, 170.0),
            (Metric::BloodPressureSys, 160.0),
            (Metric::BloodPressureDia, 100.0),
            (Metric::StressLevel, 80.0),
        ]);
        assert!(flagged.diabetes_raw > 60.0);
        assert!(flagged.hyper_raw > 60.0);
        assert!(flagged.stress_raw > 50.0);
        assert_eq!(
            comorbidities(&flagged),
            vec![Some(METABOLIC_COMORBIDITY.to_string())]
        );

        // Dropping any one input below its gate nulls the slot.
        let no_glucose = ctx(&[
            (Metric::BloodPressureSys, 160.0),
            (Metric::BloodPressureDia, 100.0),
            (Metric::StressLevel, 80.0),
        ]);
        assert_eq!(comorbidities(&no_glucose), vec![None]);

        let no_pressure = ctx(&[(Metric::Glucose, 170.0), (Metric::StressLevel, 80.0)]);
        assert_eq!(comorbidities(&no_pressure), vec![None]);

        let no_stress = ctx(&[
            (Metric::Glucose, 170.0),
            (Metric::BloodPressureSys, 160.0),
            (Metric::BloodPressureDia, 100.0),
        ]);
        assert_eq!(comorbidities(&no_stress), vec![None]);
    }

    #[test]
    fn lab_panel_and_nutrition_are_always_present() {
        let recs = recommendations(&ctx(&[]));
        assert_eq!(recs.immediate[0].as_deref(), Some(REC_LAB_PANEL));
        assert_eq!(recs.immediate[1], None);
        assert_eq!(recs.immediate[2], None);
        assert_eq!(recs.short_term[0], None);
        assert_eq!(recs.short_term[1], None);
        assert_eq!(recs.short_term[2].as_deref(), Some(REC_NUTRITION));
    }

    #[test]
    fn conditional_slots_fill_without_reordering() {
        let recs = recommendations(&ctx(&[
            (Metric::Spo2, 93.0),
            (Metric::HeartRate, 130.0),
            (Metric::StressLevel, 90.0),
            (Metric::Glucose, 160.0),
        ]));
        assert_eq!(recs.immediate[1].as_deref(), Some(REC_SPIROMETRY));
        assert_eq!(recs.immediate[2].as_deref(), Some(REC_HOLTER));
        assert_eq!(recs.short_term[0].as_deref(), Some(REC_ENDOCRINOLOGY));
        // Respiratory raw (35 + 0) stays below the pulmonology gate.
        assert_eq!(recs.short_term[1], None);
    }
}
