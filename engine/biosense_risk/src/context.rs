//! Shared derivation context.
//!
//! All intermediate values consumed by more than one stage are computed here
//! exactly once: the heart-rate-variability proxy feeds both the arrhythmia
//! and stress scorers, and the aggregator thresholds on the raw pre-clamp
//! scores rather than the clamped report values.

use biosense_telemetry::{Metric, PatientProfile, TelemetrySample};

/// Normalized readings plus every shared intermediate for one assessment.
#[derive(Debug, Clone)]
pub struct RiskContext {
    pub heart_rate: f64,
    pub glucose: f64,
    pub spo2: f64,
    pub respiratory_rate: f64,
    pub bp_sys: f64,
    pub bp_dia: f64,
    pub stress: f64,
    pub temperature: f64,
    pub profile: PatientProfile,

    /// Simplified heart-rate-variability proxy: `40 - stress/4`.
    pub hr_var: f64,

    // Raw pre-clamp scores. The aggregator thresholds on these; deriving
    // them back from the clamped output would silently diverge.
    pub diabetes_raw: f64,
    pub hyper_raw: f64,
    pub arr_raw: f64,
    pub resp_raw: f64,
    pub stress_raw: f64,
    pub chol_raw: f64,
    /// Estimated LDL used by the cholesterol scorer's level thresholds.
    pub ldl_est: f64,
}

impl RiskContext {
    /// Normalize the inputs and derive every shared intermediate.
    ///
    /// Missing readings take their clinical baselines; a missing profile
    /// takes the reference patient. Never fails.
    pub fn derive(sample: &TelemetrySample, profile: Option<&PatientProfile>) -> Self {
        let profile = profile.cloned().unwrap_or_default();

        let heart_rate = sample.reading(Metric::HeartRate);
        let glucose = sample.reading(Metric::Glucose);
        let spo2 = sample.reading(Metric::Spo2);
        let respiratory_rate = sample.reading(Metric::RespiratoryRate);
        let bp_sys = sample.reading(Metric::BloodPressureSys);
        let bp_dia = sample.reading(Metric::BloodPressureDia);
        let stress = sample.reading(Metric::StressLevel);
        let temperature = sample.reading(Metric::Temperature);

        let hr_var = 40.0 - stress / 4.0;

        let mut diabetes_raw =
            (glucose - 80.0) * 0.8 + (profile.bmi - 20.0) * 1.5 + profile.age / 10.0;
        if glucose > 180.0 {
            diabetes_raw += 30.0;
        }

        let hyper_raw = (bp_sys - 100.0) * 0.6 + (bp_dia - 60.0) * 0.8 + stress * 0.2;

        let mut arr_raw = (heart_rate - 72.0).abs() * 0.5 + (40.0 - hr_var) * 1.2;
        if heart_rate > 110.0 || heart_rate < 50.0 {
            arr_raw += 25.0;
        }

        let mut resp_raw = (100.0 - spo2) * 5.0 + (respiratory_rate - 16.0) * 2.0;
        if profile.smoking_history {
            resp_raw += 15.0;
        }

        let stress_raw = stress * 0.7 + (heart_rate - 60.0) * 0.3 + (40.0 - hr_var) * 0.5;

        let ldl_est = 100.0 + (profile.bmi - 20.0) * 3.0 + profile.age / 5.0;
        let chol_raw = (ldl_est - 70.0) * 0.4 + (profile.bmi - 20.0);

        Self {
            heart_rate,
            glucose,
            spo2,
            respiratory_rate,
            bp_sys,
            bp_dia,
            stress,
            temperature,
            profile,
            hr_var,
            diabetes_raw,
            hyper_raw,
            arr_raw,
            resp_raw,
            stress_raw,
            chol_raw,
            ldl_est,
        }
    }
}
