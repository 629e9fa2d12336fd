use serde::{Deserialize, Serialize};

/// Static patient attributes consulted alongside the telemetry readings.
///
/// Optional per call; the defaults describe the reference patient assumed
/// when no profile is supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Age in years.
    pub age: f64,
    /// Body mass index.
    pub bmi: f64,
    /// Whether the patient has a smoking history.
    pub smoking_history: bool,
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            age: 45.0,
            bmi: 24.5,
            smoking_history: false,
        }
    }
}
