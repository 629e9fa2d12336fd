//! Multi-condition health-risk scoring engine.
//!
//! Converts one set of biometric telemetry readings plus an optional
//! patient profile into a structured clinical risk report covering six
//! conditions, each with a score, severity level, trend, onset estimate,
//! confidence, key indicators and status label — plus the aggregated
//! overall status, comorbidity flag, twelve-month forecast timeline and
//! clinician recommendations.
//!
//! The engine is a deterministic, auditable heuristic with a single
//! non-deterministic step (forecast jitter) behind an injected RNG:
//!
//! ```
//! use biosense_risk::assess;
//! use biosense_telemetry::{Metric, TelemetrySample};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut sample = TelemetrySample::new();
//! sample.insert(Metric::Glucose, 132.0);
//! let report = assess(&sample, None, 0, &mut ChaCha8Rng::seed_from_u64(1));
//! assert_eq!(report.predictions.len(), 6);
//! assert_eq!(report.timeline.len(), 12);
//! ```

pub mod aggregate;
pub mod conditions;
pub mod context;
pub mod forecast;
pub mod report;
pub mod scorers;
pub mod triage;

pub use conditions::{Condition, OverallStatus, RiskLevel, Trend};
pub use context::RiskContext;
pub use report::{
    DataQuality, EngineError, Recommendations, RiskAssessmentReport, RiskPrediction,
    TimelinePoint,
};
pub use triage::{triage, TriageFinding, TriageReport, TriageStatus};

use biosense_telemetry::{PatientProfile, TelemetrySample};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run the full assessment pipeline: normalize, derive the shared context,
/// score the six conditions in fixed order, aggregate, and synthesize the
/// forecast timeline starting at `start_month` (zero-based).
pub fn assess<R: Rng + ?Sized>(
    sample: &TelemetrySample,
    profile: Option<&PatientProfile>,
    start_month: usize,
    rng: &mut R,
) -> RiskAssessmentReport {
    let ctx = RiskContext::derive(sample, profile);
    let predictions = scorers::score_all(&ctx);
    let overall_status = aggregate::overall_status(&predictions);
    let summary = aggregate::summary(&predictions);
    let comorbidities = aggregate::comorbidities(&ctx);
    let recommendations = aggregate::recommendations(&ctx);
    let timeline = forecast::synthesize_timeline(&predictions, start_month, rng);

    debug!("assessment complete: overall={overall_status}");

    RiskAssessmentReport {
        overall_status,
        predictions,
        timeline,
        summary,
        comorbidities,
        recommendations,
        data_quality: DataQuality::default(),
    }
}

/// Convenience entry point: forecast anchored at the current local month,
/// jittered from an entropy-seeded generator.
pub fn assess_now(
    sample: &TelemetrySample,
    profile: Option<&PatientProfile>,
) -> RiskAssessmentReport {
    let mut rng = StdRng::from_entropy();
    assess(sample, profile, forecast::current_month_index(), &mut rng)
}
