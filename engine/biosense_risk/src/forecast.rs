//! Forecast timeline synthesis.
//!
//! Projects each condition's current score across twelve future monthly
//! points with bounded uniform jitter, for trend visualization only. The
//! jitter source is the engine's single non-deterministic step and is
//! injected by the caller so tests can pin it.

use rand::Rng;

use crate::report::{RiskPrediction, TimelinePoint};

/// Short month names, cycled from the starting month.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Jitter bound in score points, applied uniformly in `[-JITTER, JITTER]`.
pub const JITTER: f64 = 5.0;

/// Zero-based index of the current local month.
pub fn current_month_index() -> usize {
    use chrono::Datelike;
    chrono::Local::now().month0() as usize
}

/// Synthesize the twelve-point forecast starting at `start_month`
/// (zero-based, wraps past December).
///
/// Each point carries every condition's score plus uniform jitter, clamped
/// to the fixed `[0, 100]` chart band — deliberately looser than the
/// per-condition clamp bands.
pub fn synthesize_timeline<R: Rng + ?Sized>(
    predictions: &[RiskPrediction],
    start_month: usize,
    rng: &mut R,
) -> Vec<TimelinePoint> {
    (0..12)
        .map(|offset| {
            let month = MONTHS[(start_month + offset) % 12].to_string();
            let scores = predictions
                .iter()
                .map(|p| {
                    let jittered =
                        (p.score + rng.gen_range(-JITTER..=JITTER)).clamp(0.0, 100.0);
                    (p.condition, jittered)
                })
                .collect();
            TimelinePoint { month, scores }
        })
        .collect()
}
