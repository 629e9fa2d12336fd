//! Synthetic vitals generation.
//!
//! Reproduces the readings the monitoring device emits per tick, for
//! exercising the engine and its consumers without hardware attached. The
//! generator takes an injected RNG so tests can pin its output.

use crate::sample::{Metric, TelemetrySample};
use rand::Rng;

/// Distribution bounds for one simulated tick.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub heart_rate_base: (i32, i32),
    pub heart_rate_wobble: f64,
    pub glucose_center: f64,
    pub glucose_spread: f64,
    pub temperature_center_c: f64,
    pub temperature_spread_c: f64,
    pub stress_range: (i32, i32),
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            heart_rate_base: (65, 85),
            heart_rate_wobble: 2.0,
            glucose_center: 90.0,
            glucose_spread: 10.0,
            // Device firmware reports Celsius; the engine's temperature
            // baseline is Fahrenheit. Kept as the device behaves.
            temperature_center_c: 36.5,
            temperature_spread_c: 0.5,
            stress_range: (15, 35),
        }
    }
}

/// Emits one [`TelemetrySample`] per tick from the configured distributions.
#[derive(Debug)]
pub struct VitalsSimulator<R: Rng> {
    config: SimulatorConfig,
    rng: R,
}

impl<R: Rng> VitalsSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(SimulatorConfig::default(), rng)
    }

    pub fn with_config(config: SimulatorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Generate the next tick's readings, rounded to one decimal as the
    /// device reports them.
    pub fn tick(&mut self) -> TelemetrySample {
        let c = &self.config;
        let heart_rate = self.rng.gen_range(c.heart_rate_base.0..=c.heart_rate_base.1) as f64
            + self.rng.gen_range(-c.heart_rate_wobble..=c.heart_rate_wobble);
        let glucose =
            c.glucose_center + c.glucose_spread * self.rng.gen_range(-1.0..=1.0);
        let temperature = c.temperature_center_c
            + c.temperature_spread_c * self.rng.gen_range(-1.0..=1.0);
        let stress = self.rng.gen_range(c.stress_range.0..=c.stress_range.1) as f64;

        let mut sample = TelemetrySample::new();
        sample
            .insert(Metric::HeartRate, round1(heart_rate))
            .insert(Metric::Glucose, round1(glucose))
            .insert(Metric::Temperature, round1(temperature))
            .insert(Metric::StressLevel, stress);
        sample
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
