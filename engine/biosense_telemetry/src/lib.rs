//! Telemetry data model for the BioSense risk engine.
//!
//! Defines the biometric reading set supplied per assessment call, the
//! patient profile, and the clinical baseline defaults substituted for
//! absent readings. Also ships a synthetic vitals generator for exercising
//! downstream consumers without device hardware.

pub mod profile;
pub mod sample;
pub mod simulate;

pub use profile::PatientProfile;
pub use sample::{Metric, TelemetrySample};
pub use simulate::{SimulatorConfig, VitalsSimulator};
