//! Vital signs model
//!
//! Vitals are mutated only by the physiology engine and read by everything
//! downstream. Blood pressure is displayed as a composite "sys/dia" value
//! but its two components are mutated independently.
//!
//! # Clamp Invariants
//!
//! - Heart rate never drops below 20 bpm
//! - SpO2 never drops below 50%
//! - Respiratory rate never exceeds 40 rpm

use serde::{Deserialize, Serialize};
use std::fmt;

/// Floor for bradycardic deterioration (bpm)
pub const HR_FLOOR: i32 = 20;

/// Floor for desaturation under fluid overload (%)
pub const SPO2_FLOOR: i32 = 50;

/// Cap for reflex tachypnea (rpm)
pub const RESP_CAP: f64 = 40.0;

/// Systolic cap for fluid bolus response (mmHg)
pub const SYS_CAP: i32 = 140;

/// Diastolic cap for fluid bolus response (mmHg)
pub const DIA_CAP: i32 = 90;

/// Composite blood pressure value (mmHg)
///
/// Scenario data supplies blood pressure as a "sys/dia" string; the two
/// components are stored and mutated separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub sys: i32,
    pub dia: i32,
}

impl BloodPressure {
    pub fn new(sys: i32, dia: i32) -> Self {
        Self { sys, dia }
    }

    /// Parse a composite "sys/dia" string, falling back to 90/60 for any
    /// missing or malformed component (partial scenario data is valid input)
    pub fn parse(text: &str) -> Self {
        let mut parts = text.splitn(2, '/');
        let sys = parts
            .next()
            .and_then(|p| p.trim().parse::<i32>().ok())
            .unwrap_or(90);
        let dia = parts
            .next()
            .and_then(|p| p.trim().parse::<i32>().ok())
            .unwrap_or(60);
        Self { sys, dia }
    }

    /// Raise both components by the fluid-bolus increments, capped at
    /// 140/90 mmHg
    pub fn apply_fluid_response(&mut self) {
        self.sys = (self.sys + 10).min(SYS_CAP);
        self.dia = (self.dia + 5).min(DIA_CAP);
    }
}

impl Default for BloodPressure {
    fn default() -> Self {
        Self { sys: 90, dia: 60 }
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sys, self.dia)
    }
}

/// Current vital signs
///
/// Defaults describe the built-in severe-hyperkalemia presentation; scenario
/// data overrides them field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Heart rate (beats/min)
    pub hr: i32,

    /// Blood pressure (mmHg)
    pub bp: BloodPressure,

    /// Oxygen saturation (%, 0-100)
    pub spo2: i32,

    /// Respiratory rate (breaths/min); f64 because the tachypnea rule adds
    /// fractional increments, rounded back to a whole number after each tick
    pub resp: f64,

    /// Temperature (degrees C)
    pub temp: f64,
}

impl Vitals {
    /// Drop heart rate by 1 bpm, floored at 20 (unshielded hyperkalemia)
    pub fn degrade_hr(&mut self) {
        self.hr = (self.hr - 1).max(HR_FLOOR);
    }

    /// Pulmonary-edema decompensation: SpO2 -1 floored at 50, resp +0.1
    /// capped at 40
    pub fn decompensate_pulmonary(&mut self) {
        self.spo2 = (self.spo2 - 1).max(SPO2_FLOOR);
        self.resp = (self.resp + 0.1).min(RESP_CAP);
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hr: 45,
            bp: BloodPressure::default(),
            spo2: 96,
            resp: 22.0,
            temp: 36.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bp() {
        assert_eq!(BloodPressure::parse("120/80"), BloodPressure::new(120, 80));
        assert_eq!(BloodPressure::parse("90 / 60"), BloodPressure::new(90, 60));
    }

    #[test]
    fn test_parse_bp_malformed_falls_back() {
        assert_eq!(BloodPressure::parse(""), BloodPressure::new(90, 60));
        assert_eq!(BloodPressure::parse("abc"), BloodPressure::new(90, 60));
        assert_eq!(BloodPressure::parse("110"), BloodPressure::new(110, 60));
        assert_eq!(BloodPressure::parse("/70"), BloodPressure::new(90, 70));
    }

    #[test]
    fn test_bp_display() {
        assert_eq!(BloodPressure::new(90, 60).to_string(), "90/60");
    }

    #[test]
    fn test_fluid_response_caps() {
        let mut bp = BloodPressure::new(135, 88);
        bp.apply_fluid_response();
        assert_eq!(bp, BloodPressure::new(140, 90));

        // Repeated boluses stay at the cap
        bp.apply_fluid_response();
        assert_eq!(bp, BloodPressure::new(140, 90));
    }

    #[test]
    fn test_degrade_hr_floor() {
        let mut vitals = Vitals {
            hr: 21,
            ..Vitals::default()
        };
        vitals.degrade_hr();
        assert_eq!(vitals.hr, 20);
        vitals.degrade_hr();
        assert_eq!(vitals.hr, 20);
    }

    #[test]
    fn test_pulmonary_decompensation_limits() {
        let mut vitals = Vitals {
            spo2: 51,
            resp: 39.95,
            ..Vitals::default()
        };
        vitals.decompensate_pulmonary();
        assert_eq!(vitals.spo2, 50);
        assert!(vitals.resp <= RESP_CAP);

        vitals.decompensate_pulmonary();
        assert_eq!(vitals.spo2, 50);
        assert!(vitals.resp <= RESP_CAP);
    }
}
