//! Serum lab panel
//!
//! Two copies of this struct coexist with different lifecycles:
//!
//! - the engine's *live* panel, updated continuously by the autonomous tick
//!   and by actions;
//! - the session's *reported* panel, a point-in-time copy taken only when a
//!   lab-draw action executes. That copy is what the display shows, and it
//!   never changes until the next draw.

use serde::{Deserialize, Serialize};

/// Lower clamp for serum potassium (mmol/L)
pub const K_MIN: f64 = 2.0;

/// Upper clamp for serum potassium (mmol/L)
pub const K_MAX: f64 = 12.0;

/// Serum lab values
///
/// Defaults describe the built-in severe-hyperkalemia presentation; scenario
/// data overrides them field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabPanel {
    /// Serum potassium (mmol/L)
    pub k: f64,

    /// Serum magnesium (mg/dL)
    pub mg: f64,

    /// Arterial pH
    pub ph: f64,

    /// Serum glucose (mg/dL)
    pub glucose: f64,

    /// Serum creatinine (mg/dL)
    pub creatinine: f64,
}

impl LabPanel {
    /// Clamp potassium to the simulation range [2.0, 12.0]
    pub fn clamp_k(&mut self) {
        self.k = self.k.clamp(K_MIN, K_MAX);
    }

    /// Round potassium to 2 decimals for stable display
    pub fn round_k(&mut self) {
        self.k = (self.k * 100.0).round() / 100.0;
    }
}

impl Default for LabPanel {
    fn default() -> Self {
        Self {
            k: 7.8,
            mg: 2.0,
            ph: 7.25,
            glucose: 110.0,
            creatinine: 1.0,
        }
    }
}
