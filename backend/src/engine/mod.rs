//! Patient physiology engine
//!
//! Owns the continuously-ticking patient state (vitals, labs, physiology
//! modifiers). The engine is driven by two entry points:
//!
//! - [`PatientEngine::tick`], invoked once per wall-clock second for the
//!   lifetime of an active session (see `orchestrator::runner`);
//! - [`PatientEngine::apply_effect`], discrete mutations resolved from
//!   clinician actions by the session orchestrator.
//!
//! Per tick, effects are applied in a fixed order:
//!
//! ```text
//! On 60-second boundaries (once per simulated minute):
//! 1. Basal potassium drift (+0.02)
//! 2. Shift-rate adjustment (polarizing therapy)
//! 3. Clamp potassium to [2.0, 12.0]
//! 4. Membrane-stability decay (-5, floored at 0)
//! Every second:
//! 5. Bradycardic deterioration (unshielded hyperkalemia, every 10th second)
//! 6. Pulmonary-edema decompensation (fluid balance > 1000 ml, sticky)
//! 7. Display rounding (potassium to 2 decimals, resp to integer)
//! ```
//!
//! The ECG stage is derived from this state on every read; see [`ecg`].

pub mod ecg;

use crate::models::action::PhysiologicEffect;
use crate::models::labs::LabPanel;
use crate::models::physiology::{Physiology, FLUID_BOLUS_ML, POLARIZING_SHIFT_RATE};
use crate::models::vitals::Vitals;

/// Basal potassium rise per simulated minute (mmol/L)
pub const BASAL_K_DRIFT_PER_MINUTE: f64 = 0.02;

/// Wall-clock seconds per simulated minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Interval between bradycardic hr drops (seconds)
const HR_DROP_INTERVAL_SECONDS: u64 = 10;

/// Potassium level above which unshielded bradycardia sets in (mmol/L)
const BRADYCARDIA_K_THRESHOLD: f64 = 7.0;

/// Glucose level below which polarizing therapy warns of hypoglycemia (mg/dL)
const HYPOGLYCEMIA_WARNING_THRESHOLD: f64 = 70.0;

/// Report for a single engine tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Wall-clock second this tick landed on (1-based)
    pub second: u64,

    /// Whether this tick was a simulated-minute boundary
    pub minute_boundary: bool,
}

/// The continuously-ticking patient state
///
/// Opaque to callers except through `tick`, `apply_effect` and the read
/// accessors. Created once per session from the merged scenario initial
/// state and torn down with it.
#[derive(Debug, Clone)]
pub struct PatientEngine {
    vitals: Vitals,
    labs: LabPanel,
    physiology: Physiology,

    /// Wall-clock seconds ticked since session start
    elapsed_seconds: u64,
}

impl PatientEngine {
    /// Create an engine from fully-merged initial state
    pub fn new(vitals: Vitals, labs: LabPanel, physiology: Physiology) -> Self {
        Self {
            vitals,
            labs,
            physiology,
            elapsed_seconds: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current vital signs (live)
    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Current lab values (live; the session snapshots these on lab draws)
    pub fn labs(&self) -> &LabPanel {
        &self.labs
    }

    /// Current physiology modifiers
    pub fn physiology(&self) -> &Physiology {
        &self.physiology
    }

    /// Wall-clock seconds ticked so far
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Derive the current ECG stage from live labs and physiology
    pub fn ecg_stage(&self) -> i8 {
        ecg::ecg_stage(&self.labs, &self.physiology)
    }

    // ========================================================================
    // Autonomous Tick
    // ========================================================================

    /// Advance the patient by one wall-clock second
    ///
    /// Applies drift, decay and the per-second deterioration rules in the
    /// fixed order documented at module level.
    pub fn tick(&mut self) -> TickReport {
        self.elapsed_seconds += 1;
        let seconds = self.elapsed_seconds;
        let minute_boundary = seconds % SECONDS_PER_MINUTE == 0;

        if minute_boundary {
            // 1. Basal rise
            self.labs.k += BASAL_K_DRIFT_PER_MINUTE;

            // 2. Shift-rate adjustment (polarizing therapy effect)
            if self.physiology.k_shift_rate != 0.0 {
                self.labs.k += self.physiology.k_shift_rate;
            }

            // 3. Clamp to the simulation range
            self.labs.clamp_k();

            // 4. Membrane-stability decay
            self.physiology.decay_stability();
        }

        // 5. Bradycardic deterioration from unshielded hyperkalemia
        if self.physiology.membrane_stability == 0
            && self.labs.k > BRADYCARDIA_K_THRESHOLD
            && seconds % HR_DROP_INTERVAL_SECONDS == 0
        {
            self.vitals.degrade_hr();
        }

        // 6. Pulmonary edema. Sticky: fluid balance never decreases, so once
        //    crossed this fires every tick for the rest of the session.
        if self.physiology.is_fluid_overloaded() {
            self.vitals.decompensate_pulmonary();
        }

        // 7. Rounding for stable display
        self.labs.round_k();
        self.vitals.resp = self.vitals.resp.round();

        TickReport {
            second: seconds,
            minute_boundary,
        }
    }

    // ========================================================================
    // Discrete Action Effects
    // ========================================================================

    /// Apply a physiologic effect resolved from a clinician action
    ///
    /// Returns the narrative describing the physiological consequence; this
    /// is the engine's only output channel besides its state. Actions the
    /// engine has no model for never reach this method (their `effect` is
    /// `None` and the orchestrator skips the call).
    pub fn apply_effect(&mut self, effect: PhysiologicEffect) -> String {
        match effect {
            PhysiologicEffect::StabilizeMembrane => {
                self.physiology.membrane_stability = 100;
                "Infusão de Cálcio. Estabilização de membrana iniciada.".to_string()
            }

            PhysiologicEffect::StartPolarizingTherapy => {
                // Re-trigger resets the rate rather than stacking
                self.physiology.k_shift_rate = POLARIZING_SHIFT_RATE;
                let mut narrative =
                    "Solução polarizante em curso. Monitorando glicemia.".to_string();
                if self.labs.glucose < HYPOGLYCEMIA_WARNING_THRESHOLD {
                    narrative.push_str(" ALERTA: Hipo iminente.");
                }
                narrative
            }

            PhysiologicEffect::FluidBolus => {
                self.vitals.bp.apply_fluid_response();
                self.physiology.fluid_balance_ml += FLUID_BOLUS_ML;

                let mut narrative = "Volume infundido.".to_string();
                if self.physiology.is_fluid_overloaded() {
                    narrative.push_str(" Paciente refere dispneia súbita! Estertores audíveis.");
                }
                narrative
            }

            PhysiologicEffect::PerformDialysis => {
                // Hard correction; idempotent
                self.labs.k = 4.0;
                self.physiology.k_shift_rate = 0.0;
                "Sessão de hemodiálise concluída. Distúrbios corrigidos.".to_string()
            }
        }
    }
}
