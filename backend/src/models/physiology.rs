//! Engine-internal physiology modifiers
//!
//! Auxiliary state not directly displayed. Initialized from scenario
//! defaults, mutated continuously by the tick and discretely by actions,
//! alive for the whole session.

use serde::{Deserialize, Serialize};

/// Membrane-stability decay per simulated minute
pub const STABILITY_DECAY_PER_MINUTE: i32 = 5;

/// Fluid balance (ml) above which pulmonary edema sets in
pub const FLUID_OVERLOAD_THRESHOLD_ML: i32 = 1000;

/// Volume added by one fluid bolus (ml)
pub const FLUID_BOLUS_ML: i32 = 500;

/// Potassium shift rate set by polarizing therapy (mmol/L per minute)
pub const POLARIZING_SHIFT_RATE: f64 = -0.05;

/// Auxiliary physiology modifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Physiology {
    /// Membrane-stabilization level, 0-100. Set to 100 by calcium
    /// gluconate, decays 5 units per simulated minute once non-zero
    pub membrane_stability: i32,

    /// Cumulative fluid balance (ml). Monotonically increases with fluid
    /// boluses; above 1000 ml the pulmonary-edema side effect fires every
    /// tick and never clears (no action reduces fluid balance)
    pub fluid_balance_ml: i32,

    /// Signed per-minute potassium shift added to the basal drift. Set by
    /// polarizing therapy, reset to zero by dialysis
    pub k_shift_rate: f64,
}

impl Physiology {
    /// Whether the calcium shield currently hides depolarization-phase
    /// ECG abnormalities
    pub fn is_protected(&self) -> bool {
        self.membrane_stability > 50
    }

    /// Whether fluid overload has crossed the pulmonary-edema threshold
    pub fn is_fluid_overloaded(&self) -> bool {
        self.fluid_balance_ml > FLUID_OVERLOAD_THRESHOLD_ML
    }

    /// Apply one minute of membrane-stability decay, floored at 0
    pub fn decay_stability(&mut self) {
        if self.membrane_stability > 0 {
            self.membrane_stability =
                (self.membrane_stability - STABILITY_DECAY_PER_MINUTE).max(0);
        }
    }
}
