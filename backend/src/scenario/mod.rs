//! Scenario definitions
//!
//! A scenario is pure data: the initial patient presentation plus the
//! catalog of available actions. It is loaded once at session start into
//! both the physiology engine (initial state) and the session orchestrator
//! (game state + catalog).
//!
//! Initial-state specs are partial: every field is optional and
//! merged over built-in defaults field by field, so incomplete scenario data
//! never produces undefined state. The catalog is validated at load time so
//! declaration mistakes fail fast instead of silently no-op-ing.

pub mod hyperkalemia;

use crate::models::action::ActionSpec;
use crate::models::labs::LabPanel;
use crate::models::physiology::Physiology;
use crate::models::vitals::{BloodPressure, Vitals};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by scenario load-time validation
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("Scenario must declare at least one action")]
    EmptyCatalog,

    #[error("Duplicate action id: {0}")]
    DuplicateActionId(String),

    #[error("Action {0} has an empty label")]
    EmptyLabel(String),
}

/// Partial vitals supplied by a scenario; missing fields take defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalsSpec {
    pub hr: Option<i32>,
    /// Composite "sys/dia" form, as scenario files write it
    pub bp: Option<String>,
    pub spo2: Option<i32>,
    pub resp: Option<f64>,
    pub temp: Option<f64>,
}

impl VitalsSpec {
    /// Merge over the built-in defaults, field by field
    pub fn merge_defaults(&self) -> Vitals {
        let defaults = Vitals::default();
        Vitals {
            hr: self.hr.unwrap_or(defaults.hr),
            bp: self
                .bp
                .as_deref()
                .map(BloodPressure::parse)
                .unwrap_or(defaults.bp),
            spo2: self.spo2.unwrap_or(defaults.spo2),
            resp: self.resp.unwrap_or(defaults.resp),
            temp: self.temp.unwrap_or(defaults.temp),
        }
    }
}

/// Partial lab panel supplied by a scenario
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabsSpec {
    pub k: Option<f64>,
    pub mg: Option<f64>,
    pub ph: Option<f64>,
    pub glucose: Option<f64>,
    pub creatinine: Option<f64>,
}

impl LabsSpec {
    /// Merge over the built-in defaults, field by field
    pub fn merge_defaults(&self) -> LabPanel {
        let defaults = LabPanel::default();
        LabPanel {
            k: self.k.unwrap_or(defaults.k),
            mg: self.mg.unwrap_or(defaults.mg),
            ph: self.ph.unwrap_or(defaults.ph),
            glucose: self.glucose.unwrap_or(defaults.glucose),
            creatinine: self.creatinine.unwrap_or(defaults.creatinine),
        }
    }
}

/// Partial physiology modifiers supplied by a scenario
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhysiologySpec {
    pub membrane_stability: Option<i32>,
    pub fluid_balance_ml: Option<i32>,
    pub k_shift_rate: Option<f64>,
}

impl PhysiologySpec {
    /// Merge over the built-in defaults, field by field
    pub fn merge_defaults(&self) -> Physiology {
        let defaults = Physiology::default();
        Physiology {
            membrane_stability: self.membrane_stability.unwrap_or(defaults.membrane_stability),
            fluid_balance_ml: self.fluid_balance_ml.unwrap_or(defaults.fluid_balance_ml),
            k_shift_rate: self.k_shift_rate.unwrap_or(defaults.k_shift_rate),
        }
    }
}

/// Initial patient presentation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitialState {
    pub patient_name: String,
    pub age: u32,
    pub weight: String,
    pub history: String,
    /// Free-text rhythm description shown on the monitor header
    pub rhythm: String,
    pub vitals: VitalsSpec,
    pub labs: LabsSpec,
    pub physiology: PhysiologySpec,
}

/// A complete case definition: initial state + action catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub initial: InitialState,
    pub actions: Vec<ActionSpec>,
}

impl Scenario {
    /// Validate the catalog; called at session construction
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.actions.is_empty() {
            return Err(ScenarioError::EmptyCatalog);
        }

        let mut ids = std::collections::HashSet::new();
        for action in &self.actions {
            if !ids.insert(action.id.as_str()) {
                return Err(ScenarioError::DuplicateActionId(action.id.clone()));
            }
            if action.label.is_empty() {
                return Err(ScenarioError::EmptyLabel(action.id.clone()));
            }
        }

        Ok(())
    }

    /// Look up an action by id
    pub fn action(&self, id: &str) -> Option<&ActionSpec> {
        self.actions.iter().find(|a| a.id == id)
    }
}
