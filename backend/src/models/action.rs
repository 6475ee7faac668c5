//! Clinical action catalog entries
//!
//! Actions are immutable declarative records looked up by id when executed.
//! Every behavioral hook is carried on the declaration itself (the
//! physiologic effect, the milestone telemetry tag, the status flag it
//! grants, and the single-use rule), so there is a single source of truth
//! and no string sniffing at execution time.

use serde::{Deserialize, Serialize};

/// Tab/category an action belongs to
///
/// Serialized with the display names the scenario format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCategory {
    #[serde(rename = "Exames")]
    Exams,
    #[serde(rename = "Procedimentos")]
    Procedures,
    #[serde(rename = "Drogas")]
    Drugs,
    #[serde(rename = "Fluidos")]
    Fluids,
}

/// Closed enumeration of effects the physiology engine has a model for
///
/// Actions without one of these tags (pure logistics, drugs with no
/// modeled pharmacodynamics) never reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysiologicEffect {
    /// Calcium gluconate: membrane stability to 100
    StabilizeMembrane,
    /// Insulin + glucose: potassium shift rate to -0.05/min (reset, not
    /// stacked, on re-trigger)
    StartPolarizingTherapy,
    /// Crystalloid bolus: BP response + 500 ml fluid balance
    FluidBolus,
    /// Hemodialysis: potassium to 4.0, shift rate to 0
    PerformDialysis,
}

/// Milestone families tracked by first-occurrence telemetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Milestone {
    Monitor,
    Ecg,
    IvAccess,
    Calcium,
    /// Potassium-lowering treatment (polarizing solution or salbutamol)
    Treatment,
    Dialysis,
}

/// Status flag irreversibly granted by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusGrant {
    Monitored,
    IvAccess,
    Foley,
}

/// Immutable action catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// Unique id, e.g. "drug_calcium"
    pub id: String,

    /// Display label
    pub label: String,

    /// Catalog tab
    pub category: ActionCategory,

    /// Icon tag for the presentation layer
    pub icon: String,

    /// Time cost in minutes, added to the session's cost clock
    pub cost: u32,

    /// Requires prior venous access
    pub requires_iv: bool,

    /// Overwrites the reported labs with a fresh snapshot of live labs
    pub triggers_labs: bool,

    /// Puts the patient on the monitor as a side effect
    pub triggers_vitals: bool,

    /// Permanently disabled after the first successful execution
    pub single_use: bool,

    /// Physiologic effect, if the engine models one
    pub effect: Option<PhysiologicEffect>,

    /// Milestone family for first-occurrence telemetry
    pub milestone: Option<Milestone>,

    /// Status flag this action establishes
    pub grants: Option<StatusGrant>,

    /// Fixed narrative appended to the log on success
    pub result_log: String,
}

impl ActionSpec {
    /// Create a minimal action; behavioral hooks default to off
    pub fn new(id: &str, label: &str, category: ActionCategory, icon: &str, cost: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            category,
            icon: icon.to_string(),
            cost,
            requires_iv: false,
            triggers_labs: false,
            triggers_vitals: false,
            single_use: false,
            effect: None,
            milestone: None,
            grants: None,
            result_log: String::new(),
        }
    }

    pub fn iv_required(mut self) -> Self {
        self.requires_iv = true;
        self
    }

    pub fn draws_labs(mut self) -> Self {
        self.triggers_labs = true;
        self
    }

    pub fn starts_monitoring(mut self) -> Self {
        self.triggers_vitals = true;
        self
    }

    pub fn once(mut self) -> Self {
        self.single_use = true;
        self
    }

    pub fn with_effect(mut self, effect: PhysiologicEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn with_milestone(mut self, milestone: Milestone) -> Self {
        self.milestone = Some(milestone);
        self
    }

    pub fn granting(mut self, grant: StatusGrant) -> Self {
        self.grants = Some(grant);
        self
    }

    pub fn with_result_log(mut self, text: &str) -> Self {
        self.result_log = text.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_off() {
        let action = ActionSpec::new("exam_ecg", "Solicitar ECG", ActionCategory::Exams, "ecg", 7);

        assert_eq!(action.id, "exam_ecg");
        assert_eq!(action.cost, 7);
        assert!(!action.requires_iv);
        assert!(!action.single_use);
        assert!(action.effect.is_none());
        assert!(action.milestone.is_none());
    }

    #[test]
    fn test_builder_chains() {
        let action = ActionSpec::new(
            "drug_calcium",
            "Gluconato de Cálcio 10% (10ml)",
            ActionCategory::Drugs,
            "syringe",
            5,
        )
        .iv_required()
        .with_effect(PhysiologicEffect::StabilizeMembrane)
        .with_milestone(Milestone::Calcium)
        .with_result_log("Infusão iniciada.");

        assert!(action.requires_iv);
        assert_eq!(action.effect, Some(PhysiologicEffect::StabilizeMembrane));
        assert_eq!(action.milestone, Some(Milestone::Calcium));
        assert_eq!(action.result_log, "Infusão iniciada.");
    }

    #[test]
    fn test_category_serializes_to_display_names() {
        let json = serde_json::to_string(&ActionCategory::Exams).unwrap();
        assert_eq!(json, "\"Exames\"");
        let json = serde_json::to_string(&ActionCategory::Fluids).unwrap();
        assert_eq!(json, "\"Fluidos\"");
    }
}
