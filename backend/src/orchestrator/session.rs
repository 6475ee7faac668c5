//! Session state and the action-resolution protocol
//!
//! A [`Session`] owns one patient engine plus everything that is *not* in
//! the body: the cost clock, executed-action bookkeeping, status flags,
//! milestone telemetry, the reported-lab snapshot and the event log.
//!
//! All state changes flow through [`Session::execute_action`] (user actions)
//! and [`Session::tick`] (autonomous physiology). Errors never cross the
//! core/presentation boundary as panics: expected user-facing conditions
//! surface as error-kind log entries and a rejected [`ActionOutcome`];
//! programmer errors (unknown action id) surface as [`SessionError`] with no
//! state mutated.

use crate::core::time::CostClock;
use crate::engine::{PatientEngine, TickReport};
use crate::models::action::{Milestone, StatusGrant};
use crate::models::event::{EventLog, LogEntry};
use crate::models::labs::LabPanel;
use crate::orchestrator::view::{PhysiologyView, SessionView};
use crate::scenario::{Scenario, ScenarioError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced to the caller of session operations
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    /// Action id not present in the scenario catalog. Programmer error:
    /// the operation aborts with no state change.
    #[error("Unknown action id: {0}")]
    UnknownAction(String),

    /// Scenario failed load-time validation
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

/// Irreversible session status flags; no action clears a flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags {
    pub is_monitored: bool,
    pub has_iv_access: bool,
    pub has_foley: bool,
}

/// First-occurrence milestone timestamps (cost minutes) plus error counters
///
/// Each `*_min` field records the cost-time at which the first action of
/// that milestone family completed; later matches never overwrite it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Telemetry {
    pub monitor_min: Option<u32>,
    pub ecg_min: Option<u32>,
    pub access_min: Option<u32>,
    pub calcium_min: Option<u32>,
    pub treatment_min: Option<u32>,
    pub dialysis_requested: bool,

    /// Count of prerequisite violations (missing IV access)
    pub fatal_errors: u32,
}

/// Outcome of an `execute_action` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Action accepted; all side effects applied
    Performed,

    /// Action declares an IV requirement and venous access is not
    /// established. An error log entry was appended and the fatal-error
    /// counter incremented; nothing else changed.
    RejectedNoIvAccess,

    /// Single-use action already executed. Nothing changed; no cost applied.
    RejectedSingleUse,
}

/// Per-call overrides for dose-specific action variants
#[derive(Debug, Clone, Default)]
pub struct ActionOverrides {
    /// Replaces the catalog label in the success log entry
    pub label: Option<String>,

    /// Replaces the catalog time cost
    pub cost: Option<u32>,
}

/// One running simulation session
///
/// Each session owns an independent engine and orchestrator state; nothing
/// is shared across sessions.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    scenario: Scenario,
    engine: PatientEngine,
    clock: CostClock,
    executed: Vec<String>,
    status: StatusFlags,
    telemetry: Telemetry,

    /// Point-in-time lab snapshot taken on lab-draw actions; `None` until
    /// the first draw. This is what the display shows, never live labs.
    reported_labs: Option<LabPanel>,

    log: EventLog,
}

impl Session {
    /// Create a session from a scenario definition
    ///
    /// Validates the catalog and merges the partial initial state over
    /// built-in defaults, field by field.
    pub fn new(scenario: Scenario) -> Result<Self, SessionError> {
        scenario.validate()?;

        let vitals = scenario.initial.vitals.merge_defaults();
        let labs = scenario.initial.labs.merge_defaults();
        let physiology = scenario.initial.physiology.merge_defaults();

        Ok(Self {
            id: Uuid::new_v4(),
            engine: PatientEngine::new(vitals, labs, physiology),
            scenario,
            clock: CostClock::new(),
            executed: Vec::new(),
            status: StatusFlags::default(),
            telemetry: Telemetry::default(),
            reported_labs: None,
            log: EventLog::new(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Session identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The owned physiology engine (live state)
    pub fn engine(&self) -> &PatientEngine {
        &self.engine
    }

    /// The scenario this session runs
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Cost minutes elapsed
    pub fn time_elapsed(&self) -> u32 {
        self.clock.elapsed_minutes()
    }

    /// Current status flags
    pub fn status(&self) -> StatusFlags {
        self.status
    }

    /// Milestone telemetry
    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Executed action ids in acceptance order
    pub fn executed_action_ids(&self) -> &[String] {
        &self.executed
    }

    /// The reported (snapshotted) labs, if any draw has happened
    pub fn reported_labs(&self) -> Option<&LabPanel> {
        self.reported_labs.as_ref()
    }

    /// The append-only event log
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    // ========================================================================
    // Autonomous Tick
    // ========================================================================

    /// Advance the physiology by one wall-clock second
    ///
    /// Called by the session runner; atomic with respect to
    /// `execute_action` because both run under the session's lock.
    pub fn tick(&mut self) -> TickReport {
        self.engine.tick()
    }

    // ========================================================================
    // Action Execution
    // ========================================================================

    /// Validate and execute a clinician action
    ///
    /// The only validation gates are the catalog lookup, the single-use rule
    /// and the IV-access prerequisite; every other action succeeds
    /// unconditionally. On acceptance the declared physiologic effect (if
    /// any) is applied to the engine, the (possibly overridden) cost is
    /// added to the clock, status flags and telemetry are updated, a lab
    /// snapshot is taken if the action draws labs, and exactly one
    /// success-kind log entry is appended.
    pub fn execute_action(
        &mut self,
        action_id: &str,
        overrides: Option<ActionOverrides>,
    ) -> Result<ActionOutcome, SessionError> {
        let action = self
            .scenario
            .action(action_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownAction(action_id.to_string()))?;

        let overrides = overrides.unwrap_or_default();
        let label = overrides.label.unwrap_or_else(|| action.label.clone());

        // Single-use gate: a second execution is rejected outright, with no
        // log entry and no cost (the display disables the button; this guard
        // backs it up for programmatic callers).
        if action.single_use && self.executed.iter().any(|id| id == &action.id) {
            return Ok(ActionOutcome::RejectedSingleUse);
        }

        // Prerequisite gate: IV access
        if action.requires_iv && !self.status.has_iv_access {
            self.log.append(LogEntry::error(
                self.clock.label(),
                format!("Falha: {}", label),
                "Requer acesso venoso prévio.".to_string(),
            ));
            self.telemetry.fatal_errors += 1;
            return Ok(ActionOutcome::RejectedNoIvAccess);
        }

        // Physiologic effect; the engine's narrative lands in the log as an
        // autonomous entry before the action's own success entry
        if let Some(effect) = action.effect {
            let narrative = self.engine.apply_effect(effect);
            self.log.append(LogEntry::auto(narrative));
        }

        // Cost accounting (overridden cost supports dose variants)
        let cost = overrides.cost.unwrap_or(action.cost);
        self.clock.advance(cost);

        // Status flags: irreversibly set, never cleared
        match action.grants {
            Some(StatusGrant::Monitored) => self.status.is_monitored = true,
            Some(StatusGrant::IvAccess) => self.status.has_iv_access = true,
            Some(StatusGrant::Foley) => self.status.has_foley = true,
            None => {}
        }
        if action.triggers_vitals {
            self.status.is_monitored = true;
        }

        self.executed.push(action.id.clone());

        // First-occurrence telemetry
        if let Some(milestone) = action.milestone {
            self.record_milestone(milestone);
        }

        // Lab snapshot: always overwrites, so repeat draws refresh the report
        if action.triggers_labs {
            self.reported_labs = Some(self.engine.labs().clone());
        }

        self.log.append(LogEntry::success(
            self.clock.label(),
            label,
            if action.result_log.is_empty() {
                "Ação realizada.".to_string()
            } else {
                action.result_log.clone()
            },
        ));

        Ok(ActionOutcome::Performed)
    }

    /// Record a milestone timestamp if its family hasn't fired yet
    fn record_milestone(&mut self, milestone: Milestone) {
        let elapsed = self.clock.elapsed_minutes();
        let slot = match milestone {
            Milestone::Monitor => &mut self.telemetry.monitor_min,
            Milestone::Ecg => &mut self.telemetry.ecg_min,
            Milestone::IvAccess => &mut self.telemetry.access_min,
            Milestone::Calcium => &mut self.telemetry.calcium_min,
            Milestone::Treatment => &mut self.telemetry.treatment_min,
            Milestone::Dialysis => {
                self.telemetry.dialysis_requested = true;
                return;
            }
        };
        if slot.is_none() {
            *slot = Some(elapsed);
        }
    }

    // ========================================================================
    // Composed View
    // ========================================================================

    /// Compose the externally-visible session view
    ///
    /// Merges game-state fields with the engine's live vitals and physiology
    /// (overlaying a freshly derived ECG stage) but uses the *snapshotted*
    /// reported labs. Rebuilt on every call; vitals change every second
    /// independent of user action, so this is never cached.
    pub fn view(&self) -> SessionView {
        let initial = &self.scenario.initial;
        let physiology = self.engine.physiology();

        SessionView {
            session_id: self.id,
            patient_name: initial.patient_name.clone(),
            age: initial.age,
            weight: initial.weight.clone(),
            history: initial.history.clone(),
            rhythm: initial.rhythm.clone(),
            vitals: self.engine.vitals().clone(),
            labs: self.reported_labs.clone(),
            status: self.status,
            time_elapsed: self.clock.elapsed_minutes(),
            executed_action_ids: self.executed.clone(),
            physiology: PhysiologyView {
                membrane_stability: physiology.membrane_stability,
                fluid_balance_ml: physiology.fluid_balance_ml,
                k_shift_rate: physiology.k_shift_rate,
                ecg_stage: self.engine.ecg_stage(),
            },
        }
    }
}
