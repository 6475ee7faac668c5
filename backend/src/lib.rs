//! Patient Simulator Core - Rust Engine
//!
//! Physiology simulation core for a clinical training simulator
//! (hyperkalemia management scenario).
//!
//! # Architecture
//!
//! - **core**: Cost-time management (in-fiction elapsed minutes)
//! - **models**: Domain types (Vitals, LabPanel, Physiology, ActionSpec, EventLog)
//! - **engine**: Continuously-ticking patient physiology + ECG stage derivation
//! - **scenario**: Declarative case definitions and load-time validation
//! - **orchestrator**: Session coordination (action validation, telemetry, log)
//!
//! # Critical Invariants
//!
//! 1. Potassium stays within [2.0, 12.0]; hr >= 20; SpO2 >= 50; resp <= 40
//! 2. Reported labs change only on an explicit lab-draw action
//! 3. The ECG stage is derived on every read, never cached
//! 4. The event log is append-only and single-writer

// Module declarations
pub mod core;
pub mod engine;
pub mod models;
pub mod orchestrator;
pub mod scenario;

// Re-exports for convenience
pub use crate::core::time::CostClock;
pub use engine::{
    ecg::{ecg_stage, waveforms_for_stage, LeadSet},
    PatientEngine, TickReport,
};
pub use models::{
    action::{ActionCategory, ActionSpec, Milestone, PhysiologicEffect, StatusGrant},
    event::{EventLog, LogEntry, LogKind},
    labs::LabPanel,
    physiology::Physiology,
    vitals::{BloodPressure, Vitals},
};
pub use orchestrator::{
    runner::SessionRunner,
    session::{ActionOutcome, ActionOverrides, Session, SessionError, StatusFlags, Telemetry},
    view::{PhysiologyView, SessionView},
};
pub use scenario::{
    hyperkalemia, InitialState, LabsSpec, PhysiologySpec, Scenario, ScenarioError, VitalsSpec,
};
