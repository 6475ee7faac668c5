//! Session orchestration
//!
//! Coordinates the physiology engine with session/game bookkeeping:
//!
//! - **session**: action validation, cost accounting, telemetry, lab
//!   snapshots and the append-only event log
//! - **view**: the composed read model the presentation layer consumes
//! - **runner**: the owned 1 Hz background task driving the autonomous tick

pub mod runner;
pub mod session;
pub mod view;
