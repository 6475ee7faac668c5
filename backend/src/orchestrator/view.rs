//! Composed session view
//!
//! The read model the presentation layer consumes: game-state fields merged
//! with live vitals/physiology and the snapshotted labs. Recomputed on every
//! access, since vitals and physiology change every second independent of user
//! action, so nothing here is ever cached.

use crate::models::labs::LabPanel;
use crate::models::vitals::Vitals;
use crate::orchestrator::session::StatusFlags;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Physiology modifiers with the derived ECG stage overlaid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysiologyView {
    pub membrane_stability: i32,
    pub fluid_balance_ml: i32,
    pub k_shift_rate: f64,

    /// Freshly derived at view-composition time; valid key into the
    /// waveform table (see `engine::ecg::waveforms_for_stage`)
    pub ecg_stage: i8,
}

/// Everything the display needs, composed per read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: Uuid,

    // Patient header
    pub patient_name: String,
    pub age: u32,
    pub weight: String,
    pub history: String,
    pub rhythm: String,

    /// Live vitals (updated every tick)
    pub vitals: Vitals,

    /// Reported labs: the snapshot from the last lab draw, `None` before
    /// the first draw. Deliberately *not* the live feed.
    pub labs: Option<LabPanel>,

    pub status: StatusFlags,

    /// Cost minutes elapsed (not wall-clock)
    pub time_elapsed: u32,

    /// Executed action ids in acceptance order
    pub executed_action_ids: Vec<String>,

    pub physiology: PhysiologyView,
}
