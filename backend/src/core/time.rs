//! Cost-time management for a session
//!
//! The session measures elapsed time in *cost minutes*: every accepted action
//! adds its fixed time cost to the counter. This is in-fiction time, fully
//! decoupled from the wall-clock seconds that drive the physiology tick.

use serde::{Deserialize, Serialize};

/// Accumulates cost-based elapsed minutes for a session
///
/// The counter is strictly additive and monotonic: it only moves forward,
/// and only when an action is accepted.
///
/// # Example
/// ```
/// use patient_simulator_core::CostClock;
///
/// let mut clock = CostClock::new();
/// assert_eq!(clock.elapsed_minutes(), 0);
///
/// clock.advance(7);
/// clock.advance(60);
/// assert_eq!(clock.elapsed_minutes(), 67);
/// assert_eq!(clock.label(), "01:07");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostClock {
    /// Total cost minutes elapsed since session start
    elapsed_minutes: u32,
}

impl CostClock {
    /// Create a new clock at 00:00
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by an action's cost in minutes
    pub fn advance(&mut self, minutes: u32) {
        self.elapsed_minutes += minutes;
    }

    /// Total cost minutes elapsed
    pub fn elapsed_minutes(&self) -> u32 {
        self.elapsed_minutes
    }

    /// Format the current elapsed time as an `HH:MM` label
    pub fn label(&self) -> String {
        Self::format_minutes(self.elapsed_minutes)
    }

    /// Format an arbitrary minute count as an `HH:MM` label
    pub fn format_minutes(minutes: u32) -> String {
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }
}
