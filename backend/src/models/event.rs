//! Session event log
//!
//! Append-only record of everything that happened in a session, consumed
//! read-only by the display. Entries are never removed or edited, and they
//! render in the order they were appended: user actions in acceptance order,
//! autonomous engine narratives interleaved by real occurrence time.
//!
//! # Entry Shape
//!
//! `{ time: string, text: string, consequence: string, type: info|success|error }`
//!
//! The time field is either the `HH:MM` cost-time at which a user action was
//! confirmed, or the `"AUTO"` sentinel for autonomous engine events.

use serde::{Deserialize, Serialize};

/// Time label for autonomous engine events
pub const AUTO_TIME_LABEL: &str = "AUTO";

/// Fixed consequence line for autonomous engine narratives
pub const AUTO_CONSEQUENCE: &str = "Alteração fisiológica detectada";

/// Display styling tag for a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Success,
    Error,
}

/// One immutable line of the session log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// `HH:MM` cost-time label, or `"AUTO"` for engine events
    pub time: String,

    /// Headline text
    pub text: String,

    /// Narrative/consequence line
    pub consequence: String,

    /// Display styling tag
    #[serde(rename = "type")]
    pub kind: LogKind,
}

impl LogEntry {
    /// Success entry for an accepted user action
    pub fn success(time: String, text: String, consequence: String) -> Self {
        Self {
            time,
            text,
            consequence,
            kind: LogKind::Success,
        }
    }

    /// Error entry for a rejected user action
    pub fn error(time: String, text: String, consequence: String) -> Self {
        Self {
            time,
            text,
            consequence,
            kind: LogKind::Error,
        }
    }

    /// Info entry for an autonomous engine narrative
    pub fn auto(text: String) -> Self {
        Self {
            time: AUTO_TIME_LABEL.to_string(),
            text,
            consequence: AUTO_CONSEQUENCE.to_string(),
            kind: LogKind::Info,
        }
    }
}

/// Append-only event log.
///
/// A thin wrapper around `Vec<LogEntry>` with convenience queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in append order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Entries of a specific kind
    pub fn entries_of_kind(&self, kind: LogKind) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.kind == kind).collect()
    }
}
