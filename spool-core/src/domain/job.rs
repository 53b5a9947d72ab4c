//! Job domain types

use serde::Serialize;
use std::fmt;

/// A single print job handed out by the lookup endpoint
///
/// Both fields are opaque to the agent. A job lives for exactly one poll
/// cycle: it is built from the lookup response and consumed by one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub data: String,
}

impl Job {
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }
}

/// Status value sent to the status endpoint
///
/// The agent only ever reports success; the print server treats anything
/// other than `Completed` as "retry later".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportStatus {
    Completed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
