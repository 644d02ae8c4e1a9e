use serde::{Deserialize, Serialize};

/// One row of DHIS2 sync history, as served by `GET /ai/sync/logs`.
///
/// `timestamp` and `period` are display values owned by the backend; the UI
/// never parses or compares them. Extra fields the backend stores alongside
/// (e.g. `status`) are ignored on deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: String,
    pub report: String,
    pub period: String,
    pub count: u64,
}

impl LogRecord {
    /// Line shown next to the history toggle for the latest sync
    pub fn summary_line(&self) -> String {
        format!(
            "Last Sync: {} | Period: {} | {} Records",
            self.timestamp, self.period, self.count
        )
    }
}
