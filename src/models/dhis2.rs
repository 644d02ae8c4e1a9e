use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ReportRow;

/// Body of `POST /ai/sync/dhis2`
///
/// Credentials travel once per push and are never persisted client-side.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Dhis2SyncRequest {
    pub data: Vec<ReportRow>,
    pub report_name: String,
    pub period: String,
    pub dhis_user: String,
    pub dhis_pass: String,
}

impl fmt::Debug for Dhis2SyncRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dhis2SyncRequest")
            .field("rows", &self.data.len())
            .field("report_name", &self.report_name)
            .field("period", &self.period)
            .field("dhis_user", &self.dhis_user)
            .field("dhis_pass", &"***")
            .finish()
    }
}

/// Response of `POST /ai/sync/dhis2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dhis2SyncResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl Dhis2SyncResponse {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

/// Monthly DHIS2 reporting period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Period code the backend expects: year followed by the two-digit month
    pub fn code(&self) -> String {
        format!("{}{:02}", self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_code() {
        assert_eq!(Period::new(2026, 3).unwrap().code(), "202603");
        assert_eq!(Period::new(2027, 12).unwrap().code(), "202712");
        assert!(Period::new(2026, 0).is_none());
        assert!(Period::new(2026, 13).is_none());
    }

    #[test]
    fn test_debug_hides_password() {
        let request = Dhis2SyncRequest {
            data: Vec::new(),
            report_name: "DailySummary".to_string(),
            period: "202603".to_string(),
            dhis_user: "admin".to_string(),
            dhis_pass: "district".to_string(),
        };

        let debug = format!("{:?}", request);
        assert!(!debug.contains("district"));
        assert!(debug.contains("admin"));
    }

    #[test]
    fn test_completed_status() {
        let done: Dhis2SyncResponse =
            serde_json::from_str(r#"{"status":"completed","message":"Successfully synced 4 records."}"#).unwrap();
        assert!(done.is_completed());

        let warn: Dhis2SyncResponse = serde_json::from_str(r#"{"status":"warning","message":"0 records"}"#).unwrap();
        assert!(!warn.is_completed());
    }
}
