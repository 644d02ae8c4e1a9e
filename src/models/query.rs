use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Report name used before any question is answered and after "new chat"
pub const DEFAULT_REPORT_NAME: &str = "DailySummary";

/// Report name used when the backend omits `report_name`
pub const FALLBACK_REPORT_NAME: &str = "CustomReport";

/// One result row: column name -> value, in backend column order
pub type ReportRow = Map<String, Value>;

/// Body of `POST /ai/query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub start_date: String,
    pub end_date: String,
}

/// Latest sync of the answered report, if the backend has one on file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSync {
    pub timestamp: String,
    #[serde(default)]
    pub period: Option<String>,
}

/// Response of `POST /ai/query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: Vec<ReportRow>,
    #[serde(default)]
    pub sql: String,
    #[serde(default)]
    pub report_name: Option<String>,
    #[serde(default)]
    pub last_sync: Option<LastSync>,
}

impl QueryResponse {
    pub fn report_name(&self) -> &str {
        match self.report_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => FALLBACK_REPORT_NAME,
        }
    }

    /// Error text when the backend reports a failed query as `[{"Error": ...}]`
    pub fn error_message(&self) -> Option<String> {
        self.data
            .first()
            .and_then(|row| row.get("Error"))
            .map(cell_text)
    }

    /// Column headers, taken from the first row
    pub fn columns(&self) -> Vec<String> {
        self.data
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Status line shown on the answer card
    pub fn sync_badge(&self) -> String {
        match &self.last_sync {
            Some(last) => format!("Last Synced: {}", last.timestamp),
            None => "Not yet synced".to_string(),
        }
    }
}

/// Display text of a single cell (strings unquoted, null as empty)
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_name_fallback() {
        let response: QueryResponse = serde_json::from_str(r#"{"sql":"SELECT 1","data":[]}"#).unwrap();
        assert_eq!(response.report_name(), FALLBACK_REPORT_NAME);

        let response: QueryResponse =
            serde_json::from_str(r#"{"sql":"SELECT 1","data":[],"report_name":"PatientGrid"}"#).unwrap();
        assert_eq!(response.report_name(), "PatientGrid");
    }

    #[test]
    fn test_columns_keep_backend_order() {
        let response: QueryResponse = serde_json::from_str(
            r#"{"sql":"","data":[{"zeta":1,"alpha":"x","mid":null}],"report_name":"DailySummary"}"#,
        )
        .unwrap();

        assert_eq!(response.columns(), vec!["zeta", "alpha", "mid"]);
        assert!(response.error_message().is_none());
    }

    #[test]
    fn test_error_row() {
        let response: QueryResponse =
            serde_json::from_str(r#"{"sql":"DROP x","data":[{"Error":"only SELECT allowed"}],"report_name":"Error"}"#)
                .unwrap();

        assert_eq!(response.error_message().as_deref(), Some("only SELECT allowed"));
    }

    #[test]
    fn test_sync_badge() {
        let mut response: QueryResponse = serde_json::from_str(r#"{"sql":"","data":[]}"#).unwrap();
        assert_eq!(response.sync_badge(), "Not yet synced");

        response.last_sync = Some(LastSync {
            timestamp: "2026-01-05 09:12:00".to_string(),
            period: Some("202512".to_string()),
        });
        assert_eq!(response.sync_badge(), "Last Synced: 2026-01-05 09:12:00");
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&Value::from("Kathmandu")), "Kathmandu");
        assert_eq!(cell_text(&Value::from(42)), "42");
        assert_eq!(cell_text(&Value::from(true)), "true");
    }
}
