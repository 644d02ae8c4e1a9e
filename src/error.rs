// ============================================================================
// ERRORS - Failure taxonomy shared by services and view-models
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong between a click and the backend answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Request never completed (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {text}")]
    Http { status: u16, text: String },

    /// Body was not the JSON shape we expected
    #[error("Parse error: {0}")]
    Parse(String),

    /// Backend reported a logical failure; message is shown verbatim
    #[error("{0}")]
    Backend(String),

    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    /// Transport-level failures (taxonomy "a")
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Http { .. } | AppError::Parse(_))
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(format!("{:?}", value))
    }
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_verbatim() {
        let err = AppError::Backend("Mapping failed: No matching data elements found.".to_string());
        assert_eq!(err.to_string(), "Mapping failed: No matching data elements found.");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_classification() {
        assert!(AppError::Network("offline".to_string()).is_transport());
        assert!(AppError::Http { status: 502, text: "Bad Gateway".to_string() }.is_transport());
        assert!(AppError::Parse("eof".to_string()).is_transport());
        assert!(!AppError::Validation("Credentials required.".to_string()).is_transport());
    }
}
