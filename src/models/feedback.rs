use serde::{Deserialize, Serialize};

/// Body of `POST /ai/feedback/suggest`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub question: String,
    pub sql: String,
    pub report_name: String,
}

/// Response of `POST /ai/feedback/suggest`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a training suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackStatus {
    /// Stored as a new training example
    Submitted,
    /// The backend already knew this question/SQL pair
    AlreadyTrained,
    /// Any other status; carries the backend message
    Rejected(String),
}

impl From<FeedbackResponse> for FeedbackStatus {
    fn from(response: FeedbackResponse) -> Self {
        match response.status.as_str() {
            "success" => FeedbackStatus::Submitted,
            "exists" => FeedbackStatus::AlreadyTrained,
            _ => FeedbackStatus::Rejected(response.message.unwrap_or_else(|| response.status.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let ok = FeedbackResponse { status: "success".to_string(), message: None };
        assert_eq!(FeedbackStatus::from(ok), FeedbackStatus::Submitted);

        let dup = FeedbackResponse { status: "exists".to_string(), message: Some("dup".to_string()) };
        assert_eq!(FeedbackStatus::from(dup), FeedbackStatus::AlreadyTrained);

        let err = FeedbackResponse { status: "error".to_string(), message: Some("db locked".to_string()) };
        assert_eq!(FeedbackStatus::from(err), FeedbackStatus::Rejected("db locked".to_string()));
    }
}
