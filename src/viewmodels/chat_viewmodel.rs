// ============================================================================
// CHAT VIEWMODEL - Questions and training feedback
// ============================================================================

use std::rc::Rc;

use crate::error::{AppError, AppResult};
use crate::models::{FeedbackRequest, FeedbackStatus, QueryRequest, QueryResponse};
use crate::services::{ApiClient, ReportingBackend};

pub struct ChatViewModel<B: ReportingBackend = ApiClient> {
    backend: Rc<B>,
}

impl ChatViewModel<ApiClient> {
    pub fn new() -> Self {
        Self::with_backend(Rc::new(ApiClient::new()))
    }
}

impl Default for ChatViewModel<ApiClient> {
    fn default() -> Self {
        Self::new()
    }
}

/// A question must have something besides whitespace
pub fn validate_question(question: &str) -> AppResult<()> {
    if question.trim().is_empty() {
        return Err(AppError::Validation("Please type a question.".to_string()));
    }
    Ok(())
}

impl<B: ReportingBackend> ChatViewModel<B> {
    pub fn with_backend(backend: Rc<B>) -> Self {
        Self { backend }
    }

    /// Send a question for the given date range
    ///
    /// The question goes out as typed; blank ones never leave the browser.
    pub async fn ask(&self, question: &str, start_date: &str, end_date: &str) -> AppResult<QueryResponse> {
        validate_question(question)?;

        let request = QueryRequest {
            question: question.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        };
        self.backend.submit_query(&request).await
    }

    /// Offer a question/SQL pair as a training example
    pub async fn suggest(&self, question: &str, sql: &str, report_name: &str) -> AppResult<FeedbackStatus> {
        let request = FeedbackRequest {
            question: question.to_string(),
            sql: sql.to_string(),
            report_name: report_name.to_string(),
        };
        let response = self.backend.suggest_feedback(&request).await?;
        let status = FeedbackStatus::from(response);
        log::info!("⭐ [TRAIN] {:?}", status);
        Ok(status)
    }
}
