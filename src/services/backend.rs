//! Seam between view-models and the reporting backend
//!
//! View-models only see this trait, so they can be driven by `ApiClient` in
//! the browser and by an in-memory double in tests.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Dhis2SyncRequest, Dhis2SyncResponse, FeedbackRequest, FeedbackResponse, LogRecord, QueryRequest,
    QueryResponse,
};

#[async_trait(?Send)]
pub trait ReportingBackend {
    /// `GET /ai/sync/logs` - newest first
    async fn fetch_sync_logs(&self) -> AppResult<Vec<LogRecord>>;

    /// `POST /ai/query`
    async fn submit_query(&self, request: &QueryRequest) -> AppResult<QueryResponse>;

    /// `POST /ai/feedback/suggest`
    async fn suggest_feedback(&self, request: &FeedbackRequest) -> AppResult<FeedbackResponse>;

    /// `POST /ai/sync/dhis2`
    async fn push_to_dhis2(&self, request: &Dhis2SyncRequest) -> AppResult<Dhis2SyncResponse>;
}
