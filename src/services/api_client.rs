// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here, just requests against the reporting backend
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::{AppError, AppResult};
use crate::models::{
    Dhis2SyncRequest, Dhis2SyncResponse, FeedbackRequest, FeedbackResponse, LogRecord, QueryRequest,
    QueryResponse,
};
use crate::services::backend::ReportingBackend;

const SYNC_LOGS_PATH: &str = "/ai/sync/logs";
const QUERY_PATH: &str = "/ai/query";
const FEEDBACK_PATH: &str = "/ai/feedback/suggest";
const DHIS2_SYNC_PATH: &str = "/ai/sync/dhis2";

/// API client - HTTP communication only (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check status, then decode the JSON body
    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(AppError::Http { status, text });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| AppError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Self::decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ReportingBackend for ApiClient {
    async fn fetch_sync_logs(&self) -> AppResult<Vec<LogRecord>> {
        let response = Request::get(&self.url(SYNC_LOGS_PATH))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let logs: Vec<LogRecord> = Self::decode(response).await?;
        log::info!("📜 [API] {} sync log entries received", logs.len());
        Ok(logs)
    }

    async fn submit_query(&self, request: &QueryRequest) -> AppResult<QueryResponse> {
        log::info!(
            "💬 [API] Query ({} -> {}): {}",
            request.start_date, request.end_date, request.question
        );
        let response: QueryResponse = self.post_json(QUERY_PATH, request).await?;
        log::info!(
            "✅ [API] Query answered: report={} rows={}",
            response.report_name(),
            response.data.len()
        );
        Ok(response)
    }

    async fn suggest_feedback(&self, request: &FeedbackRequest) -> AppResult<FeedbackResponse> {
        log::info!("⭐ [API] Training suggestion for report {}", request.report_name);
        self.post_json(FEEDBACK_PATH, request).await
    }

    async fn push_to_dhis2(&self, request: &Dhis2SyncRequest) -> AppResult<Dhis2SyncResponse> {
        log::info!("🚀 [API] DHIS2 push: {:?}", request);
        let response: Dhis2SyncResponse = self.post_json(DHIS2_SYNC_PATH, request).await?;
        log::info!("📬 [API] DHIS2 push status: {}", response.status);
        Ok(response)
    }
}
