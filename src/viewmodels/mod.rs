pub mod log_viewmodel;
pub mod chat_viewmodel;
pub mod sync_viewmodel;
pub mod auth_viewmodel;

pub use log_viewmodel::LogViewModel;
pub use chat_viewmodel::{validate_question, ChatViewModel};
pub use sync_viewmodel::{validate_credentials, SyncForm, SyncViewModel};
pub use auth_viewmodel::AuthViewModel;

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use crate::error::AppResult;
    use crate::models::{
        Dhis2SyncRequest, Dhis2SyncResponse, FeedbackRequest, FeedbackResponse, LogRecord, QueryRequest,
        QueryResponse,
    };
    use crate::services::ReportingBackend;

    pub fn log_entry(report: &str, period: &str) -> LogRecord {
        LogRecord {
            timestamp: "2026-03-01 08:30:00".to_string(),
            report: report.to_string(),
            period: period.to_string(),
            count: 1,
        }
    }

    /// Canned answers + a record of every request
    pub struct MockBackend {
        pub logs: RefCell<AppResult<Vec<LogRecord>>>,
        pub log_fetches: Cell<usize>,
        pub query_response: RefCell<AppResult<QueryResponse>>,
        pub queries: RefCell<Vec<QueryRequest>>,
        pub feedback: RefCell<AppResult<FeedbackResponse>>,
        pub push_response: RefCell<AppResult<Dhis2SyncResponse>>,
        pub pushes: RefCell<Vec<Dhis2SyncRequest>>,
    }

    impl Default for MockBackend {
        fn default() -> Self {
            Self {
                logs: RefCell::new(Ok(Vec::new())),
                log_fetches: Cell::new(0),
                query_response: RefCell::new(Ok(QueryResponse {
                    data: Vec::new(),
                    sql: "SELECT 1".to_string(),
                    report_name: Some("DailySummary".to_string()),
                    last_sync: None,
                })),
                queries: RefCell::new(Vec::new()),
                feedback: RefCell::new(Ok(FeedbackResponse { status: "success".to_string(), message: None })),
                push_response: RefCell::new(Ok(Dhis2SyncResponse {
                    status: "completed".to_string(),
                    message: "Successfully synced 1 records.".to_string(),
                })),
                pushes: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ReportingBackend for MockBackend {
        async fn fetch_sync_logs(&self) -> AppResult<Vec<LogRecord>> {
            self.log_fetches.set(self.log_fetches.get() + 1);
            self.logs.borrow().clone()
        }

        async fn submit_query(&self, request: &QueryRequest) -> AppResult<QueryResponse> {
            self.queries.borrow_mut().push(request.clone());
            self.query_response.borrow().clone()
        }

        async fn suggest_feedback(&self, _request: &FeedbackRequest) -> AppResult<FeedbackResponse> {
            self.feedback.borrow().clone()
        }

        async fn push_to_dhis2(&self, request: &Dhis2SyncRequest) -> AppResult<Dhis2SyncResponse> {
            self.pushes.borrow_mut().push(request.clone());
            self.push_response.borrow().clone()
        }
    }
}
