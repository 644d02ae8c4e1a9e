pub mod log_record;
pub mod query;
pub mod feedback;
pub mod dhis2;

pub use log_record::LogRecord;
pub use query::{QueryRequest, QueryResponse, LastSync, ReportRow, DEFAULT_REPORT_NAME, FALLBACK_REPORT_NAME};
pub use feedback::{FeedbackRequest, FeedbackResponse, FeedbackStatus};
pub use dhis2::{Dhis2SyncRequest, Dhis2SyncResponse, Period};
