// ============================================================================
// LOG VIEWMODEL - Sync history fetch
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::AppResult;
use crate::services::{ApiClient, ReportingBackend};
use crate::state::LogBrowser;

pub struct LogViewModel<B: ReportingBackend = ApiClient> {
    backend: Rc<B>,
}

impl LogViewModel<ApiClient> {
    pub fn new() -> Self {
        Self::with_backend(Rc::new(ApiClient::new()))
    }
}

impl Default for LogViewModel<ApiClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ReportingBackend> LogViewModel<B> {
    pub fn with_backend(backend: Rc<B>) -> Self {
        Self { backend }
    }

    /// Fetch the history and hand it to the browser state
    ///
    /// On failure the state is left exactly as it was; the error is only
    /// logged, the panel keeps showing what it had.
    pub async fn load(&self, browser: &RefCell<LogBrowser>) -> AppResult<usize> {
        match self.backend.fetch_sync_logs().await {
            Ok(logs) => {
                let count = logs.len();
                browser.borrow_mut().load(logs);
                log::info!("📜 [LOGS] History loaded: {} entries", count);
                Ok(count)
            }
            Err(e) => {
                log::error!("❌ [LOGS] Error fetching logs: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::viewmodels::mock::{log_entry, MockBackend};
    use futures::executor::block_on;

    #[test]
    fn test_load_replaces_state() {
        let backend = Rc::new(MockBackend::default());
        *backend.logs.borrow_mut() = Ok(vec![log_entry("PatientGrid", "202601"), log_entry("VitalsReport", "202512")]);
        let vm = LogViewModel::with_backend(backend.clone());
        let browser = RefCell::new(LogBrowser::new(10));

        let count = block_on(vm.load(&browser)).unwrap();

        assert_eq!(count, 2);
        assert_eq!(browser.borrow().all_logs().len(), 2);
        assert_eq!(browser.borrow().last_sync().map(|l| l.report.as_str()), Some("PatientGrid"));
        assert_eq!(backend.log_fetches.get(), 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let backend = Rc::new(MockBackend::default());
        let vm = LogViewModel::with_backend(backend.clone());
        let browser = RefCell::new(LogBrowser::new(10));
        browser.borrow_mut().load(vec![log_entry("DailySummary", "202602")]);
        browser.borrow_mut().filter("daily");
        let before = browser.borrow().clone();

        *backend.logs.borrow_mut() = Err(AppError::Parse("expected value at line 1".to_string()));
        let result = block_on(vm.load(&browser));

        assert!(result.is_err());
        assert_eq!(*browser.borrow(), before);
    }
}
