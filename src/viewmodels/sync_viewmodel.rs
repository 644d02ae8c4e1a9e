// ============================================================================
// SYNC VIEWMODEL - Push the current report to DHIS2
// ============================================================================
// A completed push is followed by one history re-fetch, after the push
// response has arrived (never concurrently with it).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{AppError, AppResult};
use crate::models::{Dhis2SyncRequest, Period};
use crate::services::{ApiClient, LocalSessionStore, ReportingBackend, SessionStore};
use crate::state::{CurrentReport, LogBrowser};
use crate::viewmodels::LogViewModel;

/// What the user typed into a card's sync panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncForm {
    pub period: Period,
    pub user: String,
    pub password: String,
}

pub struct SyncViewModel<B: ReportingBackend = ApiClient, S: SessionStore = LocalSessionStore> {
    backend: Rc<B>,
    store: Rc<S>,
}

impl SyncViewModel<ApiClient, LocalSessionStore> {
    pub fn new() -> Self {
        Self::with(Rc::new(ApiClient::new()), Rc::new(LocalSessionStore))
    }
}

impl Default for SyncViewModel<ApiClient, LocalSessionStore> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_credentials(user: &str, password: &str) -> AppResult<()> {
    if user.is_empty() || password.is_empty() {
        return Err(AppError::Validation("Credentials required.".to_string()));
    }
    Ok(())
}

impl<B: ReportingBackend, S: SessionStore> SyncViewModel<B, S> {
    pub fn with(backend: Rc<B>, store: Rc<S>) -> Self {
        Self { backend, store }
    }

    /// Username to pre-fill when a sync panel opens
    pub fn remembered_user(&self) -> Option<String> {
        self.store.remembered_dhis_user()
    }

    /// Push `report` for the chosen period
    ///
    /// Returns the backend success message. A non-`completed` status comes
    /// back as `AppError::Backend` with the backend message untouched.
    pub async fn push(
        &self,
        report: &CurrentReport,
        form: &SyncForm,
        logs: &RefCell<LogBrowser>,
    ) -> AppResult<String> {
        validate_credentials(&form.user, &form.password)?;

        if let Err(e) = self.store.remember_dhis_user(&form.user) {
            log::warn!("⚠️ [SYNC] Could not remember DHIS2 user: {}", e);
        }

        let request = Dhis2SyncRequest {
            data: report.data.clone().unwrap_or_default(),
            report_name: report.name.clone(),
            period: form.period.code(),
            dhis_user: form.user.clone(),
            dhis_pass: form.password.clone(),
        };

        let response = self.backend.push_to_dhis2(&request).await?;
        if !response.is_completed() {
            log::warn!("⚠️ [SYNC] DHIS2 push not completed: {} - {}", response.status, response.message);
            return Err(AppError::Backend(response.message));
        }

        log::info!("✅ [SYNC] {}", response.message);
        let refresh = LogViewModel::with_backend(self.backend.clone());
        // History refresh failure is logged by the log view-model; the push itself succeeded.
        let _ = refresh.load(logs).await;

        Ok(response.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dhis2SyncResponse;
    use crate::services::MemorySessionStore;
    use crate::viewmodels::mock::{log_entry, MockBackend};
    use futures::executor::block_on;

    fn form(user: &str, password: &str) -> SyncForm {
        SyncForm {
            period: Period::new(2026, 2).unwrap(),
            user: user.to_string(),
            password: password.to_string(),
        }
    }

    fn report() -> CurrentReport {
        CurrentReport {
            data: Some(serde_json::from_str(r#"[{"opd_visits":14}]"#).unwrap()),
            name: "DailySummary".to_string(),
        }
    }

    #[test]
    fn test_completed_push_refetches_logs_once() {
        let backend = Rc::new(MockBackend::default());
        *backend.logs.borrow_mut() = Ok(vec![log_entry("DailySummary", "202602")]);
        let store = Rc::new(MemorySessionStore::default());
        let vm = SyncViewModel::with(backend.clone(), store);
        let logs = RefCell::new(LogBrowser::new(10));

        let message = block_on(vm.push(&report(), &form("admin", "district"), &logs)).unwrap();

        assert_eq!(message, "Successfully synced 1 records.");
        assert_eq!(backend.log_fetches.get(), 1);
        assert_eq!(logs.borrow().all_logs().len(), 1);

        let pushes = backend.pushes.borrow();
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].period, "202602");
        assert_eq!(pushes[0].report_name, "DailySummary");
        assert_eq!(pushes[0].data.len(), 1);
    }

    #[test]
    fn test_not_completed_push_does_not_refetch() {
        let backend = Rc::new(MockBackend::default());
        *backend.push_response.borrow_mut() = Ok(Dhis2SyncResponse {
            status: "warning".to_string(),
            message: "DHIS2 accepted the request but 0 records were changed".to_string(),
        });
        let vm = SyncViewModel::with(backend.clone(), Rc::new(MemorySessionStore::default()));
        let logs = RefCell::new(LogBrowser::new(10));

        let result = block_on(vm.push(&report(), &form("admin", "district"), &logs));

        assert_eq!(
            result,
            Err(AppError::Backend("DHIS2 accepted the request but 0 records were changed".to_string()))
        );
        assert_eq!(backend.log_fetches.get(), 0);
    }

    #[test]
    fn test_missing_credentials_block_request() {
        let backend = Rc::new(MockBackend::default());
        let store = Rc::new(MemorySessionStore::default());
        let vm = SyncViewModel::with(backend.clone(), store.clone());
        let logs = RefCell::new(LogBrowser::new(10));

        for (user, password) in [("", "district"), ("admin", ""), ("", "")] {
            let result = block_on(vm.push(&report(), &form(user, password), &logs));
            assert_eq!(result, Err(AppError::Validation("Credentials required.".to_string())));
        }

        assert!(backend.pushes.borrow().is_empty());
        assert!(store.remembered_dhis_user().is_none());
    }

    #[test]
    fn test_user_is_remembered_but_not_password() {
        let backend = Rc::new(MockBackend::default());
        let store = Rc::new(MemorySessionStore::default());
        let vm = SyncViewModel::with(backend, store.clone());
        let logs = RefCell::new(LogBrowser::new(10));

        block_on(vm.push(&report(), &form("nurse.kamala", "secret"), &logs)).unwrap();

        assert_eq!(vm.remembered_user().as_deref(), Some("nurse.kamala"));
        assert!(store.get("dhis_pass").is_none());
    }

    #[test]
    fn test_transport_failure_is_reported() {
        let backend = Rc::new(MockBackend::default());
        *backend.push_response.borrow_mut() = Err(AppError::Network("connection refused".to_string()));
        let vm = SyncViewModel::with(backend.clone(), Rc::new(MemorySessionStore::default()));
        let logs = RefCell::new(LogBrowser::new(10));

        let result = block_on(vm.push(&report(), &form("admin", "district"), &logs));

        assert!(result.unwrap_err().is_transport());
        assert_eq!(backend.log_fetches.get(), 0);
    }
}
