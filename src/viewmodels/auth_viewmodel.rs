// ============================================================================
// AUTH VIEWMODEL - Mock password gate
// ============================================================================
// Not authentication: the password is a build-time constant compared in the
// browser. It only hides the UI; the backend must authenticate on its own.
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::{AppError, AppResult};
use crate::services::{LocalSessionStore, SessionStore};

pub struct AuthViewModel<S: SessionStore = LocalSessionStore> {
    store: Rc<S>,
    password: String,
}

impl AuthViewModel<LocalSessionStore> {
    pub fn new() -> Self {
        Self::with(Rc::new(LocalSessionStore), &CONFIG.login_password)
    }
}

impl Default for AuthViewModel<LocalSessionStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SessionStore> AuthViewModel<S> {
    pub fn with(store: Rc<S>, password: &str) -> Self {
        Self {
            store,
            password: password.to_string(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in()
    }

    pub fn login(&self, password: &str) -> AppResult<()> {
        if password.trim() != self.password {
            log::warn!("🔒 [AUTH] Invalid password");
            return Err(AppError::Validation("Invalid Password".to_string()));
        }
        self.store.set_logged_in()?;
        log::info!("🔓 [AUTH] Logged in");
        Ok(())
    }

    pub fn logout(&self) {
        self.store.clear_login();
        log::info!("👋 [AUTH] Logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemorySessionStore;

    #[test]
    fn test_login_persists_flag() {
        let store = Rc::new(MemorySessionStore::default());
        let vm = AuthViewModel::with(store.clone(), "Admin123");

        assert!(!vm.is_logged_in());
        vm.login("  Admin123 ").unwrap();
        assert!(vm.is_logged_in());
        assert!(store.is_logged_in());

        vm.logout();
        assert!(!vm.is_logged_in());
    }

    #[test]
    fn test_wrong_password() {
        let store = Rc::new(MemorySessionStore::default());
        let vm = AuthViewModel::with(store.clone(), "Admin123");

        assert_eq!(vm.login("admin123"), Err(AppError::Validation("Invalid Password".to_string())));
        assert!(!store.is_logged_in());
    }
}
