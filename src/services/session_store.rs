// ============================================================================
// SESSION STORE - Persisted client-side flags (localStorage)
// ============================================================================
// Values are stored as raw strings so the key space stays readable from
// devtools: `bahmni_login = "true"`, `dhis_last_user = "<name>"`.
// DHIS2 passwords are never written here.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};

use crate::error::{AppError, AppResult};

pub const LOGIN_FLAG_KEY: &str = "bahmni_login";
pub const DHIS_USER_KEY: &str = "dhis_last_user";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str);

    fn is_logged_in(&self) -> bool {
        self.get(LOGIN_FLAG_KEY).as_deref() == Some("true")
    }

    fn set_logged_in(&self) -> AppResult<()> {
        self.set(LOGIN_FLAG_KEY, "true")
    }

    fn clear_login(&self) {
        self.remove(LOGIN_FLAG_KEY);
    }

    fn remembered_dhis_user(&self) -> Option<String> {
        self.get(DHIS_USER_KEY).filter(|user| !user.is_empty())
    }

    fn remember_dhis_user(&self, user: &str) -> AppResult<()> {
        self.set(DHIS_USER_KEY, user)
    }
}

/// Browser localStorage
#[derive(Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("could not write {}", key)))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory store, used where no browser is around
#[derive(Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
