// ============================================================================
// AUTH STATE - Mock login gate
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Login flag mirrored from local storage
#[derive(Clone)]
pub struct AuthState {
    pub is_logged_in: Rc<RefCell<bool>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            is_logged_in: Rc::new(RefCell::new(false)),
        }
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        *self.is_logged_in.borrow_mut() = logged_in;
    }

    pub fn get_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    pub fn logout(&self) {
        self.set_logged_in(false);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
