// ============================================================================
// STATE MODULE - shared UI state behind Rc<RefCell>
// ============================================================================

pub mod log_browser;
pub mod auth_state;
pub mod chat_state;
pub mod app_state;

pub use log_browser::*;
pub use auth_state::*;
pub use chat_state::*;
pub use app_state::*;
