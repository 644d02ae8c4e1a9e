// ============================================================================
// APP STATE - Global application state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, Local, NaiveDate};

use crate::state::{AuthState, ChatState, LogBrowser};

/// Kind of DOM refresh a state change needs
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Refresh only the affected region
    Incremental(IncrementalUpdate),
    /// Rebuild everything (login/logout, new chat)
    FullRender,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// History rows, pagination bar and "last sync" line (search box untouched)
    SyncHistory,
    /// Show/hide the history panel
    HistoryVisibility,
    /// Append the newest chat bubble(s) not yet on screen
    Messages,
}

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub chat: ChatState,
    pub logs: Rc<RefCell<LogBrowser>>,
    pub show_history: Rc<RefCell<bool>>,

    // Number of chat messages already in the DOM
    pub rendered_messages: Rc<RefCell<usize>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        let (start, end) = default_date_range(Local::now().date_naive());
        Self {
            auth: AuthState::new(),
            chat: ChatState::new(start, end),
            logs: Rc::new(RefCell::new(LogBrowser::default())),
            show_history: Rc::new(RefCell::new(false)),
            rendered_messages: Rc::new(RefCell::new(0)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Subscribe to changes that require a full re-render
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers.iter() {
            callback();
        }
    }

    pub fn set_show_history(&self, show: bool) {
        *self.show_history.borrow_mut() = show;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::HistoryVisibility));
    }

    pub fn toggle_history(&self) {
        let show = !*self.show_history.borrow();
        self.set_show_history(show);
    }

    pub fn filter_logs(&self, query: &str) {
        self.logs.borrow_mut().filter(query);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::SyncHistory));
    }

    pub fn go_to_log_page(&self, page: usize) {
        self.logs.borrow_mut().go_to_page(page);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::SyncHistory));
    }

    /// "New chat": conversation back to the welcome bubble
    pub fn new_chat(&self) {
        self.chat.reset();
        *self.rendered_messages.borrow_mut() = 0;
        self.notify_subscribers();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// First day of the month up to `today`, as `YYYY-MM-DD`
pub fn default_date_range(today: NaiveDate) -> (String, String) {
    let first = today.with_day(1).unwrap_or(today);
    (
        first.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}
