// ============================================================================
// CHAT STATE - Conversation + report currently on screen
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{QueryResponse, ReportRow, DEFAULT_REPORT_NAME};

/// One bubble in the conversation
#[derive(Debug, Clone, PartialEq)]
pub enum ChatMessage {
    Welcome,
    User {
        question: String,
        start_date: String,
        end_date: String,
    },
    Answer {
        question: String,
        response: QueryResponse,
    },
    Error(String),
}

/// Report the CSV export and DHIS2 push act upon
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReport {
    pub data: Option<Vec<ReportRow>>,
    pub name: String,
}

impl Default for CurrentReport {
    fn default() -> Self {
        Self {
            data: None,
            name: DEFAULT_REPORT_NAME.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct ChatState {
    pub messages: Rc<RefCell<Vec<ChatMessage>>>,
    pub current_report: Rc<RefCell<CurrentReport>>,
    pub start_date: Rc<RefCell<String>>,
    pub end_date: Rc<RefCell<String>>,
}

impl ChatState {
    pub fn new(start_date: String, end_date: String) -> Self {
        Self {
            messages: Rc::new(RefCell::new(vec![ChatMessage::Welcome])),
            current_report: Rc::new(RefCell::new(CurrentReport::default())),
            start_date: Rc::new(RefCell::new(start_date)),
            end_date: Rc::new(RefCell::new(end_date)),
        }
    }

    pub fn push_message(&self, message: ChatMessage) {
        self.messages.borrow_mut().push(message);
    }

    pub fn get_messages(&self) -> Vec<ChatMessage> {
        self.messages.borrow().clone()
    }

    /// Remember the answered report for CSV export and DHIS2 push
    pub fn set_current_report(&self, response: &QueryResponse) {
        *self.current_report.borrow_mut() = CurrentReport {
            data: Some(response.data.clone()),
            name: response.report_name().to_string(),
        };
    }

    pub fn get_current_report(&self) -> CurrentReport {
        self.current_report.borrow().clone()
    }

    /// "New chat": drop the conversation and the current report
    pub fn reset(&self) {
        *self.messages.borrow_mut() = vec![ChatMessage::Welcome];
        *self.current_report.borrow_mut() = CurrentReport::default();
    }

    pub fn date_range(&self) -> (String, String) {
        (self.start_date.borrow().clone(), self.end_date.borrow().clone())
    }

    pub fn set_start_date(&self, date: String) {
        *self.start_date.borrow_mut() = date;
    }

    pub fn set_end_date(&self, date: String) {
        *self.end_date.borrow_mut() = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_defaults() {
        let chat = ChatState::new("2026-01-01".to_string(), "2026-01-31".to_string());
        let response: QueryResponse =
            serde_json::from_str(r#"{"sql":"SELECT 1","data":[{"n":1}],"report_name":"VitalsReport"}"#).unwrap();

        chat.push_message(ChatMessage::Answer { question: "weight".to_string(), response: response.clone() });
        chat.set_current_report(&response);
        assert_eq!(chat.get_current_report().name, "VitalsReport");
        assert_eq!(chat.get_messages().len(), 2);

        chat.reset();
        assert_eq!(chat.get_messages(), vec![ChatMessage::Welcome]);
        assert_eq!(chat.get_current_report(), CurrentReport::default());
        assert_eq!(chat.get_current_report().name, DEFAULT_REPORT_NAME);
    }
}
