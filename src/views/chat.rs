// ============================================================================
// CHAT VIEW - Conversation bubbles + question submission
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::error::AppError;
use crate::state::{AppState, ChatMessage, IncrementalUpdate, UpdateType};
use crate::viewmodels::{validate_question, ChatViewModel};
use crate::views::answer_card::render_answer_card;

pub const MESSAGES_ID: &str = "messages";

/// Questions offered as one-click shortcuts in the sidebar
pub const PRESET_QUESTIONS: [&str; 4] = [
    "How many patients visited today?",
    "List patients registered this month",
    "Show average weight of patients by gender",
    "Daily OPD summary",
];

pub fn render_messages(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.id(MESSAGES_ID)?.class("messages").build();
    let messages = state.chat.get_messages();
    for message in &messages {
        append_child(&container, &render_message(state, message)?)?;
    }
    *state.rendered_messages.borrow_mut() = messages.len();
    Ok(container)
}

pub fn render_message(state: &AppState, message: &ChatMessage) -> Result<Element, JsValue> {
    match message {
        ChatMessage::Welcome => render_welcome(),
        ChatMessage::User { question, start_date, end_date } => {
            Ok(ElementBuilder::new("div")?
                .class("user-msg")
                .child(ElementBuilder::new("span")?.text(question).build())?
                .child(
                    ElementBuilder::new("small")?
                        .class("msg-range")
                        .text(&format!("Range: {} to {}", start_date, end_date))
                        .build(),
                )?
                .build())
        }
        ChatMessage::Answer { question, response } => render_answer_card(state, question, response),
        ChatMessage::Error(text) => Ok(ElementBuilder::new("div")?.class("ai-msg error-msg").text(text).build()),
    }
}

fn render_welcome() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("ai-msg welcome-msg")
        .child(
            ElementBuilder::new("strong")?
                .text("👋 Welcome to Database AI + Bahmni > DHIS2 Integration Assistant")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .text("I can help you query medical records and sync them to DHIS2.")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .text("Pro-tip: when a report is generated, I'll automatically check when that specific data was last synced!")
                .build(),
        )?
        .build())
}

/// Validate, echo the question, ask the backend, append the answer
///
/// Returns `false` when the question was rejected before sending, so the
/// caller keeps the composer text.
pub fn submit_question(state: &AppState, question: &str) -> bool {
    if validate_question(question).is_err() {
        return false;
    }

    let (start_date, end_date) = state.chat.date_range();
    state.chat.push_message(ChatMessage::User {
        question: question.to_string(),
        start_date: start_date.clone(),
        end_date: end_date.clone(),
    });
    crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Messages));

    let state = state.clone();
    let question = question.to_string();
    spawn_local(async move {
        let vm = ChatViewModel::new();
        match vm.ask(&question, &start_date, &end_date).await {
            Ok(response) => {
                state.chat.set_current_report(&response);
                state.chat.push_message(ChatMessage::Answer { question, response });
            }
            Err(e) => {
                log::error!("❌ [CHAT] {}", e);
                state.chat.push_message(ChatMessage::Error(error_text(&e)));
            }
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Messages));
    });
    true
}

fn error_text(error: &AppError) -> String {
    match error {
        AppError::Backend(message) | AppError::Validation(message) => format!("❌ {}", message),
        other => format!("❌ Could not reach the assistant ({})", other),
    }
}
