// ============================================================================
// APP VIEW - Main layout (sidebar + conversation)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, get_element_by_id, input_value, on_change, on_click, on_enter, set_input_value, ElementBuilder,
};
use crate::state::{AppState, LogBrowser};
use crate::viewmodels::AuthViewModel;
use crate::views::chat::{render_messages, submit_question, PRESET_QUESTIONS};
use crate::views::login::render_login;
use crate::views::sync_history::render_sync_history;

pub const INPUT_ID: &str = "input";
pub const DATE_FROM_ID: &str = "date-from";
pub const DATE_TO_ID: &str = "date-to";

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if !state.auth.get_logged_in() {
        return render_login(state);
    }

    let layout = ElementBuilder::new("div")?.class("app-layout").build();
    append_child(&layout, &render_sidebar(state)?)?;
    append_child(&layout, &render_chat_area(state)?)?;
    Ok(layout)
}

fn render_sidebar(state: &AppState) -> Result<Element, JsValue> {
    let sidebar = ElementBuilder::new("aside")?.class("sidebar").build();

    let brand = ElementBuilder::new("div")?
        .class("brand")
        .child(ElementBuilder::new("h2")?.text("🩺 Bahmni AI Reporting").build())?
        .build();

    let new_chat = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-new-chat")
        .text("➕ New Chat")
        .build();
    {
        let state = state.clone();
        on_click(&new_chat, move |_| {
            log::info!("🆕 [CHAT] New chat");
            state.new_chat();
        })?;
    }

    let presets = ElementBuilder::new("div")?
        .class("presets")
        .child(ElementBuilder::new("h4")?.text("Quick questions").build())?
        .build();
    for question in PRESET_QUESTIONS {
        let button = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-preset")
            .text(question)
            .build();
        let state = state.clone();
        on_click(&button, move |_| {
            if let Some(input) = get_element_by_id(INPUT_ID) {
                set_input_value(&input, question);
            }
            send_from_composer(&state);
        })?;
        append_child(&presets, &button)?;
    }

    let logout = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-logout")
        .text("🚪 Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| {
            AuthViewModel::new().logout();
            state.auth.logout();
            state.chat.reset();
            *state.logs.borrow_mut() = LogBrowser::default();
            *state.show_history.borrow_mut() = false;
            state.notify_subscribers();
        })?;
    }

    append_child(&sidebar, &brand)?;
    append_child(&sidebar, &new_chat)?;
    append_child(&sidebar, &render_date_range(state)?)?;
    append_child(&sidebar, &presets)?;
    append_child(&sidebar, &render_sync_history(state)?)?;
    append_child(&sidebar, &logout)?;
    Ok(sidebar)
}

fn render_date_range(state: &AppState) -> Result<Element, JsValue> {
    let (start, end) = state.chat.date_range();

    let from = ElementBuilder::new("input")?
        .id(DATE_FROM_ID)?
        .attr("type", "date")?
        .attr("value", &start)?
        .build();
    {
        let state = state.clone();
        let from_el = from.clone();
        on_change(&from, move |_| state.chat.set_start_date(input_value(&from_el)))?;
    }

    let to = ElementBuilder::new("input")?
        .id(DATE_TO_ID)?
        .attr("type", "date")?
        .attr("value", &end)?
        .build();
    {
        let state = state.clone();
        let to_el = to.clone();
        on_change(&to, move |_| state.chat.set_end_date(input_value(&to_el)))?;
    }

    Ok(ElementBuilder::new("div")?
        .class("date-range")
        .child(ElementBuilder::new("label")?.attr("for", DATE_FROM_ID)?.text("From").build())?
        .child(from)?
        .child(ElementBuilder::new("label")?.attr("for", DATE_TO_ID)?.text("To").build())?
        .child(to)?
        .build())
}

fn render_chat_area(state: &AppState) -> Result<Element, JsValue> {
    let area = ElementBuilder::new("main")?.class("chat-area").build();

    let input = ElementBuilder::new("input")?
        .id(INPUT_ID)?
        .attr("type", "text")?
        .attr("placeholder", "Ask a question about your data...")?
        .class("composer-input")
        .build();
    {
        let state = state.clone();
        on_enter(&input, move || send_from_composer(&state))?;
    }

    let send = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-send")
        .text("Send ➤")
        .build();
    {
        let state = state.clone();
        on_click(&send, move |_| send_from_composer(&state))?;
    }

    let composer = ElementBuilder::new("div")?.class("composer").child(input)?.child(send)?.build();

    append_child(&area, &render_messages(state)?)?;
    append_child(&area, &composer)?;
    Ok(area)
}

/// Read the composer, clear it once the question is accepted
fn send_from_composer(state: &AppState) {
    if let Some(input) = get_element_by_id(INPUT_ID) {
        let question = input_value(&input);
        if submit_question(state, &question) {
            set_input_value(&input, "");
        }
    }
}
