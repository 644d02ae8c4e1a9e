// ============================================================================
// INCREMENTAL DOM UPDATES
// ============================================================================
// Only touch the nodes that changed; a full render would wipe the search box,
// the composer and any half-filled sync panel.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{append_child, get_element_by_id, scroll_to_bottom};
use crate::state::AppState;
use crate::views::chat::{render_message, MESSAGES_ID};

/// Append chat bubbles pushed since the last render
pub fn append_new_messages(state: &AppState) -> Result<(), JsValue> {
    let container = get_element_by_id(MESSAGES_ID)
        .ok_or_else(|| JsValue::from_str("Messages container not found, needs full render"))?;

    let messages = state.chat.get_messages();
    let already = *state.rendered_messages.borrow();
    for message in messages.iter().skip(already) {
        append_child(&container, &render_message(state, message)?)?;
    }
    *state.rendered_messages.borrow_mut() = messages.len();

    scroll_to_bottom(&container);
    Ok(())
}

pub fn update_sync_history(state: &AppState) -> Result<(), JsValue> {
    crate::views::fill_sync_history(state)
}

pub fn update_history_panel(state: &AppState) -> Result<(), JsValue> {
    crate::views::update_history_visibility(state)
}
