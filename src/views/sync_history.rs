// ============================================================================
// SYNC HISTORY VIEW - Last-sync line, search box, paged table
// ============================================================================
// The shell (toggle, search box, empty table) is built once per full render;
// `fill_sync_history` refreshes rows, pagination and the summary so typing in
// the search box never loses focus.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, clear_children, get_element_by_id, input_value, on_click, on_input, set_input_value,
    set_text_content, set_visible, ElementBuilder,
};
use crate::state::{AppState, LogPage};

pub const LAST_SYNC_ID: &str = "last-sync-text";
pub const HISTORY_PANEL_ID: &str = "sync-history-table";
pub const SEARCH_INPUT_ID: &str = "log-search-input";
pub const LOG_BODY_ID: &str = "log-body";
pub const PAGINATION_ID: &str = "log-pagination";

pub fn render_sync_history(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("sync-history").build();

    let header = ElementBuilder::new("div")?.class("sync-history-header").build();
    let toggle = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-history-toggle")
        .text("📜 Sync History")
        .build();
    {
        let state = state.clone();
        on_click(&toggle, move |_| state.toggle_history())?;
    }
    let last_sync = ElementBuilder::new("div")?
        .id(LAST_SYNC_ID)?
        .class("last-sync-text")
        .build();
    append_child(&header, &toggle)?;
    append_child(&header, &last_sync)?;

    let panel = ElementBuilder::new("div")?.id(HISTORY_PANEL_ID)?.class("history-panel").build();
    set_visible(&panel, *state.show_history.borrow(), "block")?;

    let search = ElementBuilder::new("input")?
        .id(SEARCH_INPUT_ID)?
        .attr("type", "text")?
        .attr("placeholder", "🔍 Search history...")?
        .class("log-search")
        .build();
    {
        let state = state.clone();
        let search_el = search.clone();
        on_input(&search, move |_| {
            let query = input_value(&search_el);
            state.filter_logs(&query);
        })?;
    }
    let search_bar = ElementBuilder::new("div")?.class("log-search-bar").child(search)?.build();

    let table = ElementBuilder::new("table")?.class("log-table").build();
    let head_row = ElementBuilder::new("tr")?.build();
    for title in ["Timestamp", "Report", "Period", "Records"] {
        append_child(&head_row, &ElementBuilder::new("th")?.text(title).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(head_row)?.build();
    let tbody = ElementBuilder::new("tbody")?.id(LOG_BODY_ID)?.build();
    append_child(&table, &thead)?;
    append_child(&table, &tbody)?;

    let pagination = ElementBuilder::new("div")?.id(PAGINATION_ID)?.class("log-pagination").build();

    append_child(&panel, &search_bar)?;
    append_child(&panel, &table)?;
    append_child(&panel, &pagination)?;

    append_child(&section, &header)?;
    append_child(&section, &panel)?;
    Ok(section)
}

/// Refresh summary, rows and pagination from state
pub fn fill_sync_history(state: &AppState) -> Result<(), JsValue> {
    let (page, last_sync, query) = {
        let logs = state.logs.borrow();
        (logs.render(), logs.last_sync().cloned(), logs.query().to_string())
    };

    if let (Some(target), Some(latest)) = (get_element_by_id(LAST_SYNC_ID), last_sync) {
        set_text_content(&target, &format!("✅ {}", latest.summary_line()));
    }

    if let Some(search) = get_element_by_id(SEARCH_INPUT_ID) {
        if input_value(&search) != query {
            set_input_value(&search, &query);
        }
    }

    if let Some(body) = get_element_by_id(LOG_BODY_ID) {
        clear_children(&body);
        for log in &page.rows {
            let row = ElementBuilder::new("tr")?
                .child(ElementBuilder::new("td")?.text(&log.timestamp).build())?
                .child(
                    ElementBuilder::new("td")?
                        .child(ElementBuilder::new("span")?.class("report-tag").text(&log.report).build())?
                        .build(),
                )?
                .child(ElementBuilder::new("td")?.text(&log.period).build())?
                .child(
                    ElementBuilder::new("td")?
                        .child(ElementBuilder::new("span")?.class("record-count").text(&log.count.to_string()).build())?
                        .build(),
                )?
                .build();
            append_child(&body, &row)?;
        }
    }

    if let Some(nav) = get_element_by_id(PAGINATION_ID) {
        clear_children(&nav);
        append_child(&nav, &render_pagination(state, &page)?)?;
    }
    Ok(())
}

pub fn update_history_visibility(state: &AppState) -> Result<(), JsValue> {
    if let Some(panel) = get_element_by_id(HISTORY_PANEL_ID) {
        set_visible(&panel, *state.show_history.borrow(), "block")?;
    }
    Ok(())
}

fn render_pagination(state: &AppState, page: &LogPage) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("div")?.class("pagination-bar").build();
    let range = ElementBuilder::new("span")?.class("pagination-range").text(&page.range_label()).build();

    let prev = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-page")
        .flag("disabled", page.prev_disabled)?
        .text("Prev")
        .build();
    if !page.prev_disabled {
        let state = state.clone();
        let target = page.prev_page();
        on_click(&prev, move |_| state.go_to_log_page(target))?;
    }

    let next = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-page")
        .flag("disabled", page.next_disabled)?
        .text("Next")
        .build();
    if !page.next_disabled {
        let state = state.clone();
        let target = page.next_page();
        on_click(&next, move |_| state.go_to_log_page(target))?;
    }

    let buttons = ElementBuilder::new("div")?.class("pagination-buttons").child(prev)?.child(next)?.build();
    append_child(&bar, &range)?;
    append_child(&bar, &buttons)?;
    Ok(bar)
}
