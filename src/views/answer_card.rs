// ============================================================================
// ANSWER CARD VIEW - SQL, result table and per-answer actions
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    add_class, append_child, input_value, on_change, on_click, remove_class, select_value, set_disabled,
    set_input_value, set_text_content, set_visible, ElementBuilder,
};
use crate::error::AppError;
use crate::models::query::cell_text;
use crate::models::{FeedbackStatus, Period, QueryResponse};
use crate::services::download_csv;
use crate::state::{AppState, IncrementalUpdate, UpdateType};
use crate::viewmodels::{validate_credentials, ChatViewModel, SyncForm, SyncViewModel};
use crate::config::CONFIG;

const TRAIN_LABEL: &str = "⭐ Train AI";
const PUSH_LABEL: &str = "🚀 Push to DHIS2";

const MONTHS: [(&str, &str); 12] = [
    ("01", "Jan"), ("02", "Feb"), ("03", "Mar"), ("04", "Apr"),
    ("05", "May"), ("06", "Jun"), ("07", "Jul"), ("08", "Aug"),
    ("09", "Sep"), ("10", "Oct"), ("11", "Nov"), ("12", "Dec"),
];

pub fn render_answer_card(state: &AppState, question: &str, response: &QueryResponse) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("ai-msg").build();

    // Header: report name + last sync of this report
    let badge_class = if response.last_sync.is_some() { "sync-badge synced" } else { "sync-badge" };
    let header = ElementBuilder::new("div")?
        .class("answer-header")
        .child(
            ElementBuilder::new("strong")?
                .class("answer-title")
                .text(&format!("Analysis Result ({})", response.report_name()))
                .build(),
        )?
        .child(ElementBuilder::new("div")?.class(badge_class).text(&response.sync_badge()).build())?
        .build();

    let sql = ElementBuilder::new("pre")?.class("sql-block").text(&response.sql).build();

    let result = ElementBuilder::new("div")?
        .class("result-scroll")
        .child(render_result(response)?)?
        .build();

    append_child(&card, &header)?;
    append_child(&card, &sql)?;
    append_child(&card, &result)?;

    let panel = render_sync_panel(state)?;
    append_child(&card, &render_actions(state, question, response, &panel)?)?;
    append_child(&card, &panel)?;

    Ok(card)
}

/// Table of rows, the backend error text, or an empty table
fn render_result(response: &QueryResponse) -> Result<Element, JsValue> {
    if let Some(error) = response.error_message() {
        return Ok(ElementBuilder::new("div")?
            .class("result-error")
            .text(&format!("Error: {}", error))
            .build());
    }

    let table = ElementBuilder::new("table")?.class("result-table").build();
    let columns = response.columns();
    if columns.is_empty() {
        return Ok(table);
    }

    let head_row = ElementBuilder::new("tr")?.build();
    for column in &columns {
        append_child(&head_row, &ElementBuilder::new("th")?.text(column).build())?;
    }
    append_child(&table, &ElementBuilder::new("thead")?.child(head_row)?.build())?;

    let body = ElementBuilder::new("tbody")?.build();
    for (index, row) in response.data.iter().enumerate() {
        let tr = ElementBuilder::new("tr")?
            .class(if index % 2 == 0 { "row-even" } else { "row-odd" })
            .build();
        for column in &columns {
            let text = row.get(column).map(cell_text).unwrap_or_default();
            append_child(&tr, &ElementBuilder::new("td")?.text(&text).build())?;
        }
        append_child(&body, &tr)?;
    }
    append_child(&table, &body)?;
    Ok(table)
}

fn render_actions(
    state: &AppState,
    question: &str,
    response: &QueryResponse,
    panel: &Element,
) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("div")?.class("answer-actions").build();

    let csv_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-action btn-csv")
        .text("📥 CSV")
        .build();
    {
        let state = state.clone();
        on_click(&csv_btn, move |_| {
            let report = state.chat.get_current_report();
            let rows = report.data.unwrap_or_default();
            if let Err(e) = download_csv(&rows) {
                log::error!("❌ [CSV] Export failed: {}", e);
            }
        })?;
    }

    let train_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-action btn-train")
        .text(TRAIN_LABEL)
        .build();
    let train_error = ElementBuilder::new("span")?.class("train-error").build();
    {
        let button = train_btn.clone();
        let error_el = train_error.clone();
        let question = question.to_string();
        let sql = response.sql.clone();
        let report_name = response.report_name().to_string();
        on_click(&train_btn, move |_| {
            if button.has_attribute("disabled") {
                return;
            }
            let _ = set_disabled(&button, true);
            set_text_content(&button, "⏳ Checking...");
            set_text_content(&error_el, "");

            let button = button.clone();
            let error_el = error_el.clone();
            let (question, sql, report_name) = (question.clone(), sql.clone(), report_name.clone());
            spawn_local(async move {
                let vm = ChatViewModel::new();
                match vm.suggest(&question, &sql, &report_name).await {
                    Ok(FeedbackStatus::Submitted) => {
                        set_text_content(&button, "✅ Submitted");
                        let _ = add_class(&button, "trained");
                    }
                    Ok(FeedbackStatus::AlreadyTrained) => {
                        set_text_content(&button, "ℹ️ Already Trained");
                        let _ = add_class(&button, "already-trained");
                    }
                    Ok(FeedbackStatus::Rejected(message)) => {
                        set_text_content(&error_el, &format!("Error: {}", message));
                        set_text_content(&button, TRAIN_LABEL);
                        let _ = set_disabled(&button, false);
                    }
                    Err(e) => {
                        log::error!("❌ [TRAIN] {}", e);
                        set_text_content(&button, TRAIN_LABEL);
                        let _ = set_disabled(&button, false);
                    }
                }
            });
        })?;
    }

    let buttons = ElementBuilder::new("div")?
        .class("action-buttons")
        .child(csv_btn)?
        .child(train_btn)?
        .child(train_error)?
        .build();

    let checkbox = ElementBuilder::new("input")?
        .attr("type", "checkbox")?
        .class("sync-toggle-check")
        .build();
    {
        let panel = panel.clone();
        let checkbox_el = checkbox.clone();
        on_change(&checkbox, move |_| {
            let checked = checkbox_el
                .dyn_ref::<HtmlInputElement>()
                .map(|c| c.checked())
                .unwrap_or(false);
            let _ = set_visible(&panel, checked, "block");
            if checked {
                prefill_user(&panel);
            }
        })?;
    }
    let toggle = ElementBuilder::new("label")?
        .class("sync-toggle")
        .child(checkbox)?
        .build();
    toggle.append_with_str_1(" Sync to DHIS2?")?;

    append_child(&bar, &buttons)?;
    append_child(&bar, &toggle)?;
    Ok(bar)
}

fn prefill_user(panel: &Element) {
    let remembered = SyncViewModel::new().remembered_user();
    if let (Some(user), Ok(Some(input))) = (remembered, panel.query_selector(".dhis-user")) {
        set_input_value(&input, &user);
    }
}

fn render_sync_panel(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("sync-workflow-container").build();
    set_visible(&container, false, "block")?;

    let year_select = ElementBuilder::new("select")?.class("sync-year").build();
    for year in CONFIG.sync_config.years() {
        let option = ElementBuilder::new("option")?
            .attr("value", &year.to_string())?
            .flag("selected", year == CONFIG.sync_config.default_year)?
            .text(&year.to_string())
            .build();
        append_child(&year_select, &option)?;
    }

    let month_select = ElementBuilder::new("select")?.class("sync-month").build();
    for (value, name) in MONTHS {
        let option = ElementBuilder::new("option")?.attr("value", value)?.text(name).build();
        append_child(&month_select, &option)?;
    }

    let user_input = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("placeholder", "DHIS2 Username")?
        .attr("autocomplete", "username")?
        .class("dhis-user")
        .build();
    let pass_input = ElementBuilder::new("input")?
        .attr("type", "password")?
        .attr("placeholder", "DHIS2 Password")?
        .attr("autocomplete", "current-password")?
        .class("dhis-pass")
        .build();

    let push_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-push")
        .text(PUSH_LABEL)
        .build();
    let status = ElementBuilder::new("div")?.class("sync-status").build();

    {
        let state = state.clone();
        let button = push_btn.clone();
        let status_el = status.clone();
        let (year_el, month_el) = (year_select.clone(), month_select.clone());
        let (user_el, pass_el) = (user_input.clone(), pass_input.clone());
        on_click(&push_btn, move |_| {
            if button.has_attribute("disabled") {
                return;
            }
            let user = input_value(&user_el);
            let password = input_value(&pass_el);

            if let Err(e) = validate_credentials(&user, &password) {
                show_status(&status_el, &e.to_string(), false);
                return;
            }

            let year = select_value(&year_el).parse().unwrap_or(CONFIG.sync_config.default_year);
            let month = select_value(&month_el).parse().unwrap_or(1);
            let period = match Period::new(year, month) {
                Some(period) => period,
                None => {
                    show_status(&status_el, "Invalid period.", false);
                    return;
                }
            };

            let _ = set_disabled(&button, true);
            set_text_content(&button, "⌛ Synchronizing Data...");
            set_text_content(&status_el, "");

            let form = SyncForm { period, user, password };
            let state = state.clone();
            let button = button.clone();
            let status_el = status_el.clone();
            spawn_local(async move {
                let vm = SyncViewModel::new();
                let report = state.chat.get_current_report();
                match vm.push(&report, &form, &state.logs).await {
                    Ok(message) => {
                        show_status(&status_el, &format!("✅ {}", message), true);
                        set_text_content(&button, "Success ✓");
                        let _ = add_class(&button, "pushed");
                        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::SyncHistory));
                    }
                    Err(e) => {
                        let text = match &e {
                            AppError::Backend(message) => format!("❌ {}", message),
                            AppError::Validation(message) => message.clone(),
                            _ => "❌ Server Error".to_string(),
                        };
                        log::error!("❌ [SYNC] {}", e);
                        show_status(&status_el, &text, false);
                        set_text_content(&button, PUSH_LABEL);
                        let _ = set_disabled(&button, false);
                    }
                }
            });
        })?;
    }

    let selectors = ElementBuilder::new("div")?
        .class("period-selectors")
        .child(labelled("Year", year_select)?)?
        .child(labelled("Month", month_select)?)?
        .build();

    let form = ElementBuilder::new("div")?
        .class("sync-form")
        .child(selectors)?
        .child(user_input)?
        .child(pass_input)?
        .child(push_btn)?
        .child(status)?
        .build();
    append_child(&container, &form)?;
    Ok(container)
}

fn labelled(label: &str, control: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("field")
        .child(ElementBuilder::new("label")?.text(label).build())?
        .child(control)?
        .build())
}

fn show_status(status: &Element, text: &str, ok: bool) {
    set_text_content(status, text);
    let (add, remove) = if ok { ("status-ok", "status-error") } else { ("status-error", "status-ok") };
    let _ = remove_class(status, remove);
    let _ = add_class(status, add);
}
