// ============================================================================
// LOGIN VIEW - Mock password gate
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_click, on_enter, set_text_content, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");

    let screen = ElementBuilder::new("div")?.id("loginBox")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("div")?.class("logo-icon").text("🩺").build())?
        .child(ElementBuilder::new("h1")?.text("Bahmni AI Assistant").build())?
        .child(ElementBuilder::new("p")?.text("Database AI + DHIS2 Integration").build())?
        .build();

    let password = ElementBuilder::new("input")?
        .id("pwd")?
        .attr("type", "password")?
        .attr("placeholder", "Password")?
        .attr("autocomplete", "current-password")?
        .class("form-input")
        .build();

    let error = ElementBuilder::new("div")?.class("login-error").build();

    let submit = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-login")
        .text("Login")
        .build();

    let attempt = {
        let state = state.clone();
        let password = password.clone();
        let error = error.clone();
        move || {
            let vm = AuthViewModel::new();
            match vm.login(&input_value(&password)) {
                Ok(()) => {
                    state.auth.set_logged_in(true);
                    if let Some(win) = web_sys::window() {
                        // Picked up by the listener registered in main()
                        if let Ok(event) = web_sys::Event::new("loggedIn") {
                            let _ = win.dispatch_event(&event);
                        }
                    }
                }
                Err(e) => set_text_content(&error, &e.to_string()),
            }
        }
    };
    {
        let attempt = attempt.clone();
        on_click(&submit, move |_| attempt())?;
    }
    on_enter(&password, attempt)?;

    let form = ElementBuilder::new("div")?
        .class("login-form")
        .child(password.clone())?
        .child(submit)?
        .child(error)?
        .build();

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;
    Ok(screen)
}
