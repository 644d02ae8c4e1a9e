// ============================================================================
// BAHMNI AI REPORTING ASSISTANT - FRONTEND MVVM (PURE RUST)
// ============================================================================
// - Views: functions that build DOM (no business logic)
// - ViewModels: UI logic, generic over the backend/storage seams
// - Services: HTTP, localStorage, CSV only
// - State: Rc<RefCell> view-state
// - Models: JSON shapes shared with the backend
// ============================================================================

mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::UpdateType;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Bahmni AI Reporting - Rust + MVVM");

    let mut app = App::new()?;
    app.render()?;
    let logged_in = app.state().auth.get_logged_in();
    if logged_in {
        app.load_history();
    }

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Registered once here, so leaking the closure is fine
    if let Some(win) = web_sys::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("🔄 [MAIN] loggedIn received, re-rendering");
            rerender_app();
            APP.with(|app_cell| {
                if let Some(ref app) = *app_cell.borrow() {
                    app.load_history();
                }
            });
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("loggedIn", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Full re-render
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| match update_type {
        UpdateType::Incremental(inc_type) => {
            let needs_full_render = match *app_cell.borrow() {
                Some(ref app) => match app.update_incremental(inc_type) {
                    Ok(()) => false,
                    Err(e) => {
                        let error_str = format!("{:?}", e);
                        if error_str.contains("needs full render") {
                            log::info!("🔄 [UPDATE] {:?} falling back to full render", inc_type);
                            true
                        } else {
                            log::error!("❌ [UPDATE] Incremental update failed: {}", error_str);
                            false
                        }
                    }
                },
                None => {
                    log::warn!("⚠️ [UPDATE] App not initialised");
                    false
                }
            };

            if needs_full_render {
                if let Some(ref mut app) = *app_cell.borrow_mut() {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] {:?}", e);
                    }
                }
            }
        }
        UpdateType::FullRender => {
            if let Some(ref mut app) = *app_cell.borrow_mut() {
                match app.render() {
                    Ok(()) => log::debug!("✅ [RERENDER] App re-rendered"),
                    Err(e) => log::error!("❌ [RERENDER] {:?}", e),
                }
            } else {
                log::warn!("⚠️ [RERENDER] App not initialised");
            }
        }
    });
}

/// Re-render hook callable from JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
