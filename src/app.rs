// ============================================================================
// APP - Root component: owns the state and the #app mount point
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::incremental::{append_new_messages, update_history_panel, update_sync_history};
use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::state::{AppState, IncrementalUpdate, UpdateType};
use crate::viewmodels::{AuthViewModel, LogViewModel};
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        if AuthViewModel::new().is_logged_in() {
            log::info!("💾 [APP] Login flag found, skipping login screen");
            state.auth.set_logged_in(true);
        }

        // Batch full re-renders requested from inside event handlers
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] App::render()");
        clear_children(&self.root);

        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;

        if self.state.auth.get_logged_in() {
            update_sync_history(&self.state)?;
        }
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Patch one region of the page in place
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        if !self.state.auth.get_logged_in() {
            return Ok(());
        }
        match update_type {
            IncrementalUpdate::SyncHistory => update_sync_history(&self.state),
            IncrementalUpdate::HistoryVisibility => update_history_panel(&self.state),
            IncrementalUpdate::Messages => append_new_messages(&self.state),
        }
    }

    /// Fetch the sync history in the background, then refresh the panel
    pub fn load_history(&self) {
        let state = self.state.clone();
        spawn_local(async move {
            let vm = LogViewModel::new();
            if vm.load(&state.logs).await.is_ok() {
                crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::SyncHistory));
            }
        });
    }
}
