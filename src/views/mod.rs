pub mod app;
pub mod login;
pub mod chat;
pub mod answer_card;
pub mod sync_history;

pub use app::render_app;
pub use login::render_login;
pub use chat::{render_message, render_messages, submit_question};
pub use answer_card::render_answer_card;
pub use sync_history::{fill_sync_history, render_sync_history, update_history_visibility};
