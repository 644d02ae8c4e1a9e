pub mod backend;
pub mod api_client;
pub mod session_store;
pub mod csv_export;

pub use backend::ReportingBackend;
pub use api_client::ApiClient;
pub use session_store::{LocalSessionStore, MemorySessionStore, SessionStore};
pub use csv_export::{build_csv, download_csv};
