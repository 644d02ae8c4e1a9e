use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix for every backend call; empty means same origin
    pub backend_url: String,
    pub enable_logging: bool,
    pub log_page_size: usize,
    pub sync_config: SyncConfig,
    /// Mock-only UI gate. Real authentication lives server-side.
    pub login_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub first_year: i32,
    pub last_year: i32,
    pub default_year: i32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            first_year: 2025,
            last_year: 2030,
            default_year: 2026,
        }
    }
}

impl SyncConfig {
    /// Years offered in the sync panel selector
    pub fn years(&self) -> Vec<i32> {
        (self.first_year..=self.last_year).collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            enable_logging: true,
            log_page_size: 10,
            sync_config: SyncConfig::default(),
            login_password: "Admin123".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let sync_defaults = SyncConfig::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("")
                .trim_end_matches('/')
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_page_size: option_env!("LOG_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size: &usize| *size > 0)
                .unwrap_or(defaults.log_page_size),
            sync_config: SyncConfig {
                first_year: option_env!("SYNC_FIRST_YEAR")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(sync_defaults.first_year),
                last_year: option_env!("SYNC_LAST_YEAR")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(sync_defaults.last_year),
                default_year: option_env!("SYNC_DEFAULT_YEAR")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(sync_defaults.default_year),
            },
            login_password: option_env!("LOGIN_PASSWORD")
                .map(|s| s.to_string())
                .unwrap_or(defaults.login_password),
        }
    }

    /// Full URL of a backend path such as `/ai/sync/logs`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_page_size, 10);
        assert_eq!(config.sync_config.years(), vec![2025, 2026, 2027, 2028, 2029, 2030]);
        assert_eq!(config.sync_config.default_year, 2026);
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let mut config = AppConfig::default();
        assert_eq!(config.endpoint("/ai/query"), "/ai/query");

        config.backend_url = "http://localhost:8000".to_string();
        assert_eq!(config.endpoint("/ai/query"), "http://localhost:8000/ai/query");
    }
}
