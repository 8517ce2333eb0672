use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote endpoint settings. The defaults are compiled in; there is no
/// environment or file configuration for the endpoint.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub page_size: u32,
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
