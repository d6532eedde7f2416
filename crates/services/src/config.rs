use std::env;
use std::time::Duration;

/// Default base URL of the remote campaign service.
pub const DEFAULT_API_URL: &str = "https://email-sales-backend.onrender.com";
/// Fixed metrics polling interval, no backoff.
pub const DEFAULT_POLL_SECS: u64 = 30;
/// Rows per page in the historical campaign list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Delay before the single staged-results re-check.
pub const DEFAULT_RESULTS_RECHECK_SECS: u64 = 10;

/// Connection settings for the remote campaign service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub poll_interval: Duration,
    pub page_size: u32,
    pub results_recheck_delay: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            results_recheck_delay: Duration::from_secs(DEFAULT_RESULTS_RECHECK_SECS),
        }
    }
}

impl ApiConfig {
    /// Builds a config from `MAILBOARD_*` environment variables, falling
    /// back to defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("MAILBOARD_API_URL") {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        if let Some(secs) = env::var("MAILBOARD_POLL_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(size) = env::var("MAILBOARD_PAGE_SIZE")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|size| *size > 0)
        {
            config.page_size = size;
        }
        config
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    #[must_use]
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
