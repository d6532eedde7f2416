use std::sync::Arc;
use std::time::Duration;

use services::CampaignApi;

/// UI-facing surface of the composition root.
pub trait UiApp: Send + Sync {
    fn campaign_api(&self) -> Arc<dyn CampaignApi>;
    fn poll_interval(&self) -> Duration;
    fn page_size(&self) -> u32;
    fn results_recheck_delay(&self) -> Duration;
}

#[derive(Clone)]
pub struct AppContext {
    api: Arc<dyn CampaignApi>,
    poll_interval: Duration,
    page_size: u32,
    results_recheck_delay: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            api: app.campaign_api(),
            poll_interval: app.poll_interval(),
            page_size: app.page_size(),
            results_recheck_delay: app.results_recheck_delay(),
        }
    }

    #[must_use]
    pub fn campaign_api(&self) -> Arc<dyn CampaignApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn results_recheck_delay(&self) -> Duration {
        self.results_recheck_delay
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
