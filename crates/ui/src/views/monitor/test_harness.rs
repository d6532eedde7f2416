use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use mail_core::model::{
    CampaignDetail, CampaignId, CampaignPage, CampaignResults, MetricsSnapshot,
};
use services::{ApiError, CampaignApi, CampaignUpload};

use crate::context::{build_app_context, UiApp};

use super::MonitorView;

/// Scripted `CampaignApi` for view tests.
#[derive(Default)]
pub(super) struct MockApi {
    pub campaign_id: Option<String>,
    pub metrics: Option<MetricsSnapshot>,
    pub pages: Vec<CampaignPage>,
    pub detail: Option<CampaignDetail>,
}

#[async_trait]
impl CampaignApi for MockApi {
    async fn start_campaign(&self, _upload: CampaignUpload) -> Result<CampaignId, ApiError> {
        self.campaign_id
            .as_deref()
            .map(CampaignId::new)
            .ok_or(ApiError::MissingCampaignId)
    }

    async fn fetch_metrics(&self, _id: &CampaignId) -> Result<MetricsSnapshot, ApiError> {
        self.metrics
            .clone()
            .ok_or_else(|| ApiError::Service("no metrics scripted".to_string()))
    }

    async fn fetch_details(&self, _id: &CampaignId) -> Result<CampaignDetail, ApiError> {
        self.detail
            .clone()
            .ok_or_else(|| ApiError::Service("no detail scripted".to_string()))
    }

    async fn list_campaigns(&self, page: u32, _page_size: u32) -> Result<CampaignPage, ApiError> {
        self.pages
            .iter()
            .find(|candidate| candidate.current_page == page)
            .cloned()
            .ok_or_else(|| ApiError::Service(format!("no page {page} scripted")))
    }

    async fn fetch_results(&self, _id: &CampaignId) -> Result<CampaignResults, ApiError> {
        Err(ApiError::Service("no results scripted".to_string()))
    }
}

struct TestApp {
    api: Arc<MockApi>,
}

impl UiApp for TestApp {
    fn campaign_api(&self) -> Arc<dyn CampaignApi> {
        Arc::clone(&self.api) as Arc<dyn CampaignApi>
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_millis(10)
    }

    fn page_size(&self) -> u32 {
        10
    }

    fn results_recheck_delay(&self) -> Duration {
        Duration::from_millis(10)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn MonitorHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { MonitorView {} }
}

pub(super) struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub(super) fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub(super) fn setup_monitor_harness(api: MockApi) -> ViewHarness {
    let app = Arc::new(TestApp { api: Arc::new(api) });
    let dom = VirtualDom::new_with_props(MonitorHarness, HarnessProps { app });
    ViewHarness { dom }
}
