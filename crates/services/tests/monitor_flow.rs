use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use mail_core::model::{
    CampaignDetail, CampaignId, CampaignLifecycle, CampaignPage, CampaignResults,
    CampaignSummary, CampaignTotals, DetailSummary, EmailRecord, MetricsSnapshot,
};
use mail_core::time::fixed_now;
use services::{fetch_results_settled, ApiError, CampaignApi, CampaignUpload, FetchRequest, MonitorState};

/// Scripted stand-in for the remote campaign service.
#[derive(Default)]
struct ScriptedApi {
    campaign_id: Option<String>,
    metrics: Option<MetricsSnapshot>,
    detail: Option<CampaignDetail>,
    pages: Vec<CampaignPage>,
    results: Mutex<VecDeque<CampaignResults>>,
    results_calls: AtomicUsize,
    metrics_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl ScriptedApi {
    fn failing() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampaignApi for ScriptedApi {
    async fn start_campaign(&self, _upload: CampaignUpload) -> Result<CampaignId, ApiError> {
        self.campaign_id
            .as_deref()
            .map(CampaignId::new)
            .ok_or(ApiError::MissingCampaignId)
    }

    async fn fetch_metrics(&self, _id: &CampaignId) -> Result<MetricsSnapshot, ApiError> {
        self.metrics_calls.fetch_add(1, Ordering::SeqCst);
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
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .iter()
            .find(|candidate| candidate.current_page == page)
            .cloned()
            .ok_or_else(|| ApiError::Service(format!("no page {page} scripted")))
    }

    async fn fetch_results(&self, _id: &CampaignId) -> Result<CampaignResults, ApiError> {
        self.results_calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .expect("results lock")
            .pop_front()
            .ok_or(ApiError::Status(reqwest::StatusCode::NOT_FOUND))
    }
}

fn upload() -> CampaignUpload {
    CampaignUpload::new("leads.csv", b"email,industry\n".to_vec())
}

fn summary_row(id: &str) -> CampaignSummary {
    CampaignSummary {
        campaign_id: CampaignId::from(id),
        total_processed: 10,
        successful_sends: 9,
        failed_sends: 1,
        metrics: MetricsSnapshot::default(),
        start_time: fixed_now(),
    }
}

fn page_of(current: u32, total: u32, ids: &[&str]) -> CampaignPage {
    CampaignPage {
        campaigns: ids.iter().map(|id| summary_row(id)).collect(),
        total_pages: total,
        current_page: current,
    }
}

/// Drives one fetch request against the api and applies the response, the
/// way the UI actions do.
async fn drive(state: &mut MonitorState, api: &ScriptedApi, request: FetchRequest) {
    match request {
        FetchRequest::Metrics { id, epoch } => {
            let fetched = api.fetch_metrics(&id).await;
            state.apply_metrics(&id, epoch, fetched);
        }
        FetchRequest::Results { id } => {
            let fetched = fetch_results_settled(api, &id, Duration::from_millis(1)).await;
            state.apply_results(&id, fetched);
        }
        FetchRequest::Page { page, page_size } => {
            let fetched = api.list_campaigns(page, page_size).await;
            state.apply_page(page, fetched);
        }
        FetchRequest::Detail { id } => {
            let fetched = api.fetch_details(&id).await;
            state.apply_detail(&id, fetched);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn upload_flow_activates_campaign_and_shows_first_snapshot() {
    let api = ScriptedApi {
        campaign_id: Some("c-42".to_string()),
        metrics: Some(MetricsSnapshot {
            open_rate: 25.0,
            total_opens: 5,
            ..MetricsSnapshot::default()
        }),
        results: Mutex::new(VecDeque::from([CampaignResults::Ready {
            totals: CampaignTotals {
                total_emails: 20,
                successful_emails: 19,
                failed_emails: 1,
            },
            industries: Vec::new(),
        }])),
        ..ScriptedApi::default()
    };

    let mut state = MonitorState::new(10);
    assert!(state.begin_upload());
    let id = api.start_campaign(upload()).await.expect("start campaign");
    let requests = state.upload_succeeded(id);

    // Zero totals are displayed until the first metrics arrive.
    assert_eq!(state.metrics().total_opens, 0);

    for request in requests {
        drive(&mut state, &api, request).await;
    }

    assert_eq!(state.active_campaign(), Some(&CampaignId::from("c-42")));
    assert_eq!(api.metrics_calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.metrics().open_rate, 25.0);
    assert_eq!(state.lifecycle(), CampaignLifecycle::Completed);
    assert_eq!(
        state.totals().map(|totals| totals.successful_emails),
        Some(19)
    );
}

#[tokio::test]
async fn upload_without_campaign_id_changes_nothing() {
    let api = ScriptedApi::failing();
    let mut state = MonitorState::new(10);

    assert!(state.begin_upload());
    let started = api.start_campaign(upload()).await;
    assert!(matches!(started, Err(ApiError::MissingCampaignId)));
    state.upload_failed();

    assert!(state.active_campaign().is_none());
    assert_eq!(state.lifecycle(), CampaignLifecycle::NotStarted);
    assert!(state.notice().is_some());
    assert_eq!(api.metrics_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn staged_results_recheck_once_after_processing() {
    let api = ScriptedApi {
        results: Mutex::new(VecDeque::from([
            CampaignResults::Processing,
            CampaignResults::Ready {
                totals: CampaignTotals {
                    total_emails: 4,
                    successful_emails: 4,
                    failed_emails: 0,
                },
                industries: Vec::new(),
            },
        ])),
        ..ScriptedApi::default()
    };

    let id = CampaignId::from("c-9");
    let settled = fetch_results_settled(&api, &id, Duration::from_secs(10))
        .await
        .expect("results settle");

    assert!(!settled.is_processing());
    assert_eq!(api.results_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn staged_results_do_not_loop_past_the_single_recheck() {
    let api = ScriptedApi {
        results: Mutex::new(VecDeque::from([
            CampaignResults::Processing,
            CampaignResults::Processing,
        ])),
        ..ScriptedApi::default()
    };

    let id = CampaignId::from("c-9");
    let settled = fetch_results_settled(&api, &id, Duration::from_secs(10))
        .await
        .expect("results settle");

    assert!(settled.is_processing());
    assert_eq!(api.results_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn history_browse_and_drill_down_round_trip() {
    let api = ScriptedApi {
        pages: vec![
            page_of(1, 2, &["c-1", "c-2"]),
            page_of(2, 2, &["c-3", "c-4"]),
        ],
        detail: Some(CampaignDetail {
            campaign_id: CampaignId::from("c-3"),
            summary: DetailSummary {
                metrics: MetricsSnapshot::default(),
                total_processed: 3,
                successful_sends: 3,
                failed_sends: 0,
            },
            industry_data: Vec::new(),
            all_emails: vec![
                EmailRecord {
                    email: "a@example.com".to_string(),
                    opened: true,
                    bounced: false,
                    replied: false,
                    unsubscribed: false,
                },
                EmailRecord {
                    email: "b@example.com".to_string(),
                    opened: false,
                    bounced: true,
                    replied: false,
                    unsubscribed: false,
                },
                EmailRecord {
                    email: "c@example.com".to_string(),
                    opened: true,
                    bounced: false,
                    replied: true,
                    unsubscribed: false,
                },
            ],
        }),
        ..ScriptedApi::default()
    };

    let mut state = MonitorState::new(10);
    let request = state.open_history();
    drive(&mut state, &api, request).await;
    assert_eq!(state.list().as_ready().map(Vec::len), Some(2));

    let request = state.change_page(2).expect("page 2 in range");
    drive(&mut state, &api, request).await;
    assert_eq!(state.cursor().current_page(), 2);

    // Out-of-range page never reaches the mock.
    let before = api.list_calls.load(Ordering::SeqCst);
    assert!(state.change_page(3).is_none());
    assert_eq!(api.list_calls.load(Ordering::SeqCst), before);

    let request = state
        .open_detail(CampaignId::from("c-3"))
        .expect("detail from list");
    drive(&mut state, &api, request).await;
    let detail = state.detail().as_ready().expect("detail ready");
    assert_eq!(detail.all_emails.len(), 3);

    // Back restores page 2, not page 1.
    let request = state.back_to_list();
    assert_eq!(
        request,
        FetchRequest::Page {
            page: 2,
            page_size: 10
        }
    );
    drive(&mut state, &api, request).await;
    assert_eq!(state.cursor().current_page(), 2);
}
