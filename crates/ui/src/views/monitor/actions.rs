use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use mail_core::model::CampaignId;
use services::{fetch_results_settled, CampaignApi, CampaignUpload, FetchRequest, MonitorState};

use crate::context::AppContext;

use super::state::MonitorHandles;

/// Event handlers wired into the monitor components.
#[derive(Clone, Copy)]
pub(super) struct MonitorActions {
    pub file_change: Callback<FormEvent>,
    pub submit: Callback<()>,
    pub open_history: Callback<()>,
    pub change_page: Callback<u32>,
    pub select_campaign: Callback<CampaignId>,
    pub back_to_list: Callback<()>,
    pub back_to_dashboard: Callback<()>,
    pub dismiss_notice: Callback<()>,
}

pub(super) fn use_monitor_actions(handles: &MonitorHandles, ctx: &AppContext) -> MonitorActions {
    MonitorActions {
        file_change: build_file_change_action(handles),
        submit: build_submit_action(handles, ctx),
        open_history: build_open_history_action(handles, ctx),
        change_page: build_change_page_action(handles, ctx),
        select_campaign: build_select_campaign_action(handles, ctx),
        back_to_list: build_back_to_list_action(handles, ctx),
        back_to_dashboard: build_back_to_dashboard_action(handles),
        dismiss_notice: build_dismiss_notice_action(handles),
    }
}

/// Issues the network call named by `request` and routes the response back
/// through the state machine's guarded `apply_*` methods. Responses that
/// no longer match current state are dropped there, not here.
fn dispatch(
    mut state: Signal<MonitorState>,
    api: Arc<dyn CampaignApi>,
    recheck_delay: Duration,
    request: FetchRequest,
) {
    spawn(async move {
        match request {
            FetchRequest::Metrics { id, epoch } => {
                let fetched = api.fetch_metrics(&id).await;
                state.write().apply_metrics(&id, epoch, fetched);
            }
            FetchRequest::Results { id } => {
                let fetched = fetch_results_settled(api.as_ref(), &id, recheck_delay).await;
                state.write().apply_results(&id, fetched);
            }
            FetchRequest::Page { page, page_size } => {
                let fetched = api.list_campaigns(page, page_size).await;
                state.write().apply_page(page, fetched);
            }
            FetchRequest::Detail { id } => {
                let fetched = api.fetch_details(&id).await;
                state.write().apply_detail(&id, fetched);
            }
        }
    });
}

/// Fixed-interval metrics poll loop for the current poll generation.
///
/// The epoch is captured at spawn time; once the live state moves past it
/// (new campaign or teardown) the loop exits before issuing another fetch.
/// No backoff and no retry beyond the next scheduled tick.
pub(super) fn spawn_poller(
    mut state: Signal<MonitorState>,
    api: Arc<dyn CampaignApi>,
    interval: Duration,
) {
    let epoch = state.peek().poll_epoch();
    spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let request = {
                let current = state.peek();
                if current.poll_epoch() != epoch {
                    break;
                }
                current.poll_request()
            };
            let Some(FetchRequest::Metrics { id, epoch }) = request else {
                break;
            };
            let fetched = api.fetch_metrics(&id).await;
            state.write().apply_metrics(&id, epoch, fetched);
        }
    });
}

fn build_file_change_action(handles: &MonitorHandles) -> Callback<FormEvent> {
    let mut selected = handles.selected_file;
    use_callback(move |event: FormEvent| {
        let Some(file) = event.files().first().cloned() else {
            return;
        };
        spawn(async move {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => selected.set(Some(CampaignUpload::new(name, bytes.to_vec()))),
                Err(_) => tracing::warn!(file = %name, "could not read selected file"),
            }
        });
    })
}

fn build_submit_action(handles: &MonitorHandles, ctx: &AppContext) -> Callback<()> {
    let api = ctx.campaign_api();
    let poll_interval = ctx.poll_interval();
    let recheck_delay = ctx.results_recheck_delay();
    let mut state = handles.state;
    let selected = handles.selected_file;
    use_callback(move |()| {
        let Some(upload) = selected.peek().clone() else {
            state.write().reject_missing_file();
            return;
        };
        if !state.write().begin_upload() {
            return;
        }
        let api = Arc::clone(&api);
        spawn(async move {
            match api.start_campaign(upload).await {
                Ok(id) => {
                    tracing::info!(campaign = %id, "campaign started");
                    let requests = state.write().upload_succeeded(id);
                    for request in requests {
                        dispatch(state, Arc::clone(&api), recheck_delay, request);
                    }
                    spawn_poller(state, Arc::clone(&api), poll_interval);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to start campaign");
                    state.write().upload_failed();
                }
            }
        });
    })
}

fn build_open_history_action(handles: &MonitorHandles, ctx: &AppContext) -> Callback<()> {
    let api = ctx.campaign_api();
    let recheck_delay = ctx.results_recheck_delay();
    let mut state = handles.state;
    use_callback(move |()| {
        let request = state.write().open_history();
        dispatch(state, Arc::clone(&api), recheck_delay, request);
    })
}

fn build_change_page_action(handles: &MonitorHandles, ctx: &AppContext) -> Callback<u32> {
    let api = ctx.campaign_api();
    let recheck_delay = ctx.results_recheck_delay();
    let mut state = handles.state;
    use_callback(move |page: u32| {
        // Out-of-range pages are rejected inside the state machine and
        // produce no request at all.
        let request = state.write().change_page(page);
        if let Some(request) = request {
            dispatch(state, Arc::clone(&api), recheck_delay, request);
        }
    })
}

fn build_select_campaign_action(handles: &MonitorHandles, ctx: &AppContext) -> Callback<CampaignId> {
    let api = ctx.campaign_api();
    let recheck_delay = ctx.results_recheck_delay();
    let mut state = handles.state;
    use_callback(move |id: CampaignId| {
        let request = state.write().open_detail(id);
        if let Some(request) = request {
            dispatch(state, Arc::clone(&api), recheck_delay, request);
        }
    })
}

fn build_back_to_list_action(handles: &MonitorHandles, ctx: &AppContext) -> Callback<()> {
    let api = ctx.campaign_api();
    let recheck_delay = ctx.results_recheck_delay();
    let mut state = handles.state;
    use_callback(move |()| {
        let request = state.write().back_to_list();
        dispatch(state, Arc::clone(&api), recheck_delay, request);
    })
}

fn build_back_to_dashboard_action(handles: &MonitorHandles) -> Callback<()> {
    let mut state = handles.state;
    use_callback(move |()| {
        state.write().back_to_dashboard();
    })
}

fn build_dismiss_notice_action(handles: &MonitorHandles) -> Callback<()> {
    let mut state = handles.state;
    use_callback(move |()| {
        state.write().dismiss_notice();
    })
}
