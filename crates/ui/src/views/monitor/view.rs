use dioxus::prelude::*;

use mail_core::model::{CampaignDetail, CampaignLifecycle, CampaignSummary};
use services::{HistoryMode, Load, Notice, ViewMode};

use crate::context::AppContext;
use crate::vm::{
    map_industry_bars, map_summary_rows, DetailVm, IndustryBarVm, MetricsVm, TotalsVm,
};

use super::actions::use_monitor_actions;
use super::components::{
    DetailPane, HistoryPane, IndustryChart, MetricsPanel, NoticeBanner, StatCards, UploadCard,
};
use super::state::use_monitor_state;

#[component]
pub fn MonitorView() -> Element {
    let ctx = use_context::<AppContext>();
    let handles = use_monitor_state(ctx.page_size());
    let actions = use_monitor_actions(&handles, &ctx);

    // Tearing the view down retires the poll generation so no timer tick
    // fires afterwards.
    let mut state_for_drop = handles.state;
    use_drop(move || state_for_drop.write().teardown());

    let state = handles.state.read();
    let selected_name = handles
        .selected_file
        .read()
        .as_ref()
        .map(|upload| upload.file_name.clone());
    let notice_text = state.notice().map(notice_message);

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                h1 { "Email Campaign Dashboard" }
                p { class: "subtitle", "Monitor and manage your email campaigns" }
            }

            if let Some(message) = notice_text {
                NoticeBanner { message, on_dismiss: actions.dismiss_notice }
            }

            match state.view() {
                ViewMode::Dashboard => rsx! {
                    button {
                        class: "view-all-button",
                        onclick: move |_| actions.open_history.call(()),
                        "View All Campaigns"
                    }
                    DashboardPane {
                        active: state.active_campaign().map(ToString::to_string),
                        status_label: lifecycle_label(state.lifecycle()),
                        totals: state.totals().map(TotalsVm::from),
                        metrics: MetricsVm::from(state.metrics()),
                        metrics_stale: state.metrics_error(),
                        results_error: state.results_error(),
                        industries: map_industry_bars(state.industry_data()),
                        selected_name,
                        in_flight: state.upload_in_flight(),
                        on_file: actions.file_change,
                        on_submit: actions.submit,
                    }
                },
                ViewMode::History(HistoryMode::List) => rsx! {
                    button {
                        class: "go-back-button",
                        onclick: move |_| actions.back_to_dashboard.call(()),
                        "Back to dashboard"
                    }
                    HistoryPane {
                        list: list_vm(state.list()),
                        page: state.cursor().current_page(),
                        total_pages: state.cursor().total_pages(),
                        has_previous: state.cursor().has_previous(),
                        has_next: state.cursor().has_next(),
                        on_select: actions.select_campaign,
                        on_page: actions.change_page,
                    }
                },
                ViewMode::History(HistoryMode::Detail(_)) => rsx! {
                    DetailPane {
                        detail: detail_vm(state.detail()),
                        on_back: actions.back_to_list,
                    }
                },
            }
        }
    }
}

#[component]
fn DashboardPane(
    active: Option<String>,
    status_label: &'static str,
    totals: Option<TotalsVm>,
    metrics: MetricsVm,
    metrics_stale: bool,
    results_error: bool,
    industries: Vec<IndustryBarVm>,
    selected_name: Option<String>,
    in_flight: bool,
    on_file: Callback<FormEvent>,
    on_submit: Callback<()>,
) -> Element {
    rsx! {
        UploadCard {
            selected_name,
            in_flight,
            on_file,
            on_submit,
        }

        match active {
            None => rsx! {
                p { class: "empty-message", "No current campaign running." }
            },
            Some(id) => rsx! {
                div { class: "campaign-heading",
                    h2 { "Campaign {id}" }
                    span { class: "status-badge", "{status_label}" }
                }
                if let Some(totals) = totals {
                    StatCards { totals }
                }
                if results_error {
                    p { class: "error-message",
                        "Error loading campaign results. Please try again later."
                    }
                }
                MetricsPanel { metrics: metrics.clone(), stale: metrics_stale }
                if !industries.is_empty() {
                    IndustryChart { bars: industries.clone() }
                }
            },
        }
    }
}

fn lifecycle_label(lifecycle: CampaignLifecycle) -> &'static str {
    match lifecycle {
        CampaignLifecycle::NotStarted => "Not started",
        CampaignLifecycle::Running => "Running",
        CampaignLifecycle::Completed => "Completed",
    }
}

fn notice_message(notice: &Notice) -> String {
    match notice {
        Notice::NoFileSelected => "Please select a file first.".to_string(),
        Notice::UploadFailed => "Failed to start email campaign.".to_string(),
        Notice::CampaignCompleted(totals) => format!(
            "Campaign completed. Success: {}, Failed: {}",
            totals.successful_emails, totals.failed_emails
        ),
    }
}

fn list_vm(list: &Load<Vec<CampaignSummary>>) -> Load<Vec<crate::vm::SummaryRowVm>> {
    match list {
        Load::Idle => Load::Idle,
        Load::Loading => Load::Loading,
        Load::Failed => Load::Failed,
        Load::Ready(rows) => Load::Ready(map_summary_rows(rows)),
    }
}

fn detail_vm(detail: &Load<CampaignDetail>) -> Load<DetailVm> {
    match detail {
        Load::Idle => Load::Idle,
        Load::Loading => Load::Loading,
        Load::Failed => Load::Failed,
        Load::Ready(fetched) => Load::Ready(DetailVm::from(fetched)),
    }
}
