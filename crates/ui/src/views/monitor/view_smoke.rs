use chrono::{TimeZone, Utc};
use dioxus::core::{NoOpMutations, Properties};
use dioxus::prelude::*;

use mail_core::model::{CampaignId, MetricsSnapshot};
use services::Load;

use crate::vm::{DetailVm, EmailRowVm, IndustryBarVm, MetricsVm, SummaryRowVm};

use super::components::{DetailPane, HistoryPane, MetricsPanel, UploadCard};
use super::test_harness::{MockApi, setup_monitor_harness};

fn render_component<P: Properties + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(&dom)
}

fn summary_row(n: u32) -> SummaryRowVm {
    SummaryRowVm {
        id: CampaignId::new(format!("campaign-{n}")),
        total_processed: 100 + u64::from(n),
        successful_sends: 90,
        failed_sends: 10,
        open_rate: "42.50%".to_string(),
        bounce_rate: "1.25%".to_string(),
        reply_rate: "10.00%".to_string(),
        unsubscribe_rate: "0.50%".to_string(),
        started_str: Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default(),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn monitor_view_smoke_renders_idle_dashboard() {
    let mut harness = setup_monitor_harness(MockApi::default());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No current campaign running."),
        "missing empty state in {html}"
    );
    assert!(
        html.contains("Start Campaign"),
        "missing submit button in {html}"
    );
    assert!(
        html.contains("View All Campaigns"),
        "missing history button in {html}"
    );
}

#[component]
fn UploadHarness(in_flight: bool) -> Element {
    rsx! {
        UploadCard {
            selected_name: None::<String>,
            in_flight,
            on_file: move |_| {},
            on_submit: move |_| {},
        }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn upload_card_disables_submit_while_in_flight() {
    let html = render_component(UploadHarness, UploadHarnessProps { in_flight: true });
    assert!(html.contains("Processing..."), "missing in-flight label in {html}");
    assert!(html.contains("disabled"), "submit not disabled in {html}");

    let html = render_component(UploadHarness, UploadHarnessProps { in_flight: false });
    assert!(html.contains("Start Campaign"), "missing idle label in {html}");
}

#[component]
fn HistoryHarness(
    list: Load<Vec<SummaryRowVm>>,
    page: u32,
    total_pages: Option<u32>,
    has_previous: bool,
    has_next: bool,
) -> Element {
    rsx! {
        HistoryPane {
            list,
            page,
            total_pages,
            has_previous,
            has_next,
            on_select: move |_| {},
            on_page: move |_| {},
        }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn history_pane_renders_loading_and_failed_states() {
    let html = render_component(
        HistoryHarness,
        HistoryHarnessProps {
            list: Load::Loading,
            page: 1,
            total_pages: None,
            has_previous: false,
            has_next: false,
        },
    );
    assert!(html.contains("Loading campaigns..."), "missing loader in {html}");

    let html = render_component(
        HistoryHarness,
        HistoryHarnessProps {
            list: Load::Failed,
            page: 1,
            total_pages: None,
            has_previous: false,
            has_next: false,
        },
    );
    assert!(
        html.contains("Error loading campaigns."),
        "missing error banner in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn history_pane_renders_empty_message() {
    let html = render_component(
        HistoryHarness,
        HistoryHarnessProps {
            list: Load::Ready(Vec::new()),
            page: 1,
            total_pages: Some(1),
            has_previous: false,
            has_next: false,
        },
    );
    assert!(
        html.contains("No previous campaigns found."),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn history_pane_renders_rows_and_pagination() {
    let rows: Vec<SummaryRowVm> = (11..21).map(summary_row).collect();
    let html = render_component(
        HistoryHarness,
        HistoryHarnessProps {
            list: Load::Ready(rows),
            page: 2,
            total_pages: Some(5),
            has_previous: true,
            has_next: true,
        },
    );
    assert!(html.contains("campaign-11"), "missing first row in {html}");
    assert!(html.contains("campaign-20"), "missing last row in {html}");
    assert!(html.contains("Page 2 of 5"), "missing page label in {html}");
    assert!(html.contains("42.50%"), "missing formatted rate in {html}");
}

#[component]
fn DetailHarness(detail: Load<DetailVm>) -> Element {
    rsx! {
        DetailPane { detail, on_back: move |_| {} }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn detail_pane_renders_email_records() {
    let detail = DetailVm {
        id: CampaignId::new("campaign-7"),
        total_processed: 3,
        successful_sends: 2,
        failed_sends: 1,
        metrics: MetricsVm::from(&MetricsSnapshot::default()),
        industries: vec![IndustryBarVm {
            industry: "Fintech".to_string(),
            emails: 3,
            width_pct: 100,
        }],
        emails: vec![
            EmailRowVm {
                email: "a@example.com".to_string(),
                opened: "Yes",
                bounced: "No",
                replied: "No",
                unsubscribed: "No",
            },
            EmailRowVm {
                email: "b@example.com".to_string(),
                opened: "No",
                bounced: "Yes",
                replied: "No",
                unsubscribed: "No",
            },
            EmailRowVm {
                email: "c@example.com".to_string(),
                opened: "Yes",
                bounced: "No",
                replied: "Yes",
                unsubscribed: "No",
            },
        ],
    };
    let html = render_component(
        DetailHarness,
        DetailHarnessProps {
            detail: Load::Ready(detail),
        },
    );
    assert!(html.contains("Campaign campaign-7"), "missing heading in {html}");
    assert!(html.contains("a@example.com"), "missing first record in {html}");
    assert!(html.contains("c@example.com"), "missing last record in {html}");
    assert!(html.contains("Fintech"), "missing industry bar in {html}");
    assert!(html.contains("Back to campaigns"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn detail_pane_renders_loading_state() {
    let html = render_component(
        DetailHarness,
        DetailHarnessProps {
            detail: Load::Loading,
        },
    );
    assert!(
        html.contains("Loading campaign details..."),
        "missing loader in {html}"
    );
}

#[component]
fn MetricsHarness(metrics: MetricsVm, stale: bool) -> Element {
    rsx! {
        MetricsPanel { metrics, stale }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn metrics_panel_renders_rates_and_counts() {
    let snapshot = MetricsSnapshot {
        open_rate: 42.5,
        bounce_rate: 1.25,
        reply_rate: 10.0,
        unsubscribe_rate: 0.5,
        total_opens: 85,
        total_bounces: 3,
        total_replies: 20,
        total_unsubscribes: 1,
    };
    let html = render_component(
        MetricsHarness,
        MetricsHarnessProps {
            metrics: MetricsVm::from(&snapshot),
            stale: false,
        },
    );
    assert!(html.contains("42.50%"), "missing open rate in {html}");
    assert!(html.contains("85 opens"), "missing open count in {html}");
    assert!(html.contains("Unsubscribe Rate"), "missing card label in {html}");
}
