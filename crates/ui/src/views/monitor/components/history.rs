use dioxus::prelude::*;

use mail_core::model::CampaignId;
use services::Load;

use crate::vm::SummaryRowVm;

/// Historical campaign table with pagination.
///
/// The three fetch outcomes render distinctly: a loading indicator, an
/// empty-list message, and the populated table. A failed fetch is a fourth,
/// separate banner.
#[component]
pub(in crate::views::monitor) fn HistoryPane(
    list: Load<Vec<SummaryRowVm>>,
    page: u32,
    total_pages: Option<u32>,
    has_previous: bool,
    has_next: bool,
    on_select: Callback<CampaignId>,
    on_page: Callback<u32>,
) -> Element {
    rsx! {
        section { class: "card table-card",
            h3 { "All Campaigns" }
            match list {
                Load::Idle | Load::Loading => rsx! {
                    p { class: "loading-indicator", "Loading campaigns..." }
                },
                Load::Failed => rsx! {
                    p { class: "error-message", "Error loading campaigns. Please try again later." }
                },
                Load::Ready(rows) if rows.is_empty() => rsx! {
                    p { class: "empty-message", "No previous campaigns found." }
                },
                Load::Ready(rows) => rsx! {
                    table {
                        thead {
                            tr {
                                th { "Campaign ID" }
                                th { "Started" }
                                th { "Total Emails" }
                                th { "Success" }
                                th { "Failed" }
                                th { "Open Rate" }
                                th { "Bounce Rate" }
                                th { "Reply Rate" }
                                th { "Unsubscribe Rate" }
                            }
                        }
                        tbody {
                            for row in rows {
                                SummaryRow { row, on_select }
                            }
                        }
                    }
                    PaginationControls {
                        page,
                        total_pages,
                        has_previous,
                        has_next,
                        on_page,
                    }
                },
            }
        }
    }
}

#[component]
fn SummaryRow(row: SummaryRowVm, on_select: Callback<CampaignId>) -> Element {
    let id = row.id.clone();
    rsx! {
        tr {
            class: "campaign-row",
            onclick: move |_| on_select.call(id.clone()),
            td { "{row.id}" }
            td { "{row.started_str}" }
            td { "{row.total_processed}" }
            td { "{row.successful_sends}" }
            td { "{row.failed_sends}" }
            td { "{row.open_rate}" }
            td { "{row.bounce_rate}" }
            td { "{row.reply_rate}" }
            td { "{row.unsubscribe_rate}" }
        }
    }
}

#[component]
fn PaginationControls(
    page: u32,
    total_pages: Option<u32>,
    has_previous: bool,
    has_next: bool,
    on_page: Callback<u32>,
) -> Element {
    let page_label = match total_pages {
        Some(total) => format!("Page {page} of {total}"),
        None => format!("Page {page}"),
    };
    rsx! {
        div { class: "pagination",
            button {
                disabled: !has_previous,
                onclick: move |_| on_page.call(page.saturating_sub(1)),
                "Previous"
            }
            span { class: "page-label", "{page_label}" }
            button {
                disabled: !has_next,
                onclick: move |_| on_page.call(page + 1),
                "Next"
            }
        }
    }
}
