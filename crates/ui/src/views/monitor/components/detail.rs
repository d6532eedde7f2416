use dioxus::prelude::*;

use services::Load;

use crate::vm::DetailVm;

use super::{IndustryChart, MetricsPanel};

#[component]
pub(in crate::views::monitor) fn DetailPane(detail: Load<DetailVm>, on_back: Callback<()>) -> Element {
    rsx! {
        button {
            class: "go-back-button",
            onclick: move |_| on_back.call(()),
            "Back to campaigns"
        }
        match detail {
            Load::Idle | Load::Loading => rsx! {
                p { class: "loading-indicator", "Loading campaign details..." }
            },
            Load::Failed => rsx! {
                p { class: "error-message", "Error loading campaign details. Please try again later." }
            },
            Load::Ready(detail) => rsx! {
                DetailBody { detail }
            },
        }
    }
}

#[component]
fn DetailBody(detail: DetailVm) -> Element {
    rsx! {
        section { class: "card detail-card",
            h3 { "Campaign {detail.id}" }
            dl { class: "detail-summary",
                dt { "Total processed" }
                dd { "{detail.total_processed}" }
                dt { "Successful" }
                dd { "{detail.successful_sends}" }
                dt { "Failed" }
                dd { "{detail.failed_sends}" }
            }
        }
        MetricsPanel { metrics: detail.metrics.clone(), stale: false }
        if !detail.industries.is_empty() {
            IndustryChart { bars: detail.industries.clone() }
        }
        section { class: "card table-card",
            h3 { "Email Records" }
            if detail.emails.is_empty() {
                p { class: "empty-message", "No recipient records for this campaign." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Email" }
                            th { "Opened" }
                            th { "Bounced" }
                            th { "Replied" }
                            th { "Unsubscribed" }
                        }
                    }
                    tbody {
                        for row in detail.emails {
                            tr {
                                td { "{row.email}" }
                                td { "{row.opened}" }
                                td { "{row.bounced}" }
                                td { "{row.replied}" }
                                td { "{row.unsubscribed}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
