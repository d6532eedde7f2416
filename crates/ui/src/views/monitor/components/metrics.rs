use dioxus::prelude::*;

use crate::vm::{MetricsVm, TotalsVm};

#[component]
pub(in crate::views::monitor) fn StatCards(totals: TotalsVm) -> Element {
    rsx! {
        div { class: "stats-grid",
            div { class: "card stat-card",
                h3 { "{totals.total_emails}" }
                p { "Total Emails" }
            }
            div { class: "card stat-card",
                h3 { "{totals.successful_emails}" }
                p { "Successful" }
            }
            div { class: "card stat-card",
                h3 { "{totals.failed_emails}" }
                p { "Failed" }
            }
        }
    }
}

#[component]
pub(in crate::views::monitor) fn MetricsPanel(metrics: MetricsVm, stale: bool) -> Element {
    rsx! {
        section { class: "card metrics-card",
            h3 { "Email Campaign Metrics" }
            if stale {
                p { class: "metrics-stale", "Last update failed; showing previous values." }
            }
            div { class: "metrics-grid",
                for card in metrics.cards {
                    div { class: "metric-item",
                        h4 { "{card.label}" }
                        p { "{card.rate}" }
                        small { "{card.detail}" }
                    }
                }
            }
        }
    }
}
