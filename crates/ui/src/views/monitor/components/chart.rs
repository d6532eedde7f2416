use dioxus::prelude::*;

use crate::vm::IndustryBarVm;

#[component]
pub(in crate::views::monitor) fn IndustryChart(bars: Vec<IndustryBarVm>) -> Element {
    rsx! {
        section { class: "card chart-card",
            h3 { "Industry Distribution" }
            div { class: "chart",
                for bar in bars {
                    div { class: "chart-row",
                        span { class: "chart-label", "{bar.industry}" }
                        div { class: "chart-track",
                            div { class: "chart-bar", style: "width: {bar.width_pct}%" }
                        }
                        span { class: "chart-value", "{bar.emails}" }
                    }
                }
            }
        }
    }
}
