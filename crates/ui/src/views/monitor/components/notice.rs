use dioxus::prelude::*;

#[component]
pub(in crate::views::monitor) fn NoticeBanner(message: String, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div { class: "notice-banner",
            span { "{message}" }
            button {
                class: "notice-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}
