use dioxus::prelude::*;

#[component]
pub(in crate::views::monitor) fn UploadCard(
    selected_name: Option<String>,
    in_flight: bool,
    on_file: Callback<FormEvent>,
    on_submit: Callback<()>,
) -> Element {
    let file_label = selected_name.unwrap_or_else(|| "Choose a file".to_string());
    rsx! {
        section { class: "card upload-card",
            h3 { "Upload Campaign Data" }
            div { class: "file-row",
                input {
                    id: "campaign-file",
                    class: "hidden-input",
                    r#type: "file",
                    accept: ".xlsx, .csv",
                    onchange: move |event| on_file.call(event),
                }
                label { r#for: "campaign-file", class: "file-label", "{file_label}" }
                button {
                    class: "submit-button",
                    disabled: in_flight,
                    onclick: move |_| on_submit.call(()),
                    if in_flight { "Processing..." } else { "Start Campaign" }
                }
            }
        }
    }
}
