use dioxus::prelude::*;

use super::COMPONENTS_CSS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertTone {
    #[default]
    Error,
    Success,
}

/// Inline banner for a failure or confirmation message.
#[component]
pub fn Alert(#[props(default)] tone: AlertTone, message: String) -> Element {
    let class = match tone {
        AlertTone::Error => "alert alert-error",
        AlertTone::Success => "alert alert-success",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }
        div { class, role: "alert", "{message}" }
    }
}

#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
            if let Some(label) = label {
                p { class: "spinner-label", "{label}" }
            }
        }
    }
}
