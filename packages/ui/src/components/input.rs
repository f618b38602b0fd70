use dioxus::prelude::*;

use super::COMPONENTS_CSS;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] input_type: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    /// Passed through as the `step` attribute for number inputs.
    #[props(default)]
    step: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }
        input {
            id: "{id}",
            class: "input-field {class}",
            r#type: "{input_type}",
            value: "{value}",
            placeholder: "{placeholder}",
            required,
            disabled,
            step,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: "{html_for}",
            {children}
        }
    }
}
