use dioxus::prelude::*;

use super::COMPONENTS_CSS;

/// A centered card over a dimmed backdrop.
///
/// Clicking the backdrop calls `on_close`; clicks inside the card do not.
/// Nothing is rendered while `open` is false.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { class: "modal-title", "{title}" }
                {children}
            }
        }
    }
}
