use dioxus::prelude::*;
use ui::LoginView;

#[component]
pub fn Login() -> Element {
    rsx! {
        LoginView {}
    }
}
