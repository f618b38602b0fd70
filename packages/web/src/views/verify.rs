use dioxus::prelude::*;
use ui::VerifyView;

use crate::Route;

/// Magic link landing page. `token` is empty when the query string has none.
#[component]
pub fn Verify(token: String) -> Element {
    let nav = use_navigator();
    let token = (!token.is_empty()).then_some(token);

    rsx! {
        VerifyView {
            token,
            on_redirect: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_back: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
