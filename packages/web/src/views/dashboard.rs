use dioxus::prelude::*;
use ui::DashboardView;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardView {
            on_open_ingredients: move |_| {
                nav.push(Route::Ingredients {});
            },
            on_logged_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
