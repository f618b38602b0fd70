use dioxus::prelude::*;
use ui::IngredientsView;

use crate::Route;

#[component]
pub fn Ingredients() -> Element {
    let nav = use_navigator();

    rsx! {
        IngredientsView {
            on_back: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
