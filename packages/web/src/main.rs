use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Dashboard, Ingredients, Login, Verify};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/auth/verify?:token")]
    Verify { token: String },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/ingredients")]
    Ingredients {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting SmartKitchen web client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
