use dioxus::prelude::*;

use crate::components::{Alert, AlertTone, Button, ButtonVariant};
use crate::flows::logout::sign_out;
use crate::{use_api, use_session};

use super::VIEWS_CSS;

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    tint: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Recipes",
        description: "Browse and manage your recipe collection",
        icon: "📖",
        tint: "tint-blue",
    },
    Feature {
        title: "Meal Plans",
        description: "Plan your meals for the week",
        icon: "📅",
        tint: "tint-green",
    },
    Feature {
        title: "Shopping Lists",
        description: "Keep track of ingredients you need",
        icon: "🛒",
        tint: "tint-purple",
    },
    Feature {
        title: "Smart Appliances",
        description: "Monitor and control your kitchen devices",
        icon: "⚙️",
        tint: "tint-orange",
    },
    Feature {
        title: "Ingredients",
        description: "Manage your pantry inventory",
        icon: "🥕",
        tint: "tint-yellow",
    },
    Feature {
        title: "Activity Log",
        description: "View your recent kitchen activities",
        icon: "📊",
        tint: "tint-pink",
    },
];

/// Signed-in home page.
#[component]
pub fn DashboardView(
    /// Called when the Ingredients card is clicked.
    on_open_ingredients: EventHandler<()>,
    /// Called once the server has ended the session.
    on_logged_out: EventHandler<()>,
) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut logging_out = use_signal(|| false);
    let mut logout_error = use_signal(|| Option::<String>::None);

    let handle_logout = move |_| {
        let auth = client.auth();
        spawn(async move {
            logging_out.set(true);
            logout_error.set(None);
            let result = sign_out(&auth).await;
            logging_out.set(false);
            match result {
                Ok(()) => {
                    session.write().user = None;
                    on_logged_out.call(());
                }
                Err(message) => logout_error.set(Some(message)),
            }
        });
    };

    let greeting = match session().user {
        Some(user) => format!("Welcome to Your Kitchen Dashboard, {}", user.display_name()),
        None => "Welcome to Your Kitchen Dashboard".to_string(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            header {
                class: "app-header",
                div {
                    class: "app-header-inner",
                    h1 { class: "brand-title brand-title-sm", "🍳 SmartKitchen" }
                    Button {
                        variant: ButtonVariant::Link,
                        disabled: logging_out(),
                        onclick: handle_logout,
                        if logging_out() { "Logging out..." } else { "Logout" }
                    }
                }
            }

            main {
                class: "app-main",
                if let Some(message) = logout_error() {
                    Alert { message }
                }

                div {
                    class: "mb-8",
                    h2 { class: "page-title", "{greeting}" }
                    p {
                        class: "muted",
                        "Manage your recipes, meal plans, and smart appliances all in one place."
                    }
                }

                div {
                    class: "card-grid",
                    for feature in FEATURES {
                        div {
                            key: "{feature.title}",
                            class: "card feature-card",
                            class: if feature.title == "Ingredients" { "clickable" },
                            onclick: move |_| {
                                if feature.title == "Ingredients" {
                                    on_open_ingredients.call(());
                                }
                            },
                            div { class: "feature-icon {feature.tint}", "{feature.icon}" }
                            h3 { class: "feature-title", "{feature.title}" }
                            p { class: "muted text-sm", "{feature.description}" }
                        }
                    }
                }

                div {
                    class: "mt-8",
                    Alert {
                        tone: AlertTone::Success,
                        message: "You're now logged in to SmartKitchen.",
                    }
                }
            }
        }
    }
}
